//! The draw pile ("bazaar").

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::error::RulesError;
use crate::tiles::{Pips, Tile};

/// Face-down tiles waiting to be drawn. Draws come off the end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPile {
    tiles: Vec<Tile>,
}

impl DrawPile {
    /// Every tile of a double-`max_pip` set, in canonical order.
    ///
    /// That is each pair `(a, b)` with `a <= b <= max_pip`: 28 tiles for
    /// double-six.
    #[must_use]
    pub fn full(max_pip: Pips) -> Self {
        let tiles = (0..=max_pip)
            .flat_map(|a| (a..=max_pip).map(move |b| Tile::new(a, b)))
            .collect();
        Self { tiles }
    }

    /// Pile holding exactly `tiles`; the last one is drawn first.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.tiles);
    }

    pub fn draw(&mut self) -> Result<Tile, RulesError> {
        self.tiles.pop().ok_or(RulesError::EmptyDrawPile)
    }

    /// Take up to `count` tiles off the pile, in draw order.
    pub fn deal(&mut self, count: usize) -> Vec<Tile> {
        let split = self.tiles.len().saturating_sub(count);
        let mut dealt = self.tiles.split_off(split);
        dealt.reverse();
        dealt
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}
