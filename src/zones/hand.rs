//! A player's hand.
//!
//! Tiles keep the order they were received in and are packed left to right
//! into rows `hand_width` units wide. Removing a tile re-packs the rest, so the
//! slots are always dense.
//!
//! The selection is a `TileKey`, not a second copy of the tile: rotating the
//! selected tile rotates the one in the hand, and removing it drops the
//! selection with it.

use serde::{Deserialize, Serialize};

use crate::error::RulesError;
use crate::tiles::{Point, Rect, Tile, TileKey, CELL};

/// Default row width, room for seven flat tiles.
pub const DEFAULT_HAND_WIDTH: i32 = 700;

/// Horizontal distance between slots: one flat tile.
const SLOT_WIDTH: i32 = 2 * CELL;

/// Vertical distance between rows: one upright tile.
const ROW_HEIGHT: i32 = 2 * CELL;

/// Ordered tiles of one player, with at most one selected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
    selected: Option<TileKey>,
    width: i32,
}

impl Default for Hand {
    fn default() -> Self {
        Self::new(DEFAULT_HAND_WIDTH)
    }
}

impl Hand {
    /// Empty hand whose rows are `width` units wide.
    #[must_use]
    pub fn new(width: i32) -> Self {
        Self {
            tiles: Vec::new(),
            selected: None,
            width,
        }
    }

    /// Hand holding `tiles` in order.
    #[must_use]
    pub fn with_tiles(width: i32, tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut hand = Self::new(width);
        for tile in tiles {
            hand.add_tile(tile);
        }
        hand
    }

    /// Put a tile in the next free slot.
    pub fn add_tile(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Take out the tile with the same identity as `tile`, in any rotation.
    ///
    /// Returns the tile as it was held. Clears the selection if it pointed at
    /// this tile.
    pub fn remove_tile(&mut self, tile: &Tile) -> Result<Tile, RulesError> {
        let key = tile.key();
        let index = self
            .index_of(key)
            .ok_or(RulesError::TileNotInHand(key))?;
        if self.selected == Some(key) {
            self.selected = None;
        }
        Ok(self.tiles.remove(index))
    }

    /// Toggle selection of a held tile.
    ///
    /// Selecting the selected tile clears the selection; selecting another
    /// tile replaces it.
    pub fn select_tile(&mut self, key: TileKey) -> Result<(), RulesError> {
        if self.index_of(key).is_none() {
            return Err(RulesError::TileNotInHand(key));
        }
        self.selected = if self.selected == Some(key) {
            None
        } else {
            Some(key)
        };
        Ok(())
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Tile> {
        self.selected
            .and_then(|key| self.tiles.iter().find(|t| t.key() == key))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Quarter-turn the selected tile in place.
    pub fn rotate_selected(&mut self) -> Option<&Tile> {
        let key = self.selected?;
        let tile = self.tiles.iter_mut().find(|t| t.key() == key)?;
        tile.rotate();
        Some(tile)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: TileKey) -> bool {
        self.index_of(key).is_some()
    }

    /// Sum of all pips held.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.tiles.iter().map(Tile::value).sum()
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Top-left corner of slot `index`.
    #[must_use]
    pub fn slot(&self, index: usize) -> Point {
        let per_row = self.slots_per_row();
        let column = (index % per_row) as i32;
        let row = (index / per_row) as i32;
        Point::new(column * SLOT_WIDTH, row * ROW_HEIGHT)
    }

    /// Held tiles with the area each one covers.
    pub fn layout(&self) -> impl Iterator<Item = (&Tile, Rect)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| (tile, Rect::at(self.slot(i), tile.size())))
    }

    /// The held tile drawn under `point`.
    #[must_use]
    pub fn tile_at(&self, point: Point) -> Option<&Tile> {
        self.layout()
            .find(|(_, rect)| rect.contains(point))
            .map(|(tile, _)| tile)
    }

    fn slots_per_row(&self) -> usize {
        let per_row = (self.width + SLOT_WIDTH - 1) / SLOT_WIDTH;
        per_row.max(1) as usize
    }

    fn index_of(&self, key: TileKey) -> Option<usize> {
        self.tiles.iter().position(|t| t.key() == key)
    }
}
