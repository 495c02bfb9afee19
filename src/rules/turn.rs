//! Turns: a decided placement waiting to be applied.
//!
//! A `Turn` is produced either by the move search (automated seats) or from
//! the current hand and layout selection (interactive seats). It is plain data
//! and applying it is the game's job.

use serde::{Deserialize, Serialize};

use super::finder::find_possible_turn;
use crate::core::PlayerKind;
use crate::layout::{Layout, MoveRejection, PlacementSite};
use crate::tiles::{Footprint, Point, Rect, Tile};
use crate::zones::Hand;

/// One placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    tile: Tile,
    anchor: Option<PlacementSite>,
    position: Point,
    source: Tile,
}

impl Turn {
    /// The first tile of a game: flat at the origin, no anchor.
    #[must_use]
    pub fn opening(source: Tile) -> Self {
        Self {
            tile: source.reset(),
            anchor: None,
            position: Point::ORIGIN,
            source,
        }
    }

    /// `tile` played at `site`, covering `footprint`.
    ///
    /// `source` is the tile as it sits in the hand, which may be rotated
    /// differently from `tile`.
    #[must_use]
    pub fn anchored(tile: Tile, site: PlacementSite, footprint: Footprint, source: Tile) -> Self {
        Self {
            tile,
            anchor: Some(site),
            position: footprint.position(),
            source,
        }
    }

    /// The tile as it will lie on the layout.
    #[must_use]
    pub fn tile(&self) -> &Tile {
        &self.tile
    }

    /// The site it attaches to. `None` only for the opening tile.
    #[must_use]
    pub fn anchor(&self) -> Option<&PlacementSite> {
        self.anchor.as_ref()
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The area the tile will cover.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::at(self.position, self.tile.size())
    }

    /// The hand tile this turn spends.
    #[must_use]
    pub fn source(&self) -> &Tile {
        &self.source
    }
}

/// Turn from the selected hand tile at the highlighted layout site.
///
/// The tile is played exactly as the player has rotated it.
pub fn selected_turn(hand: &Hand, layout: &Layout) -> Result<Turn, MoveRejection> {
    let tile = hand.selected().ok_or(MoveRejection::NoSelection)?;
    let site = layout.selected_site().ok_or(MoveRejection::NoSelection)?;
    let footprint = layout.is_valid_move(tile, site)?;
    Ok(Turn::anchored(*tile, *site, footprint, *tile))
}

impl PlayerKind {
    /// The turn this kind of seat would take right now, if any.
    #[must_use]
    pub fn produce_turn(self, hand: &Hand, layout: &Layout) -> Option<Turn> {
        match self {
            PlayerKind::Interactive => selected_turn(hand, layout).ok(),
            PlayerKind::Automated => find_possible_turn(hand, layout),
        }
    }
}
