//! Open placement sites.
//!
//! A site is a one-cell slot next to a placed tile where another tile could
//! attach. Each placed tile owns its sites; a straight tile opens two along its
//! length, a double opens two more across it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::PlacedId;
use crate::tiles::{Direction, Orientation, Point, Rect, Size, Tile, CELL, HALF_CELL};

/// Sites owned by one placed tile. Never more than four.
pub type Sites = SmallVec<[PlacementSite; 4]>;

/// A directional slot next to a placed tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementSite {
    /// The placed tile this site extends from.
    pub anchor: PlacedId,
    /// Which way a tile played here extends from the anchor.
    pub direction: Direction,
    /// The cell the site covers.
    pub rect: Rect,
}

impl PlacementSite {
    fn cell(anchor: PlacedId, direction: Direction, x: i32, y: i32) -> Self {
        Self {
            anchor,
            direction,
            rect: Rect::at(Point::new(x, y), Size::new(CELL, CELL)),
        }
    }
}

/// Sites opened by `tile` lying at `rect`, in creation order.
pub(crate) fn open_sites(anchor: PlacedId, tile: &Tile, rect: Rect) -> Sites {
    let mut sites = Sites::new();
    match tile.orientation() {
        Orientation::Horizontal => {
            sites.push(PlacementSite::cell(anchor, Direction::Right, rect.right(), rect.top()));
            sites.push(PlacementSite::cell(anchor, Direction::Left, rect.left() - CELL, rect.top()));
            if tile.is_double() {
                let x = rect.left() + HALF_CELL;
                sites.push(PlacementSite::cell(anchor, Direction::Top, x, rect.top() - CELL));
                sites.push(PlacementSite::cell(anchor, Direction::Bottom, x, rect.bottom()));
            }
        }
        Orientation::Vertical => {
            sites.push(PlacementSite::cell(anchor, Direction::Top, rect.left(), rect.top() - CELL));
            sites.push(PlacementSite::cell(anchor, Direction::Bottom, rect.left(), rect.bottom()));
            if tile.is_double() {
                let y = rect.top() + HALF_CELL;
                sites.push(PlacementSite::cell(anchor, Direction::Right, rect.right(), y));
                sites.push(PlacementSite::cell(anchor, Direction::Left, rect.left() - CELL, y));
            }
        }
    }
    sites
}
