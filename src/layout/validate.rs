//! Placement legality.
//!
//! A candidate is checked against one open site in four steps:
//! 1. a double must lie across the line it extends, never along it
//! 2. the end facing the anchor must match the anchor's end facing it
//! 3. the anchor/candidate orientation pair picks the footprint shape
//! 4. the footprint, grown by one unit, must not touch any tile but the anchor

use thiserror::Error;
use tracing::trace;

use super::board::{Layout, PlacedId};
use super::site::PlacementSite;
use crate::tiles::{Direction, Footprint, Orientation, Rect, Tile, CELL, HALF_CELL};

/// Why a candidate placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("a double must be laid across the direction it extends")]
    ParallelDouble,
    #[error("no placement rule matches these ends and orientations")]
    NoMatchingRule,
    #[error("footprint would touch placed tile {0}")]
    Overlap(PlacedId),
    #[error("no placed tile {0}")]
    UnknownAnchor(PlacedId),
    #[error("site {direction:?} of {anchor} is not open")]
    SiteClosed { anchor: PlacedId, direction: Direction },
    #[error("no tile or site is selected")]
    NoSelection,
}

impl Layout {
    /// Check whether `tile`, as currently oriented, may be played at `site`.
    ///
    /// The site names its anchor tile; its geometry is taken from the live
    /// layout. On success the footprint is the exact area the tile will
    /// occupy, and its origin is the position to hand to
    /// [`Layout::place_tile`].
    pub fn is_valid_move(&self, tile: &Tile, site: &PlacementSite) -> Result<Footprint, MoveRejection> {
        let anchor = self
            .get(site.anchor)
            .ok_or(MoveRejection::UnknownAnchor(site.anchor))?;
        let site = anchor.site(site.direction).ok_or(MoveRejection::SiteClosed {
            anchor: site.anchor,
            direction: site.direction,
        })?;

        if tile.is_double() && tile.orientation() == site.direction.axis() {
            return Err(MoveRejection::ParallelDouble);
        }

        let rect = match anchor.tile.orientation() {
            Orientation::Horizontal => beside_horizontal(&anchor.tile, tile, site),
            Orientation::Vertical => beside_vertical(&anchor.tile, tile, site),
        }
        .ok_or(MoveRejection::NoMatchingRule)?;

        let grown = rect.inflate(1);
        if let Some(hit) = self
            .tiles()
            .filter(|p| p.id != anchor.id)
            .find(|p| grown.intersects(&p.rect))
        {
            trace!(tile = %tile, anchor = %anchor.id, hit = %hit.id, "footprint overlaps");
            return Err(MoveRejection::Overlap(hit.id));
        }

        Ok(Footprint {
            rect,
            direction: site.direction,
        })
    }
}

fn beside_horizontal(anchor: &Tile, tile: &Tile, site: &PlacementSite) -> Option<Rect> {
    let (x, y) = (site.rect.x, site.rect.y);
    match (tile.orientation(), site.direction) {
        (Orientation::Horizontal, Direction::Right) if anchor.second() == tile.first() => {
            Some(Rect::new(x, y, 2 * CELL, CELL))
        }
        (Orientation::Horizontal, Direction::Left) if anchor.first() == tile.second() => {
            Some(Rect::new(x - CELL, y, 2 * CELL, CELL))
        }
        (Orientation::Vertical, Direction::Right) if tile.is_double() && anchor.second() == tile.first() => {
            Some(Rect::new(x, y - HALF_CELL, CELL, 2 * CELL))
        }
        (Orientation::Vertical, Direction::Left) if tile.is_double() && anchor.first() == tile.second() => {
            Some(Rect::new(x, y - HALF_CELL, CELL, 2 * CELL))
        }
        (Orientation::Vertical, Direction::Top)
            if !tile.is_double() && anchor.is_double() && anchor.second() == tile.second() =>
        {
            Some(Rect::new(x, y - CELL, CELL, 2 * CELL))
        }
        (Orientation::Vertical, Direction::Bottom)
            if !tile.is_double() && anchor.is_double() && anchor.first() == tile.first() =>
        {
            Some(Rect::new(x, y, CELL, 2 * CELL))
        }
        _ => None,
    }
}

fn beside_vertical(anchor: &Tile, tile: &Tile, site: &PlacementSite) -> Option<Rect> {
    let (x, y) = (site.rect.x, site.rect.y);
    match (tile.orientation(), site.direction) {
        (Orientation::Vertical, Direction::Top) if anchor.first() == tile.second() => {
            Some(Rect::new(x, y - CELL, CELL, 2 * CELL))
        }
        (Orientation::Vertical, Direction::Bottom) if anchor.second() == tile.first() => {
            Some(Rect::new(x, y, CELL, 2 * CELL))
        }
        (Orientation::Horizontal, Direction::Top) if tile.is_double() && anchor.first() == tile.second() => {
            Some(Rect::new(x - HALF_CELL, y, 2 * CELL, CELL))
        }
        (Orientation::Horizontal, Direction::Bottom) if tile.is_double() && anchor.second() == tile.first() => {
            Some(Rect::new(x - HALF_CELL, y, 2 * CELL, CELL))
        }
        (Orientation::Horizontal, Direction::Right)
            if !tile.is_double() && anchor.is_double() && anchor.first() == tile.first() =>
        {
            Some(Rect::new(x, y, 2 * CELL, CELL))
        }
        (Orientation::Horizontal, Direction::Left)
            if !tile.is_double() && anchor.is_double() && anchor.first() == tile.second() =>
        {
            Some(Rect::new(x - CELL, y, 2 * CELL, CELL))
        }
        _ => None,
    }
}
