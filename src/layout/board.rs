//! The layout: every placed tile and the sites still open next to it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::site::{open_sites, PlacementSite, Sites};
use crate::error::RulesError;
use crate::tiles::{Direction, Point, Rect, Tile, TileKey};

/// Index of a tile on the layout, in placement order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlacedId(pub u16);

impl PlacedId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlacedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Placed({})", self.0)
    }
}

/// A tile on the layout with the sites it still owns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedTile {
    pub id: PlacedId,
    pub tile: Tile,
    pub rect: Rect,
    sites: Sites,
}

impl PlacedTile {
    /// Open sites in creation order.
    pub fn sites(&self) -> &[PlacementSite] {
        &self.sites
    }

    /// The open site in `direction`, if it has not been closed.
    #[must_use]
    pub fn site(&self, direction: Direction) -> Option<&PlacementSite> {
        self.sites.iter().find(|s| s.direction == direction)
    }

    fn close(&mut self, direction: Direction) {
        self.sites.retain(|s| s.direction != direction);
    }
}

/// Placed tiles in placement order.
///
/// Each tile owns its open sites, so closing a site is a filter on the owning
/// tile's list and there are no cross references to keep in sync. Sites whose
/// cell is covered by any placed tile are pruned as tiles arrive.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    placed: Vec<PlacedTile>,
    keys: FxHashMap<TileKey, PlacedId>,
    highlighted: Option<(PlacedId, Direction)>,
}

impl Layout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Placed tiles in placement order.
    pub fn tiles(&self) -> impl Iterator<Item = &PlacedTile> {
        self.placed.iter()
    }

    #[must_use]
    pub fn get(&self, id: PlacedId) -> Option<&PlacedTile> {
        self.placed.get(id.index())
    }

    /// Where the tile with this identity was placed, if it is on the layout.
    #[must_use]
    pub fn find(&self, key: TileKey) -> Option<PlacedId> {
        self.keys.get(&key).copied()
    }

    /// Every open site: layout order, then each tile's site order.
    pub fn open_sites(&self) -> impl Iterator<Item = &PlacementSite> {
        self.placed.iter().flat_map(|p| p.sites.iter())
    }

    /// The open site of `anchor` in `direction`.
    #[must_use]
    pub fn site(&self, anchor: PlacedId, direction: Direction) -> Option<&PlacementSite> {
        self.get(anchor).and_then(|p| p.site(direction))
    }

    /// First open site whose cell contains `point`.
    #[must_use]
    pub fn site_at(&self, point: Point) -> Option<&PlacementSite> {
        self.open_sites().find(|s| s.rect.contains(point))
    }

    /// Place `tile` with its top-left corner at `position`.
    ///
    /// This does not check the domino rules; callers validate first with
    /// [`Layout::is_valid_move`]. When `anchor` is given, the new tile's site
    /// facing the anchor and the anchor's site in that direction both close.
    ///
    /// Fails without changing anything if the tile is already on the layout,
    /// if the anchor is missing on a non-empty layout or present on an empty
    /// one, or if the anchor site is unknown or closed.
    pub fn place_tile(
        &mut self,
        tile: Tile,
        anchor: Option<(PlacedId, Direction)>,
        position: Point,
    ) -> Result<PlacedId, RulesError> {
        if self.keys.contains_key(&tile.key()) {
            return Err(RulesError::AlreadyPlaced(tile.key()));
        }
        match anchor {
            None if !self.is_empty() => return Err(RulesError::MissingAnchor),
            None => {}
            Some(_) if self.is_empty() => return Err(RulesError::UnexpectedAnchor),
            Some((id, direction)) => {
                let placed = self.get(id).ok_or(RulesError::UnknownPlacedTile(id))?;
                if placed.site(direction).is_none() {
                    return Err(RulesError::SiteClosed { anchor: id, direction });
                }
            }
        }

        self.highlighted = None;

        let id = PlacedId(self.placed.len() as u16);
        let rect = Rect::at(position, tile.size());
        let mut sites = open_sites(id, &tile, rect);

        if let Some((anchor_id, direction)) = anchor {
            sites.retain(|s| s.direction != direction.opposite());
            self.placed[anchor_id.index()].close(direction);
        }

        for placed in &mut self.placed {
            placed.sites.retain(|s| !s.rect.intersects(&rect));
        }
        sites.retain(|s| !self.placed.iter().any(|p| s.rect.intersects(&p.rect)));

        debug!(
            tile = %tile,
            id = id.0,
            x = position.x,
            y = position.y,
            open = sites.len(),
            "placed tile"
        );

        self.keys.insert(tile.key(), id);
        self.placed.push(PlacedTile { id, tile, rect, sites });
        Ok(id)
    }

    /// Highlight an open site for an interactive player.
    pub fn select_site(&mut self, anchor: PlacedId, direction: Direction) -> Result<(), RulesError> {
        if self.get(anchor).is_none() {
            return Err(RulesError::UnknownPlacedTile(anchor));
        }
        if self.site(anchor, direction).is_none() {
            return Err(RulesError::SiteClosed { anchor, direction });
        }
        self.highlighted = Some((anchor, direction));
        Ok(())
    }

    /// The highlighted site, if it is still open.
    #[must_use]
    pub fn selected_site(&self) -> Option<&PlacementSite> {
        self.highlighted
            .and_then(|(anchor, direction)| self.site(anchor, direction))
    }

    /// Drop any highlighted site.
    pub fn clear_selection(&mut self) {
        self.highlighted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::CELL;

    fn opened(tile: Tile) -> (Layout, PlacedId) {
        let mut layout = Layout::new();
        let id = layout.place_tile(tile, None, Point::ORIGIN).unwrap();
        (layout, id)
    }

    #[test]
    fn test_opening_tile() {
        let (layout, id) = opened(Tile::new(2, 4));

        assert_eq!(layout.len(), 1);
        assert_eq!(id, PlacedId(0));
        let placed = layout.get(id).unwrap();
        assert_eq!(placed.rect, Rect::new(0, 0, 2 * CELL, CELL));
        assert_eq!(placed.sites().len(), 2);
        assert_eq!(layout.find(TileKey::new(4, 2)), Some(id));
    }

    #[test]
    fn test_unanchored_placement_needs_empty_layout() {
        let (mut layout, _) = opened(Tile::new(2, 4));
        let err = layout.place_tile(Tile::new(1, 1), None, Point::new(500, 500));
        assert_eq!(err, Err(RulesError::MissingAnchor));
        assert_eq!(layout.len(), 1);
    }

    #[test]
    fn test_anchored_placement_closes_both_sides() {
        let (mut layout, first) = opened(Tile::new(2, 4));
        let second = layout
            .place_tile(Tile::new(4, 6), Some((first, Direction::Right)), Point::new(100, 0))
            .unwrap();

        assert!(layout.site(first, Direction::Right).is_none());
        assert!(layout.site(first, Direction::Left).is_some());
        assert!(layout.site(second, Direction::Left).is_none());
        assert!(layout.site(second, Direction::Right).is_some());
        assert_eq!(layout.open_sites().count(), 2);
    }

    #[test]
    fn test_closed_or_unknown_anchor_is_refused() {
        let (mut layout, first) = opened(Tile::new(2, 4));
        layout
            .place_tile(Tile::new(4, 6), Some((first, Direction::Right)), Point::new(100, 0))
            .unwrap();

        let closed = layout.place_tile(Tile::new(4, 5), Some((first, Direction::Right)), Point::new(100, 0));
        assert_eq!(
            closed,
            Err(RulesError::SiteClosed { anchor: first, direction: Direction::Right })
        );

        let unknown = layout.place_tile(Tile::new(4, 5), Some((PlacedId(9), Direction::Right)), Point::ORIGIN);
        assert_eq!(unknown, Err(RulesError::UnknownPlacedTile(PlacedId(9))));

        let top = layout.place_tile(Tile::new(2, 5), Some((first, Direction::Top)), Point::ORIGIN);
        assert!(matches!(top, Err(RulesError::SiteClosed { .. })));
    }

    #[test]
    fn test_opening_tile_takes_no_anchor() {
        let mut layout = Layout::new();
        let err = layout.place_tile(Tile::new(2, 4), Some((PlacedId(0), Direction::Right)), Point::ORIGIN);
        assert_eq!(err, Err(RulesError::UnexpectedAnchor));
        assert!(layout.is_empty());
    }

    #[test]
    fn test_same_tile_cannot_be_placed_twice() {
        let (mut layout, first) = opened(Tile::new(2, 4));
        let again = layout.place_tile(Tile::new(4, 2), Some((first, Direction::Right)), Point::new(100, 0));
        assert_eq!(again, Err(RulesError::AlreadyPlaced(TileKey::new(2, 4))));
    }

    #[test]
    fn test_covered_sites_are_pruned() {
        let (mut layout, first) = opened(Tile::new(2, 4));
        let second = layout
            .place_tile(Tile::new(4, 6), Some((first, Direction::Right)), Point::new(100, 0))
            .unwrap();

        // Placement is unchecked, so lay the third tile across the first
        // tile's left cell.
        let third = layout
            .place_tile(Tile::new(6, 1), Some((second, Direction::Right)), Point::new(-50, 0))
            .unwrap();

        assert!(layout.site(first, Direction::Left).is_none());
        assert!(layout.get(third).unwrap().sites().is_empty());
        for site in layout.open_sites() {
            for placed in layout.tiles() {
                assert!(!site.rect.intersects(&placed.rect));
            }
        }
    }

    #[test]
    fn test_selection_lifecycle() {
        let (mut layout, first) = opened(Tile::new(2, 4));
        assert!(layout.selected_site().is_none());

        layout.select_site(first, Direction::Left).unwrap();
        assert_eq!(layout.selected_site().map(|s| s.direction), Some(Direction::Left));

        assert!(layout.select_site(first, Direction::Top).is_err());
        assert_eq!(layout.selected_site().map(|s| s.direction), Some(Direction::Left));

        layout.clear_selection();
        assert!(layout.selected_site().is_none());
    }

    #[test]
    fn test_placement_clears_highlight() {
        let (mut layout, first) = opened(Tile::new(2, 4));
        layout.select_site(first, Direction::Right).unwrap();
        layout
            .place_tile(Tile::new(4, 6), Some((first, Direction::Right)), Point::new(100, 0))
            .unwrap();
        assert!(layout.selected_site().is_none());
    }

    #[test]
    fn test_site_at_hit_testing() {
        let (layout, first) = opened(Tile::new(2, 4));
        let hit = layout.site_at(Point::new(110, 10)).unwrap();
        assert_eq!((hit.anchor, hit.direction), (first, Direction::Right));
        assert!(layout.site_at(Point::new(10, 10)).is_none());
    }
}
