//! Exhaustive search for a legal move.

use tracing::trace;

use super::turn::Turn;
use crate::layout::Layout;
use crate::zones::Hand;

/// First legal placement for any tile in `hand`, or `None`.
///
/// Candidates are tried in a fixed order: hand order; for each tile its four
/// quarter turns starting flat; then every open site in layout order. The
/// first one [`Layout::is_valid_move`] accepts wins, so the result is
/// deterministic for a given hand and layout.
#[must_use]
pub fn find_possible_turn(hand: &Hand, layout: &Layout) -> Option<Turn> {
    for source in hand.iter() {
        let mut candidate = source.reset();
        for _ in 0..4 {
            for site in layout.open_sites() {
                match layout.is_valid_move(&candidate, site) {
                    Ok(footprint) => {
                        trace!(tile = %candidate, anchor = %site.anchor, direction = ?site.direction, "found move");
                        return Some(Turn::anchored(candidate, *site, footprint, *source));
                    }
                    Err(reason) => {
                        trace!(tile = %candidate, anchor = %site.anchor, direction = ?site.direction, %reason, "rejected");
                    }
                }
            }
            candidate.rotate();
        }
    }
    None
}

/// Whether any tile in `hand` can be played.
#[must_use]
pub fn has_legal_move(hand: &Hand, layout: &Layout) -> bool {
    find_possible_turn(hand, layout).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{Direction, Orientation, Point, Rect, Tile};
    use crate::zones::DEFAULT_HAND_WIDTH;

    fn hand(tiles: &[(u8, u8)]) -> Hand {
        Hand::with_tiles(DEFAULT_HAND_WIDTH, tiles.iter().map(|&(a, b)| Tile::new(a, b)))
    }

    fn opened(tile: Tile) -> Layout {
        let mut layout = Layout::new();
        layout.place_tile(tile, None, Point::ORIGIN).unwrap();
        layout
    }

    #[test]
    fn test_empty_hand_has_no_move() {
        let layout = opened(Tile::new(2, 4));
        assert!(find_possible_turn(&Hand::default(), &layout).is_none());
    }

    #[test]
    fn test_empty_layout_has_no_move() {
        assert!(find_possible_turn(&hand(&[(1, 2)]), &Layout::new()).is_none());
    }

    #[test]
    fn test_no_matching_ends() {
        let layout = opened(Tile::new(2, 4));
        assert!(!has_legal_move(&hand(&[(0, 1), (5, 6), (3, 3)]), &layout));
    }

    #[test]
    fn test_first_hand_tile_wins() {
        let layout = opened(Tile::new(2, 4));
        let turn = find_possible_turn(&hand(&[(0, 1), (4, 5), (2, 6)]), &layout).unwrap();
        assert_eq!(turn.source(), &Tile::new(4, 5));
        assert_eq!(turn.anchor().map(|s| s.direction), Some(Direction::Right));
        assert_eq!(turn.rect(), Rect::new(100, 0, 100, 50));
    }

    #[test]
    fn test_rotation_needed_for_left_end() {
        let layout = opened(Tile::new(2, 4));
        let turn = find_possible_turn(&hand(&[(2, 5)]), &layout).unwrap();
        // Flat (2,5) fits nowhere; upright it is not a double; flat again
        // after two quarter turns it reads (5,2) and goes on the left.
        assert_eq!((turn.tile().first(), turn.tile().second()), (5, 2));
        assert_eq!(turn.tile().orientation(), Orientation::Horizontal);
        assert_eq!(turn.anchor().map(|s| s.direction), Some(Direction::Left));
        assert_eq!(turn.rect(), Rect::new(-100, 0, 100, 50));
        assert_eq!(turn.source(), &Tile::new(2, 5));
    }

    #[test]
    fn test_double_found_crosswise() {
        let layout = opened(Tile::new(2, 4));
        let turn = find_possible_turn(&hand(&[(4, 4)]), &layout).unwrap();
        assert_eq!(turn.tile().orientation(), Orientation::Vertical);
        assert_eq!(turn.rect(), Rect::new(100, -25, 50, 100));
    }
}
