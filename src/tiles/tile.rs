//! Domino tiles.
//!
//! A `Tile` carries two pip values and the orientation it currently lies in.
//! Rotation is a physical quarter turn: the orientation flips every step and
//! the printed ends trade places on the first and third step away from the
//! orientation the tile started in.
//!
//! `TileKey` is the rotation-independent identity of a tile, the unordered pair
//! of its ends. A standard set never contains two tiles with the same key, so
//! hands and the layout use it to recognise a tile whatever way up it is.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::geometry::{Orientation, Size, CELL};

/// Pip count on one end of a tile.
pub type Pips = u8;

/// Highest pip value in a double-six set.
pub const MAX_PIPS: Pips = 6;

/// Rotation-independent identity of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileKey {
    pub low: Pips,
    pub high: Pips,
}

impl TileKey {
    #[must_use]
    pub fn new(a: Pips, b: Pips) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }
}

impl std::fmt::Display for TileKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.low, self.high)
    }
}

/// A domino with its current orientation.
///
/// `first` is the left end when horizontal and the top end when vertical;
/// `second` is the right or bottom end.
///
/// Equality covers the rotation phase as well as the faces: the phase decides
/// whether the next quarter turn swaps the ends, so two tiles showing the same
/// faces in the same orientation can still turn differently. Compare
/// [`key`](Self::key) for identity, or the faces and orientation for what is
/// shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    first: Pips,
    second: Pips,
    orientation: Orientation,
    quarter_turns: u8,
}

impl Tile {
    /// Create a horizontal tile.
    ///
    /// Panics if either end exceeds [`MAX_PIPS`].
    #[must_use]
    pub fn new(first: Pips, second: Pips) -> Self {
        assert!(
            first <= MAX_PIPS && second <= MAX_PIPS,
            "Pip values must be in 0..={MAX_PIPS}, got ({first}, {second})"
        );
        Self {
            first,
            second,
            orientation: Orientation::Horizontal,
            quarter_turns: 0,
        }
    }

    /// The same ends laid in `orientation`, with no rotation history.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self.quarter_turns = 0;
        self
    }

    /// This tile laid flat again: horizontal, current ends kept, rotation forgotten.
    #[must_use]
    pub fn reset(&self) -> Self {
        Tile::new(self.first, self.second)
    }

    #[must_use]
    pub fn first(&self) -> Pips {
        self.first
    }

    #[must_use]
    pub fn second(&self) -> Pips {
        self.second
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn is_double(&self) -> bool {
        self.first == self.second
    }

    #[must_use]
    pub fn key(&self) -> TileKey {
        TileKey::new(self.first, self.second)
    }

    /// Sum of both ends, used for hand values.
    #[must_use]
    pub fn value(&self) -> u32 {
        u32::from(self.first) + u32::from(self.second)
    }

    /// Size of the tile as laid in its current orientation.
    #[must_use]
    pub fn size(&self) -> Size {
        match self.orientation {
            Orientation::Horizontal => Size::new(2 * CELL, CELL),
            Orientation::Vertical => Size::new(CELL, 2 * CELL),
        }
    }

    /// Quarter turn. Any sites computed for the old orientation are stale.
    pub fn rotate(&mut self) {
        self.quarter_turns = (self.quarter_turns + 1) % 4;
        if self.quarter_turns % 2 == 1 {
            std::mem::swap(&mut self.first, &mut self.second);
        }
        self.orientation = match self.orientation {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        };
    }

    /// Copy of this tile after a quarter turn.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let mut tile = *self;
        tile.rotate();
        tile
    }

    /// Ordering used to find the opening tile of a game.
    ///
    /// Doubles come before every non-double, `0|0` first of all, and each
    /// group orders by pip total.
    // NOTE: doubles outranking low non-doubles matches the shipped game; the
    // rule is awaiting confirmation before anyone changes it.
    #[must_use]
    pub fn opening_cmp(&self, other: &Tile) -> Ordering {
        let rank = |t: &Tile| (!t.is_double(), t.value());
        rank(self).cmp(&rank(other))
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.orientation {
            Orientation::Horizontal => write!(f, "[{}|{}]", self.first, self.second),
            Orientation::Vertical => write!(f, "[{}/{}]", self.first, self.second),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_horizontal() {
        let tile = Tile::new(2, 5);
        assert_eq!(tile.first(), 2);
        assert_eq!(tile.second(), 5);
        assert_eq!(tile.orientation(), Orientation::Horizontal);
        assert_eq!(tile.size(), Size::new(2 * CELL, CELL));
        assert!(!tile.is_double());
    }

    #[test]
    fn test_equality_includes_rotation_phase() {
        let turned = Tile::new(5, 2).rotated().rotated();
        let fresh = Tile::new(2, 5);
        assert_eq!((turned.first(), turned.second()), (fresh.first(), fresh.second()));
        assert_eq!(turned.orientation(), fresh.orientation());
        assert_ne!(turned, fresh);
        assert_eq!(turned.key(), fresh.key());

        // Same faces upright, different next turn.
        let upright = Tile::new(2, 5).rotated();
        let laid_upright = Tile::new(5, 2).with_orientation(Orientation::Vertical);
        assert_eq!((upright.first(), upright.second()), (laid_upright.first(), laid_upright.second()));
        assert_ne!(upright.rotated().first(), laid_upright.rotated().first());
    }

    #[test]
    #[should_panic(expected = "Pip values must be in")]
    fn test_new_rejects_out_of_range() {
        let _ = Tile::new(7, 0);
    }

    #[test]
    fn test_rotation_sequence() {
        let mut tile = Tile::new(2, 5);

        tile.rotate();
        assert_eq!((tile.first(), tile.second()), (5, 2));
        assert_eq!(tile.orientation(), Orientation::Vertical);
        assert_eq!(tile.size(), Size::new(CELL, 2 * CELL));

        tile.rotate();
        assert_eq!((tile.first(), tile.second()), (5, 2));
        assert_eq!(tile.orientation(), Orientation::Horizontal);

        tile.rotate();
        assert_eq!((tile.first(), tile.second()), (2, 5));
        assert_eq!(tile.orientation(), Orientation::Vertical);

        tile.rotate();
        assert_eq!(tile, Tile::new(2, 5));
    }

    #[test]
    fn test_rotation_from_vertical_start() {
        let start = Tile::new(1, 4).with_orientation(Orientation::Vertical);
        let once = start.rotated();
        assert_eq!(once.orientation(), Orientation::Horizontal);
        assert_eq!((once.first(), once.second()), (4, 1));

        let back = once.rotated().rotated().rotated();
        assert_eq!(back, start);
    }

    #[test]
    fn test_key_ignores_rotation() {
        let tile = Tile::new(6, 3);
        assert_eq!(tile.key(), TileKey::new(3, 6));
        assert_eq!(tile.rotated().key(), tile.key());
        assert_eq!(format!("{}", tile.key()), "3|6");
    }

    #[test]
    fn test_reset_keeps_current_ends() {
        let tile = Tile::new(1, 2).rotated();
        let reset = tile.reset();
        assert_eq!(reset.orientation(), Orientation::Horizontal);
        assert_eq!((reset.first(), reset.second()), (2, 1));
    }

    #[test]
    fn test_opening_order() {
        let zero = Tile::new(0, 0);
        let double_six = Tile::new(6, 6);
        let low = Tile::new(0, 1);

        assert_eq!(zero.opening_cmp(&double_six), Ordering::Less);
        assert_eq!(double_six.opening_cmp(&low), Ordering::Less);
        assert_eq!(Tile::new(1, 2).opening_cmp(&Tile::new(0, 4)), Ordering::Less);
        assert_eq!(Tile::new(1, 3).opening_cmp(&Tile::new(3, 1)), Ordering::Equal);
        assert_eq!(Tile::new(2, 2).opening_cmp(&Tile::new(1, 1)), Ordering::Greater);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Tile::new(3, 5)), "[3|5]");
        assert_eq!(format!("{}", Tile::new(3, 5).rotated()), "[5/3]");
    }
}
