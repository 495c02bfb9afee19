//! Integer geometry for the layout: points, rectangles, directions.
//!
//! Units are abstract. A tile is two cells long and one cell wide, and a cell
//! is `CELL` units on a side. Crosswise doubles sit half a cell off the line
//! they extend, so `CELL` stays even.

use serde::{Deserialize, Serialize};

/// Side of one square cell (half a tile).
pub const CELL: i32 = 50;

/// Half a cell, the offset of a crosswise double.
pub const HALF_CELL: i32 = CELL / 2;

/// A position on the layout plane. `y` grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width and height of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// A rectangle of `size` with its top-left corner at `origin`.
    #[must_use]
    pub const fn at(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub const fn left(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    #[must_use]
    pub const fn top(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Grow by `by` units on every side.
    #[must_use]
    pub const fn inflate(&self, by: i32) -> Self {
        Self::new(self.x - by, self.y - by, self.width + 2 * by, self.height + 2 * by)
    }

    /// Strict overlap: rectangles that only share an edge do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Half-open containment, used for hit testing.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.left() <= point.x
            && point.x < self.right()
            && self.top() <= point.y
            && point.y < self.bottom()
    }
}

/// Line a tile or an extension lies along. A tile's long side follows its orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Direction of extension away from an anchor tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Top,
    Bottom,
}

impl Direction {
    /// All directions, in site creation order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Top,
        Direction::Bottom,
    ];

    /// The direction pointing back the way this one came.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
        }
    }

    #[must_use]
    pub const fn axis(self) -> Orientation {
        match self {
            Direction::Right | Direction::Left => Orientation::Horizontal,
            Direction::Top | Direction::Bottom => Orientation::Vertical,
        }
    }
}

/// Area a validated tile will occupy, tagged with the direction it extends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    pub rect: Rect,
    pub direction: Direction,
}

impl Footprint {
    /// Where the placed tile's top-left corner goes.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.rect.origin()
    }
}
