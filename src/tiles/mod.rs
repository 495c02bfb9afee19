//! Tiles and the geometry they are laid out in.
//!
//! ## Key Types
//!
//! - `Tile`: Two pip values plus the orientation the tile lies in
//! - `TileKey`: Rotation-independent identity of a tile
//! - `Rect`, `Point`, `Size`: Integer layout geometry
//! - `Direction`: Which way an extension leaves its anchor tile
//! - `Footprint`: Validated placement area tagged with its direction

pub mod geometry;
pub mod tile;

pub use geometry::{Direction, Footprint, Orientation, Point, Rect, Size, CELL, HALF_CELL};
pub use tile::{Pips, Tile, TileKey, MAX_PIPS};
