//! The shared layout of placed tiles.
//!
//! ## Key Types
//!
//! - `Layout`: Placed tiles in placement order, with their open sites
//! - `PlacedTile`: One tile on the layout and the sites it still owns
//! - `PlacementSite`: A one-cell slot where another tile may attach
//! - `MoveRejection`: Why [`Layout::is_valid_move`] refused a candidate

pub mod board;
pub mod site;
pub mod validate;

pub use board::{Layout, PlacedId, PlacedTile};
pub use site::{PlacementSite, Sites};
pub use validate::MoveRejection;
