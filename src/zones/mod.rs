//! Where tiles live before they reach the layout.
//!
//! ## Key Types
//!
//! - `Hand`: One player's tiles, packed into rows, with an optional selection
//! - `DrawPile`: The shuffled tiles nobody holds yet

pub mod hand;
pub mod pile;

pub use hand::{Hand, DEFAULT_HAND_WIDTH};
pub use pile::DrawPile;
