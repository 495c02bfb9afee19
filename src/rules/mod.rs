//! Domino rules: finding moves, describing them, and deciding the end.
//!
//! Placement legality itself lives on [`Layout`](crate::layout::Layout); this
//! module builds on it.
//!
//! ## Key Types
//!
//! - `Turn`: A decided placement, ready to apply
//! - `GameResult`, `Outcome`: How a finished game came out

pub mod engine;
pub mod finder;
pub mod turn;

pub use engine::{evaluate_end, EndReason, GameResult, Outcome};
pub use finder::{find_possible_turn, has_legal_move};
pub use turn::{selected_turn, Turn};
