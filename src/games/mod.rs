//! Playable games built on the rules.

pub mod dominoes;

pub use dominoes::{DominoGame, DominoGameBuilder, StepOutcome};
