//! Block dominoes with a draw pile.
//!
//! - Each player is dealt a hand from a shuffled double-six set
//! - The lowest tile held opens the layout
//! - On your turn: place a matching tile, or draw while the pile lasts, or pass
//! - Empty your hand to win; if nobody can move, the lowest hand wins
//!
//! Supports 2-4 players, any mix of interactive and automated seats.

mod game;

pub use game::{DominoGame, DominoGameBuilder, StepOutcome};
