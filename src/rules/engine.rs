//! End-of-game evaluation.
//!
//! A game ends in one of two ways:
//! - **Domino**: a player has emptied their hand and wins outright
//! - **Blocked**: the draw pile is empty and no player can place a tile; the
//!   lowest hand value wins, and a shared minimum is a draw between exactly
//!   the players holding it

use serde::{Deserialize, Serialize};

use super::finder::has_legal_move;
use crate::core::{PlayerId, PlayerMap};
use crate::layout::Layout;
use crate::zones::Hand;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Blocked game with several players sharing the lowest hand value.
    Draw(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won outright.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Players who did not lose: the winner, or everyone in the draw.
    #[must_use]
    pub fn players(&self) -> &[PlayerId] {
        match self {
            GameResult::Winner(p) => std::slice::from_ref(p),
            GameResult::Draw(ps) => ps,
        }
    }
}

/// How the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    Domino,
    Blocked,
}

/// Final standing of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub result: GameResult,
    pub reason: EndReason,
    /// Pip total left in each hand when the game ended.
    pub hand_values: PlayerMap<u32>,
}

/// Decide whether the game is over.
///
/// An empty hand is checked first, in seat order. A blocked game can only be
/// declared once the layout has its opening tile.
#[must_use]
pub fn evaluate_end(hands: &PlayerMap<Hand>, pile_empty: bool, layout: &Layout) -> Option<Outcome> {
    let hand_values = hands.map(|_, hand| hand.value());

    if let Some((player, _)) = hands.iter().find(|(_, hand)| hand.is_empty()) {
        return Some(Outcome {
            result: GameResult::Winner(player),
            reason: EndReason::Domino,
            hand_values,
        });
    }

    if !pile_empty || layout.is_empty() {
        return None;
    }
    if hands.iter().any(|(_, hand)| has_legal_move(hand, layout)) {
        return None;
    }

    let lowest = hand_values.iter().map(|(_, v)| *v).min()?;
    let mut holders: Vec<PlayerId> = hand_values
        .iter()
        .filter(|(_, v)| **v == lowest)
        .map(|(p, _)| p)
        .collect();
    let result = if holders.len() == 1 {
        GameResult::Winner(holders.remove(0))
    } else {
        GameResult::Draw(holders)
    };

    Some(Outcome {
        result,
        reason: EndReason::Blocked,
        hand_values,
    })
}
