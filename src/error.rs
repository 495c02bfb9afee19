//! Errors for caller contract violations and exhausted resources.
//!
//! Rule outcomes that are part of normal play have their own types: a rejected
//! placement is a [`MoveRejection`](crate::layout::MoveRejection) and "no legal
//! move" is `None` from the search. `RulesError` is what comes back when a
//! caller asks for something the current state cannot do. The state is never
//! modified when one of these is returned.

use thiserror::Error;

use crate::core::PlayerId;
use crate::layout::{MoveRejection, PlacedId};
use crate::tiles::{Direction, TileKey};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("draw pile is empty")]
    EmptyDrawPile,
    #[error("tile {0} is not in the hand")]
    TileNotInHand(TileKey),
    #[error("tile {0} is already on the layout")]
    AlreadyPlaced(TileKey),
    #[error("layout is not empty; placement needs an anchor")]
    MissingAnchor,
    #[error("the opening tile cannot have an anchor")]
    UnexpectedAnchor,
    #[error("no placed tile with id {0:?}")]
    UnknownPlacedTile(PlacedId),
    #[error("placed tile {anchor:?} has no open site to the {direction:?}")]
    SiteClosed { anchor: PlacedId, direction: Direction },
    #[error("it is {expected}'s turn, not {actual}'s")]
    NotPlayersTurn { expected: PlayerId, actual: PlayerId },
    #[error("{0} has no seat at this table")]
    UnknownPlayer(PlayerId),
    #[error("{0} is not an interactive seat")]
    NotInteractive(PlayerId),
    #[error("a legal move is available; drawing is not allowed")]
    MoveAvailable,
    #[error("the opening tile has already been placed")]
    AlreadyOpened,
    #[error("the opening tile has not been placed yet")]
    NotOpened,
    #[error("the game is over")]
    GameOver,
    #[error("move rejected: {0}")]
    Rejected(#[from] MoveRejection),
}
