//! # domino-rules
//!
//! Rules engine for block dominoes played on a free-form layout.
//!
//! ## Design Principles
//!
//! 1. **Geometry Decides Legality**: Every placed tile has a rectangle on an
//!    integer plane. A move is legal when the ends match and the tile's
//!    footprint clears every placed tile but the one it attaches to.
//!
//! 2. **Outcomes Are Values**: A refused move is a `MoveRejection`, "no move"
//!    is `None`, and a caller asking for something impossible gets a
//!    `RulesError`. Nothing panics on a rules outcome.
//!
//! 3. **Deterministic**: The search tries candidates in a fixed order and the
//!    deal comes from a seeded RNG, so a seed reproduces a whole automated game.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration
//! - `tiles`: Tiles, rotation, geometry
//! - `layout`: Placed tiles, open sites, placement validation
//! - `zones`: Hands and the draw pile
//! - `rules`: Turns, move search, end-of-game evaluation
//! - `games`: The game driver tying it together

pub mod core;
pub mod error;
pub mod games;
pub mod layout;
pub mod rules;
pub mod tiles;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameRng, PlayerId, PlayerKind, PlayerMap};

pub use crate::error::RulesError;

pub use crate::tiles::{Direction, Footprint, Orientation, Point, Rect, Tile, TileKey};

pub use crate::layout::{Layout, MoveRejection, PlacedId, PlacedTile, PlacementSite};

pub use crate::zones::{DrawPile, Hand};

pub use crate::rules::{evaluate_end, find_possible_turn, EndReason, GameResult, Outcome, Turn};

pub use crate::games::{DominoGame, DominoGameBuilder, StepOutcome};
