//! Core types shared by every part of the engine: players, RNG, configuration.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{ConfigError, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use player::{PlayerId, PlayerKind, PlayerMap};
pub use rng::GameRng;
