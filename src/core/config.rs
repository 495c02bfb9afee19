//! Game configuration.
//!
//! `GameConfig` fixes the set size, the deal, the seats and the RNG seed
//! before a game starts. It serializes with serde so a table setup can be
//! saved and replayed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::PlayerKind;
use crate::tiles::{Pips, TileKey, MAX_PIPS};
use crate::zones::DEFAULT_HAND_WIDTH;

/// Fewest seats a game can have.
pub const MIN_PLAYERS: usize = 2;

/// Most seats a game can have.
pub const MAX_PLAYERS: usize = 4;

/// Why a configuration cannot start a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_pip must be at most 6, got {0}")]
    MaxPipTooHigh(Pips),
    #[error("need 2 to 4 players, got {0}")]
    PlayerCount(usize),
    #[error("tiles_per_hand must be at least 1")]
    EmptyDeal,
    #[error("dealing {needed} tiles needs a bigger set than {available}")]
    NotEnoughTiles { needed: usize, available: usize },
    #[error("hand_width must be positive, got {0}")]
    HandWidth(i32),
    #[error("dealt {hands} hands for {players} players")]
    DealMismatch { hands: usize, players: usize },
    #[error("tile {0} is dealt more than once")]
    DuplicateTile(TileKey),
    #[error("tile {tile} is outside a set with max_pip {max_pip}")]
    TileOutOfRange { tile: TileKey, max_pip: Pips },
}

/// Table setup for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Highest pip value in the set (6 = double-six, 28 tiles).
    pub max_pip: Pips,

    /// Tiles dealt to each player.
    pub tiles_per_hand: usize,

    /// Seed for the draw pile shuffle.
    /// Same seed, same deal.
    pub seed: u64,

    /// One entry per seat, in turn order.
    pub players: Vec<PlayerKind>,

    /// Row width of every hand, in layout units.
    pub hand_width: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_pip: MAX_PIPS,
            tiles_per_hand: 7,
            seed: 42,
            players: vec![PlayerKind::Interactive, PlayerKind::Automated],
            hand_width: DEFAULT_HAND_WIDTH,
        }
    }
}

impl GameConfig {
    pub fn with_max_pip(mut self, max_pip: Pips) -> Self {
        self.max_pip = max_pip;
        self
    }

    pub fn with_tiles_per_hand(mut self, count: usize) -> Self {
        self.tiles_per_hand = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_players(mut self, players: Vec<PlayerKind>) -> Self {
        self.players = players;
        self
    }

    pub fn with_hand_width(mut self, width: i32) -> Self {
        self.hand_width = width;
        self
    }

    /// Number of tiles in the configured set.
    #[must_use]
    pub fn set_size(&self) -> usize {
        let n = usize::from(self.max_pip) + 1;
        n * (n + 1) / 2
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check the setup can deal and play a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_pip > MAX_PIPS {
            return Err(ConfigError::MaxPipTooHigh(self.max_pip));
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players.len()) {
            return Err(ConfigError::PlayerCount(self.players.len()));
        }
        if self.tiles_per_hand == 0 {
            return Err(ConfigError::EmptyDeal);
        }
        let needed = self.tiles_per_hand * self.players.len();
        if needed > self.set_size() {
            return Err(ConfigError::NotEnoughTiles {
                needed,
                available: self.set_size(),
            });
        }
        if self.hand_width <= 0 {
            return Err(ConfigError::HandWidth(self.hand_width));
        }
        Ok(())
    }
}
