//! Rules configuration.
//!
//! The stacking caps are fixed by the game's rules and live here as
//! constants. Grid size and the per-round piece allowance are configured
//! through `RulesConfig`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Maximum number of pieces in one stack.
pub const STACK_CAPACITY: usize = 3;

/// Maximum number of unplaced pieces that can be placed in one action.
pub const MAX_PLACE_COUNT: u8 = 3;

/// Rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Side length of the square board.
    pub grid_dimension: usize,

    /// Unplaced pieces each player starts a round with.
    pub pieces_per_round: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            grid_dimension: 4,
            pieces_per_round: 5,
        }
    }
}

impl RulesConfig {
    /// Supported player counts per game.
    pub const PLAYER_RANGE: std::ops::RangeInclusive<usize> = 2..=4;

    /// Configuration for a game with `player_count` players.
    ///
    /// ```
    /// use stacking_rules::core::RulesConfig;
    ///
    /// let config = RulesConfig::for_player_count(4).unwrap();
    /// assert_eq!(config.grid_dimension, 4);
    /// assert!(RulesConfig::for_player_count(5).is_err());
    /// ```
    pub fn for_player_count(player_count: usize) -> Result<Self, ConfigError> {
        if !Self::PLAYER_RANGE.contains(&player_count) {
            return Err(ConfigError::PlayerCount(player_count));
        }
        Ok(Self::default())
    }

    /// Set the grid dimension.
    #[must_use]
    pub fn with_grid_dimension(mut self, dimension: usize) -> Self {
        self.grid_dimension = dimension;
        self
    }

    /// Set the per-round piece allowance.
    #[must_use]
    pub fn with_pieces_per_round(mut self, pieces: u8) -> Self {
        self.pieces_per_round = pieces;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_dimension == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.pieces_per_round == 0 {
            return Err(ConfigError::NoPieces);
        }
        Ok(())
    }
}
