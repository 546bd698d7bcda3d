//! Game snapshot as broadcast by the authoritative side.
//!
//! A snapshot is read-only input. The rules core never advances turns or
//! rounds; it only asks a snapshot whose turn it is and what a player holds.
//! Fields the core does not interpret (`current_round`, `winners`) are
//! carried through so a snapshot can be re-encoded unchanged.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::config::RulesConfig;
use super::player::{Player, PlayerId};
use crate::error::SnapshotError;

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    #[default]
    InProgress,
    GameOver,
}

/// Full game state as received from the authority.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    #[serde(default)]
    pub game_state: GamePhase,

    pub board: Board,

    /// Turn order for the current round.
    pub player_ids: Vec<PlayerId>,

    pub players: FxHashMap<PlayerId, Player>,

    /// Index into `player_ids` of the player to act.
    pub current_turn: usize,

    #[serde(default)]
    pub current_round: u32,

    /// Winners of each finished round.
    #[serde(default)]
    pub winners: Vec<Vec<PlayerId>>,
}

impl GameSnapshot {
    /// Create an in-progress snapshot. Turn order follows `players`, and the
    /// first player is to act.
    pub fn new(board: Board, players: impl IntoIterator<Item = Player>) -> Self {
        let players: Vec<Player> = players.into_iter().collect();
        Self {
            game_state: GamePhase::InProgress,
            board,
            player_ids: players.iter().map(|p| p.id.clone()).collect(),
            players: players.into_iter().map(|p| (p.id.clone(), p)).collect(),
            current_turn: 0,
            current_round: 1,
            winners: Vec::new(),
        }
    }

    /// Set whose turn it is.
    #[must_use]
    pub fn with_current_turn(mut self, turn: usize) -> Self {
        self.current_turn = turn;
        self
    }

    /// Check that the snapshot is consistent with `config`.
    pub fn validate(&self, config: &RulesConfig) -> Result<(), SnapshotError> {
        if self.board.dimension() != config.grid_dimension {
            return Err(SnapshotError::Dimension {
                actual: self.board.dimension(),
                expected: config.grid_dimension,
            });
        }

        if self.current_turn >= self.player_ids.len() {
            return Err(SnapshotError::TurnOutOfRange {
                turn: self.current_turn,
                players: self.player_ids.len(),
            });
        }

        let mut colors = FxHashSet::default();
        for id in &self.player_ids {
            let player = self
                .players
                .get(id)
                .ok_or_else(|| SnapshotError::UnknownPlayer(id.clone()))?;

            if player.num_pieces > config.pieces_per_round {
                return Err(SnapshotError::TooManyPieces {
                    player: id.clone(),
                    pieces: player.num_pieces,
                    max: config.pieces_per_round,
                });
            }
            if !colors.insert(player.color) {
                return Err(SnapshotError::DuplicateColor(player.color));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_state == GamePhase::GameOver
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player_id(&self) -> Option<&PlayerId> {
        self.player_ids.get(self.current_turn)
    }

    /// Check if `id` may act now. Always false once the game is over.
    #[must_use]
    pub fn is_players_turn(&self, id: &PlayerId) -> bool {
        !self.is_over() && self.current_player_id() == Some(id)
    }

    /// Look up a player record.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.get(id)
    }
}
