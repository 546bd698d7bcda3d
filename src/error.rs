//! Errors raised where untrusted data enters the crate.
//!
//! The rules themselves are total. Only snapshot and configuration
//! validation can fail.

use crate::core::{Color, Coord, PlayerId};

/// Errors found while validating a board or game snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("board row {row} has {len} cells, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },

    #[error("board is {actual}x{actual}, expected {expected}x{expected}")]
    Dimension { actual: usize, expected: usize },

    #[error("coordinate {coord} is off a {dimension}x{dimension} board")]
    OutOfBounds { coord: Coord, dimension: usize },

    #[error("stack at {coord} has height {height}, maximum is {max}")]
    StackOverflow { coord: Coord, height: usize, max: usize },

    #[error("player {0} is in the turn order but has no record")]
    UnknownPlayer(PlayerId),

    #[error("current turn {turn} is out of range for {players} players")]
    TurnOutOfRange { turn: usize, players: usize },

    #[error("player {player} has {pieces} unplaced pieces, maximum is {max}")]
    TooManyPieces { player: PlayerId, pieces: u8, max: u8 },

    #[error("color {0} is assigned to more than one player")]
    DuplicateColor(Color),
}

/// Errors that can occur when building a rules configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid dimension must be at least 1")]
    EmptyGrid,

    #[error("pieces per round must be at least 1")]
    NoPieces,

    #[error("unsupported player count {0}, expected 2 to 4")]
    PlayerCount(usize),
}
