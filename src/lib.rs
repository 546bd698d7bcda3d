//! # stacking-rules
//!
//! Client-side rules core for a four-player stacking three-in-a-row game.
//!
//! Players take turns on a square board. On a turn a player either places
//! 1-3 of their unplaced pieces together on one cell, or moves one of their
//! top pieces to an adjacent cell. Stacks hold at most three pieces and only
//! the top piece can move.
//!
//! ## What this crate does
//!
//! Given a snapshot of the board and the acting player, it:
//! - computes the cells the player may click next (`rules`)
//! - turns a sequence of clicks into a committed `Intent` (`selection`)
//!
//! Turn order, win detection and round rotation belong to the authoritative
//! side. This crate only consumes its snapshots and produces intents.
//!
//! ## Modules
//!
//! - `core`: colors, coordinates, boards, players, intents, snapshots, config
//! - `rules`: legal action engine
//! - `selection`: selection state machine, highlights, session
//! - `error`: snapshot and configuration errors

pub mod core;
pub mod rules;
pub mod selection;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Board, Color, Coord, CoordinateSet, GamePhase, GameSnapshot, Intent, Player, PlayerId,
    RulesConfig, Stack, MAX_PLACE_COUNT, STACK_CAPACITY,
};

pub use crate::rules::legal_targets;

pub use crate::selection::{
    Click, Highlight, IntentSink, Selection, SelectionMachine, Session, Transition, TurnContext,
};

pub use crate::error::{ConfigError, SnapshotError};
