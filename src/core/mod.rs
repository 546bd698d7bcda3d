//! Core types: colors, coordinates, boards, players, intents, snapshots,
//! configuration.
//!
//! Everything here is plain data. The rules that interpret it live in
//! `rules` and `selection`.

pub mod color;
pub mod coord;
pub mod board;
pub mod player;
pub mod action;
pub mod snapshot;
pub mod config;

pub use color::Color;
pub use coord::{Coord, CoordinateSet};
pub use board::{Board, Stack};
pub use player::{Player, PlayerId};
pub use action::Intent;
pub use snapshot::{GamePhase, GameSnapshot};
pub use config::{RulesConfig, MAX_PLACE_COUNT, STACK_CAPACITY};
