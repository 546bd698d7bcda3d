//! Legal action engine.
//!
//! Pure functions from a board snapshot, a player and a selection to the
//! set of cells the player may click next. Nothing here holds state;
//! callers recompute on every snapshot or selection change.

pub mod engine;

pub use engine::{
    legal_targets, move_targets, movable_pieces, place_targets, staging_limit, NEIGHBOR_OFFSETS,
};
