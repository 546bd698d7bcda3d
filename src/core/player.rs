//! Player identity and the per-round player record.
//!
//! Identities are opaque strings issued by the lobby. Everything else the
//! rules need about a player is their color for the current round and how
//! many unplaced pieces they still hold.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Opaque player identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new player ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A player as seen by the rules for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    /// Color assigned for the current round.
    pub color: Color,

    /// Unplaced pieces remaining.
    pub num_pieces: u8,
}

impl Player {
    /// Create a new player record.
    pub fn new(id: impl Into<PlayerId>, color: Color, num_pieces: u8) -> Self {
        Self {
            id: id.into(),
            color,
            num_pieces,
        }
    }

    /// Check if the player still holds unplaced pieces.
    #[must_use]
    pub fn has_unplaced(&self) -> bool {
        self.num_pieces > 0
    }
}
