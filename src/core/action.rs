//! Commit intents: what a finished selection asks the authority to do.
//!
//! There are exactly two:
//! - `Place`: put `count` new pieces of the player's color on one cell
//! - `Move`: relocate the top piece of one cell to an adjacent cell
//!
//! Intents serialize as the authority's action records, tagged by `type`.

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// An action intent sent to the authoritative side.
///
/// ```
/// use stacking_rules::core::{Coord, Intent};
///
/// let place = Intent::place(Coord::new(2, 2), 1);
/// assert_eq!(place, Intent::Place { row: 2, col: 2, count: 1 });
/// assert_eq!(place.target(), Coord::new(2, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Intent {
    /// Place `count` (1-3) unplaced pieces on `(row, col)`.
    Place {
        row: usize,
        col: usize,
        #[serde(rename = "num_pieces")]
        count: u8,
    },

    /// Move the top piece at the source onto the destination.
    Move {
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    },
}

impl Intent {
    #[must_use]
    pub fn place(at: Coord, count: u8) -> Self {
        Intent::Place {
            row: at.row,
            col: at.col,
            count,
        }
    }

    #[must_use]
    pub fn movement(from: Coord, to: Coord) -> Self {
        Intent::Move {
            from_row: from.row,
            from_col: from.col,
            to_row: to.row,
            to_col: to.col,
        }
    }

    /// The cell that receives pieces.
    #[must_use]
    pub fn target(&self) -> Coord {
        match *self {
            Intent::Place { row, col, .. } => Coord::new(row, col),
            Intent::Move { to_row, to_col, .. } => Coord::new(to_row, to_col),
        }
    }
}
