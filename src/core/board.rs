//! Board snapshot: a square grid of stacks.
//!
//! ## Stack
//!
//! The pieces on one cell, bottom to top, at most `STACK_CAPACITY` high.
//! Only the top piece can be moved.
//!
//! ## Board
//!
//! Cells are held row-major in an `im::Vector` so a snapshot can be shared
//! between the session and a presentation layer and cloned in O(1).
//! On the wire a board is a nested array `[row][col] -> [color, ...]`.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use super::config::STACK_CAPACITY;
use super::coord::Coord;
use crate::error::SnapshotError;

/// The pieces occupying one cell, bottom to top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stack(SmallVec<[Color; STACK_CAPACITY]>);

impl Stack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack from colors listed bottom to top.
    #[must_use]
    pub fn from_colors(colors: &[Color]) -> Self {
        Self(SmallVec::from_slice(colors))
    }

    /// Number of pieces in the stack.
    #[must_use]
    pub fn height(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The movable piece, if any.
    #[must_use]
    pub fn top(&self) -> Option<Color> {
        self.0.last().copied()
    }

    /// How many more pieces fit before the stack is full.
    #[must_use]
    pub fn room(&self) -> usize {
        STACK_CAPACITY.saturating_sub(self.height())
    }

    /// Colors bottom to top.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }

    /// Initials bottom to top, e.g. `"RGR"`.
    #[must_use]
    pub fn label(&self) -> String {
        self.colors().map(Color::initial).collect()
    }
}

/// A square grid of stacks, indexed `[row][col]`.
///
/// ```
/// use stacking_rules::core::{Board, Color, Coord};
///
/// let board = Board::empty(4)
///     .with_stack(Coord::new(1, 1), &[Color::Red, Color::Blue])
///     .unwrap();
///
/// assert_eq!(board.stack(Coord::new(1, 1)).height(), 2);
/// assert_eq!(board.top(Coord::new(1, 1)), Some(Color::Blue));
/// assert!(board.stack(Coord::new(0, 0)).is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Stack>>", into = "Vec<Vec<Stack>>")]
pub struct Board {
    dimension: usize,
    cells: Vector<Stack>,
}

impl Board {
    /// Create a board of empty cells.
    #[must_use]
    pub fn empty(dimension: usize) -> Self {
        Self {
            dimension,
            cells: std::iter::repeat(Stack::new())
                .take(dimension * dimension)
                .collect(),
        }
    }

    /// Build a board from rows of stacks, checking it is square and that no
    /// stack is over capacity.
    pub fn from_rows(rows: Vec<Vec<Stack>>) -> Result<Self, SnapshotError> {
        let dimension = rows.len();
        let mut cells = Vector::new();

        for (row, stacks) in rows.into_iter().enumerate() {
            if stacks.len() != dimension {
                return Err(SnapshotError::RaggedRow {
                    row,
                    len: stacks.len(),
                    expected: dimension,
                });
            }
            for (col, stack) in stacks.into_iter().enumerate() {
                check_height(Coord::new(row, col), &stack)?;
                cells.push_back(stack);
            }
        }

        Ok(Self { dimension, cells })
    }

    /// Return a copy of this board with `coord` holding `colors`.
    pub fn with_stack(mut self, coord: Coord, colors: &[Color]) -> Result<Self, SnapshotError> {
        if !self.in_bounds(coord) {
            return Err(SnapshotError::OutOfBounds {
                coord,
                dimension: self.dimension,
            });
        }
        let stack = Stack::from_colors(colors);
        check_height(coord, &stack)?;
        let index = self.index(coord);
        self.cells[index] = stack;
        Ok(self)
    }

    /// Side length of the grid.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Check whether `coord` lies on the grid.
    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.dimension && coord.col < self.dimension
    }

    /// The stack at `coord`, or `None` off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Stack> {
        self.in_bounds(coord).then(|| &self.cells[self.index(coord)])
    }

    /// The stack at `coord`.
    ///
    /// # Panics
    ///
    /// If `coord` is off the board.
    #[must_use]
    pub fn stack(&self, coord: Coord) -> &Stack {
        assert!(self.in_bounds(coord), "coordinate {coord} is off the board");
        &self.cells[self.index(coord)]
    }

    /// Top color at `coord`, if the cell is on the board and occupied.
    #[must_use]
    pub fn top(&self, coord: Coord) -> Option<Color> {
        self.get(coord).and_then(Stack::top)
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let dimension = self.dimension;
        (0..dimension).flat_map(move |row| (0..dimension).map(move |col| Coord::new(row, col)))
    }

    /// All cells with their stacks, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Stack)> + '_ {
        self.coords().zip(self.cells.iter())
    }

    /// Rows of stacks, the wire shape.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Stack>> {
        let mut rows = vec![Vec::with_capacity(self.dimension); self.dimension];
        for (coord, stack) in self.cells() {
            rows[coord.row].push(stack.clone());
        }
        rows
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.dimension + coord.col
    }
}

fn check_height(coord: Coord, stack: &Stack) -> Result<(), SnapshotError> {
    if stack.height() > STACK_CAPACITY {
        return Err(SnapshotError::StackOverflow {
            coord,
            height: stack.height(),
            max: STACK_CAPACITY,
        });
    }
    Ok(())
}

impl TryFrom<Vec<Vec<Stack>>> for Board {
    type Error = SnapshotError;

    fn try_from(rows: Vec<Vec<Stack>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<Stack>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}
