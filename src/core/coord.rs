//! Grid coordinates and the coordinate set.
//!
//! ## Coord
//!
//! A `(row, col)` cell address. Rows and columns are 0-based.
//!
//! ## CoordinateSet
//!
//! Unordered set of cells, used for the legal target set. Backed by an
//! `FxHashSet` since keys are tiny and hashed once per lookup.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A board cell address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset this coordinate by `(d_row, d_col)`.
    ///
    /// Returns `None` if the result would be negative or `>= dimension`
    /// on either axis.
    ///
    /// ```
    /// use stacking_rules::core::Coord;
    ///
    /// let c = Coord::new(0, 3);
    /// assert_eq!(c.offset(1, -1, 4), Some(Coord::new(1, 2)));
    /// assert_eq!(c.offset(-1, 0, 4), None);
    /// assert_eq!(c.offset(0, 1, 4), None);
    /// ```
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize, dimension: usize) -> Option<Coord> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < dimension && col < dimension).then_some(Coord { row, col })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A set of board coordinates.
///
/// ```
/// use stacking_rules::core::CoordinateSet;
///
/// let mut set = CoordinateSet::new();
/// assert!(!set.has(1, 1));
///
/// set.add(1, 1);
/// assert!(set.has(1, 1));
///
/// set.remove(1, 1);
/// set.remove(1, 1); // absent: no-op
/// assert!(!set.has(1, 1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoordinateSet {
    cells: FxHashSet<Coord>,
}

impl CoordinateSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a coordinate present. Idempotent.
    pub fn add(&mut self, row: usize, col: usize) {
        self.cells.insert(Coord::new(row, col));
    }

    /// Mark a coordinate absent. No-op if it is not present.
    pub fn remove(&mut self, row: usize, col: usize) {
        self.cells.remove(&Coord::new(row, col));
    }

    /// Check membership.
    #[must_use]
    pub fn has(&self, row: usize, col: usize) -> bool {
        self.contains(Coord::new(row, col))
    }

    /// Check membership by `Coord`.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Insert by `Coord`.
    pub fn insert(&mut self, coord: Coord) {
        self.cells.insert(coord);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Members in row-major order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Coord> {
        let mut coords: Vec<_> = self.iter().collect();
        coords.sort_unstable();
        coords
    }
}

impl FromIterator<Coord> for CoordinateSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Coord> for CoordinateSet {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_coordinate() {
        let mut set = CoordinateSet::new();
        assert!(!set.has(1, 1));
        set.add(1, 1);
        assert!(set.has(1, 1));
        assert!(!set.has(1, 2));
    }

    #[test]
    fn test_remove_coordinate() {
        let mut set = CoordinateSet::new();
        set.add(1, 1);
        set.remove(1, 1);
        assert!(!set.has(1, 1));
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut set = CoordinateSet::new();
        set.add(0, 2);
        let before = set.clone();

        set.remove(2, 0);
        set.remove(3, 3);
        assert_eq!(set, before);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut set = CoordinateSet::new();
        set.add(2, 3);
        set.add(2, 3);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_keeps_row_siblings() {
        let mut set = CoordinateSet::new();
        set.add(1, 0);
        set.add(1, 2);
        set.remove(1, 0);

        assert!(!set.has(1, 0));
        assert!(set.has(1, 2));
    }

    #[test]
    fn test_sorted_is_row_major() {
        let set: CoordinateSet = [Coord::new(2, 0), Coord::new(0, 3), Coord::new(0, 1)]
            .into_iter()
            .collect();
        assert_eq!(
            set.sorted(),
            vec![Coord::new(0, 1), Coord::new(0, 3), Coord::new(2, 0)]
        );
    }

    #[test]
    fn test_offset_bounds() {
        let corner = Coord::new(0, 0);
        assert_eq!(corner.offset(-1, -1, 4), None);
        assert_eq!(corner.offset(1, 1, 4), Some(Coord::new(1, 1)));

        let far = Coord::new(3, 3);
        assert_eq!(far.offset(1, 0, 4), None);
        assert_eq!(far.offset(0, -1, 4), Some(Coord::new(3, 2)));
    }
}
