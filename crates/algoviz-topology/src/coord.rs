//! Row/column coordinates on a square grid.
//!
//! Rows grow downward and columns grow to the right, so `(0, 0)` is the
//! top-left corner. Coordinates are unsigned; stepping off the grid's top or
//! left edge is expressed as `None` rather than a negative index.

use std::fmt;

/// A cell position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCoord {
    /// Row index (0 = top)
    #[cfg_attr(feature = "serde", serde(rename = "r"))]
    pub row: usize,
    /// Column index (0 = left)
    #[cfg_attr(feature = "serde", serde(rename = "c"))]
    pub col: usize,
}

impl CellCoord {
    /// Top-left corner.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by a signed row/column delta.
    ///
    /// Returns `None` when the result would have a negative component.
    /// Upper bounds are not checked here; that depends on the grid size.
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Manhattan distance: |dr| + |dc|.
    pub fn manhattan(&self, other: &Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True when the two cells share an edge.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.manhattan(other) == 1
    }

    /// True when the coordinate lies inside a `size × size` grid.
    pub const fn within(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Row-major index into a `size × size` grid.
    pub const fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Inverse of [`CellCoord::index`].
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }
}

impl From<(usize, usize)> for CellCoord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
