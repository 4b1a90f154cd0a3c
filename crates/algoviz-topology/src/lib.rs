//! algoviz grid topology
//!
//! Square grids of cells with wall flags, addressed by row/column.
//!
//! # Connectivity
//!
//! Cells are 4-connected: each cell shares an edge with at most four
//! neighbors (down, up, right, left). Diagonals are never neighbors.
//!
//! # Layout
//!
//! A grid of side `N` stores `N * N` cells row-major. The top-left cell is
//! `(0, 0)` and the bottom-right is `(N-1, N-1)`.

mod coord;
mod grid;
mod neighbors;

pub use coord::CellCoord;
pub use grid::{Cell, Grid};
pub use neighbors::{are_neighbors, Direction, Neighbors};

use thiserror::Error;

/// Number of neighbors of an interior cell.
pub const MAX_NEIGHBORS: usize = 4;

/// Result type for topology operations.
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Errors that can occur building or editing a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// Grid side length must be at least 1.
    #[error("invalid grid size: {0}")]
    InvalidSize(usize),

    /// A coordinate lies outside the grid.
    #[error("coordinate {coord} is outside a {size}x{size} grid")]
    OutOfBounds { coord: CellCoord, size: usize },

    /// Cell list does not fill the grid.
    #[error("expected {} cells for a {size}x{size} grid, got {cells}", .size * .size)]
    CellCount { size: usize, cells: usize },

    /// A cell's coordinate does not match its row-major position.
    #[error("cell {index} carries coordinate {coord}")]
    MisplacedCell { index: usize, coord: CellCoord },
}
