//! Square grid of cells with wall flags.

use crate::{CellCoord, Result, TopologyError};

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub coord: CellCoord,
    pub wall: bool,
}

/// A `size × size` matrix of cells, stored row-major.
///
/// Every constructor, deserialization included, guarantees exactly
/// `size * size` cells with `cells[i].coord == CellCoord::from_index(i, size)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr")
)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    size: usize,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = TopologyError;

    fn try_from(repr: GridRepr) -> Result<Self> {
        Grid::from_cells(repr.size, repr.cells)
    }
}

impl Grid {
    /// Create a grid with no walls.
    pub fn open(size: usize) -> Result<Self> {
        Self::from_fn(size, |_| false)
    }

    /// Create a grid, asking `is_wall` about each cell in row-major order.
    ///
    /// The callback is invoked exactly `size * size` times, top row first.
    pub fn from_fn(size: usize, mut is_wall: impl FnMut(CellCoord) -> bool) -> Result<Self> {
        if size == 0 {
            return Err(TopologyError::InvalidSize(size));
        }
        let cells = (0..size * size)
            .map(|i| {
                let coord = CellCoord::from_index(i, size);
                Cell {
                    coord,
                    wall: is_wall(coord),
                }
            })
            .collect();
        Ok(Self { size, cells })
    }

    /// Build a grid from row-major cells, checking their count and
    /// coordinates.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self> {
        if size == 0 {
            return Err(TopologyError::InvalidSize(size));
        }
        if cells.len() != size * size {
            return Err(TopologyError::CellCount {
                size,
                cells: cells.len(),
            });
        }
        if let Some((index, cell)) = cells
            .iter()
            .enumerate()
            .find(|(i, cell)| cell.coord != CellCoord::from_index(*i, size))
        {
            return Err(TopologyError::MisplacedCell {
                index,
                coord: cell.coord,
            });
        }
        Ok(Self { size, cells })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Top-left corner.
    pub fn top_left(&self) -> CellCoord {
        CellCoord::ORIGIN
    }

    /// Bottom-right corner.
    pub fn bottom_right(&self) -> CellCoord {
        CellCoord::new(self.size - 1, self.size - 1)
    }

    /// Whether the coordinate is on the grid.
    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.within(self.size)
    }

    /// Look up a cell.
    pub fn cell(&self, coord: CellCoord) -> Option<&Cell> {
        if self.contains(coord) {
            self.cells.get(coord.index(self.size))
        } else {
            None
        }
    }

    /// Whether the cell is a wall. Off-grid coordinates are not walls.
    pub fn is_wall(&self, coord: CellCoord) -> bool {
        self.cell(coord).is_some_and(|c| c.wall)
    }

    /// Whether the cell is on the grid and not a wall.
    pub fn is_open(&self, coord: CellCoord) -> bool {
        self.cell(coord).is_some_and(|c| !c.wall)
    }

    /// Set the wall flag of a cell.
    pub fn set_wall(&mut self, coord: CellCoord, wall: bool) -> Result<()> {
        let size = self.size;
        if !self.contains(coord) {
            return Err(TopologyError::OutOfBounds { coord, size });
        }
        match self.cells.get_mut(coord.index(size)) {
            Some(cell) => {
                cell.wall = wall;
                Ok(())
            }
            None => Err(TopologyError::OutOfBounds { coord, size }),
        }
    }

    /// Flip the wall flag of a cell, returning the new value.
    pub fn toggle_wall(&mut self, coord: CellCoord) -> Result<bool> {
        let wall = !self.is_wall(coord);
        self.set_wall(coord, wall)?;
        Ok(wall)
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.wall).count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
