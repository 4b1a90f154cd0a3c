//! Visual state rebuilt from a step log prefix.
//!
//! A renderer that seeks, steps backward or joins mid-run cannot rely on
//! having seen every step. These snapshots recompute the full picture from
//! the input and the first `up_to` steps.

use algoviz_engine::{apply_sort_step, GridStep, SortStep};
use algoviz_topology::{CellCoord, Grid};
use serde::{Deserialize, Serialize};

/// What the most recent sorting step did to its indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Highlight {
    Compare,
    Swap,
    Overwrite,
}

/// State of an array after a prefix of its sort log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArraySnapshot<T> {
    /// Number of steps applied
    pub step: usize,
    pub values: Vec<T>,
    pub sorted: Vec<bool>,
    /// Indices touched by the last applied step, with how
    pub highlight: Option<(Highlight, Vec<usize>)>,
}

impl<T: Clone> ArraySnapshot<T> {
    /// Rebuild array state from steps up to (but not including) `up_to`.
    pub fn from_steps(initial: &[T], steps: &[SortStep<T>], up_to: usize) -> Self {
        let mut values = initial.to_vec();
        let mut sorted = vec![false; initial.len()];
        let mut highlight = None;
        let applied = up_to.min(steps.len());

        for step in &steps[..applied] {
            apply_sort_step(&mut values, step);
            highlight = match step {
                SortStep::Compare { i, j } => Some((Highlight::Compare, vec![*i, *j])),
                SortStep::Swap { i, j } => Some((Highlight::Swap, vec![*i, *j])),
                SortStep::Overwrite { index, .. } => Some((Highlight::Overwrite, vec![*index])),
                SortStep::MarkSorted { index } => {
                    if let Some(flag) = sorted.get_mut(*index) {
                        *flag = true;
                    }
                    None
                }
            };
        }

        Self {
            step: applied,
            values,
            sorted,
            highlight,
        }
    }

    /// Number of positions marked sorted.
    pub fn sorted_count(&self) -> usize {
        self.sorted.iter().filter(|s| **s).count()
    }

    /// Whether every position has been marked sorted.
    pub fn is_complete(&self) -> bool {
        self.sorted.iter().all(|s| *s)
    }
}

/// Display state of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellState {
    Free,
    Wall,
    Frontier,
    Visited,
    Path,
}

/// State of a grid after a prefix of its search log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    /// Number of steps applied
    pub step: usize,
    pub size: usize,
    /// Row-major cell states
    pub cells: Vec<CellState>,
    pub source: CellCoord,
    pub destination: CellCoord,
}

impl GridSnapshot {
    /// Rebuild grid state from steps up to (but not including) `up_to`.
    ///
    /// Later steps overwrite earlier ones: a visited cell on the path shows
    /// as `Path`. Steps naming off-grid cells are skipped.
    pub fn from_steps(
        grid: &Grid,
        source: CellCoord,
        destination: CellCoord,
        steps: &[GridStep],
        up_to: usize,
    ) -> Self {
        let size = grid.size();
        let mut cells: Vec<CellState> = grid
            .cells()
            .iter()
            .map(|c| if c.wall { CellState::Wall } else { CellState::Free })
            .collect();
        let applied = up_to.min(steps.len());

        for step in &steps[..applied] {
            let coord = step.coord();
            if !grid.contains(coord) {
                continue;
            }
            cells[coord.index(size)] = match step {
                GridStep::Frontier(_) => CellState::Frontier,
                GridStep::Visit(_) => CellState::Visited,
                GridStep::Path(_) => CellState::Path,
            };
        }

        Self {
            step: applied,
            size,
            cells,
            source,
            destination,
        }
    }

    /// State of one cell.
    pub fn state(&self, coord: CellCoord) -> Option<CellState> {
        if coord.within(self.size) {
            self.cells.get(coord.index(self.size)).copied()
        } else {
            None
        }
    }

    /// Number of cells in a given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| **c == state).count()
    }
}
