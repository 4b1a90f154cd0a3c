//! Step types and the step log.
//!
//! A step log is the total order of semantic events one generator run
//! produced. It is built once, fully materialized, and then only read.

use std::collections::HashSet;
use std::ops::Index;

use algoviz_topology::CellCoord;
use serde::{Deserialize, Serialize};

/// One primitive operation of a comparison sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SortStep<T> {
    /// Positions `i` and `j` are being examined.
    Compare { i: usize, j: usize },
    /// Values at `i` and `j` were exchanged.
    Swap { i: usize, j: usize },
    /// Position `index` now holds `value`.
    Overwrite { index: usize, value: T },
    /// Position `index` holds its final value.
    MarkSorted { index: usize },
}

impl<T> SortStep<T> {
    /// Every position this step touches.
    pub fn indices(&self) -> Vec<usize> {
        match self {
            SortStep::Compare { i, j } | SortStep::Swap { i, j } => vec![*i, *j],
            SortStep::Overwrite { index, .. } | SortStep::MarkSorted { index } => vec![*index],
        }
    }
}

/// One event of a grid breadth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GridStep {
    /// Cell newly enqueued.
    Frontier(CellCoord),
    /// Cell dequeued and expanded.
    Visit(CellCoord),
    /// Cell on the reconstructed path, destination first.
    Path(CellCoord),
}

impl GridStep {
    /// The cell this step refers to.
    pub fn coord(&self) -> CellCoord {
        match self {
            GridStep::Frontier(c) | GridStep::Visit(c) | GridStep::Path(c) => *c,
        }
    }
}

/// Ordered, immutable sequence of steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepLog<S> {
    steps: Vec<S>,
}

impl<S> StepLog<S> {
    pub(crate) fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn push(&mut self, step: S) {
        self.steps.push(step);
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the log has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at a position.
    pub fn get(&self, index: usize) -> Option<&S> {
        self.steps.get(index)
    }

    /// Iterate steps in log order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.steps.iter()
    }

    /// Borrow as a slice.
    pub fn as_slice(&self) -> &[S] {
        &self.steps
    }

    /// Take ownership of the steps.
    pub fn into_vec(self) -> Vec<S> {
        self.steps
    }
}

impl<S> From<Vec<S>> for StepLog<S> {
    fn from(steps: Vec<S>) -> Self {
        Self { steps }
    }
}

impl<S> From<StepLog<S>> for Vec<S> {
    fn from(log: StepLog<S>) -> Self {
        log.steps
    }
}

impl<S> Index<usize> for StepLog<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.steps[index]
    }
}

impl<S> IntoIterator for StepLog<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a StepLog<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl<T: Clone> StepLog<SortStep<T>> {
    /// Apply every swap and overwrite to a copy of `initial`.
    ///
    /// Compare and mark-sorted steps do not change values. Out-of-range
    /// indices are ignored.
    pub fn replay(&self, initial: &[T]) -> Vec<T> {
        let mut values = initial.to_vec();
        for step in &self.steps {
            apply_sort_step(&mut values, step);
        }
        values
    }

    /// Indices in the order they were marked sorted.
    pub fn sorted_order(&self) -> Vec<usize> {
        self.steps
            .iter()
            .filter_map(|s| match s {
                SortStep::MarkSorted { index } => Some(*index),
                _ => None,
            })
            .collect()
    }

    /// Number of compare steps.
    pub fn comparisons(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, SortStep::Compare { .. }))
            .count()
    }

    /// Number of swap and overwrite steps.
    pub fn writes(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, SortStep::Swap { .. } | SortStep::Overwrite { .. }))
            .count()
    }
}

/// Apply one sort step to `values` in place.
pub fn apply_sort_step<T: Clone>(values: &mut [T], step: &SortStep<T>) {
    match step {
        SortStep::Swap { i, j } if *i < values.len() && *j < values.len() => values.swap(*i, *j),
        SortStep::Overwrite { index, value } => {
            if let Some(slot) = values.get_mut(*index) {
                *slot = value.clone();
            }
        }
        _ => {}
    }
}

impl StepLog<GridStep> {
    /// Path cells in log order (destination to source). Empty when unreachable.
    pub fn path(&self) -> Vec<CellCoord> {
        self.steps
            .iter()
            .filter_map(|s| match s {
                GridStep::Path(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    /// Whether the search reached its destination.
    pub fn found_path(&self) -> bool {
        self.steps.iter().any(|s| matches!(s, GridStep::Path(_)))
    }

    /// Distinct cells that were discovered.
    pub fn discovered(&self) -> HashSet<CellCoord> {
        self.steps
            .iter()
            .filter_map(|s| match s {
                GridStep::Frontier(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    /// Number of visit steps.
    pub fn visits(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, GridStep::Visit(_)))
            .count()
    }
}
