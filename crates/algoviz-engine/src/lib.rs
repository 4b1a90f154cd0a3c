//! algoviz step-generation engine
//!
//! Runs classic algorithms to completion and records every primitive
//! operation as a replayable step. A renderer walks the resulting log to
//! animate the algorithm; the engine itself never draws anything.
//!
//! # Generators
//!
//! - **Sorting**: [`bubble_steps`] and [`insertion_steps`] record compares,
//!   swaps, overwrites and mark-sorted events over a private copy of the
//!   input.
//! - **Grid search**: [`bfs_steps`] records frontier discoveries, visits and
//!   the reconstructed shortest path on a walled [`Grid`].
//!
//! # Reproducibility
//!
//! Inputs come from [`generate_array`] and [`generate_grid`], both driven by
//! a caller-owned [`UnitSource`]. Pass a [`Mulberry32`] to get the same input,
//! and therefore the same log, on every run.
//!
//! ```
//! use algoviz_engine::{bubble_steps, generate_array, Mulberry32, SortStep};
//!
//! let values = generate_array(16, &mut Mulberry32::new(42)).unwrap();
//! let log = bubble_steps(&values);
//!
//! let mut expected = values.clone();
//! expected.sort();
//! assert_eq!(log.replay(&values), expected);
//! assert!(matches!(log.as_slice().last(), Some(SortStep::MarkSorted { index: 0 })));
//! ```

mod bfs;
mod error;
mod input;
mod rng;
mod sorting;
mod step;

pub use algoviz_topology::{Cell, CellCoord, Grid};
pub use bfs::bfs_steps;
pub use error::{Endpoint, Error, Result};
pub use input::{generate_array, generate_grid, MAX_ARRAY_VALUE, MIN_ARRAY_VALUE};
pub use rng::{create_seeded_rng, seed_from_str, Mulberry32, UnitSource};
pub use sorting::{bubble_steps, insertion_steps, SortAlgorithm};
pub use step::{apply_sort_step, GridStep, SortStep, StepLog};

/// Log of a sorting run.
pub type SortLog<T> = StepLog<SortStep<T>>;

/// Log of a grid search.
pub type GridLog = StepLog<GridStep>;
