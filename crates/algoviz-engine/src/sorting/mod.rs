//! Comparison sort step generators.

mod bubble;
mod insertion;

pub use bubble::bubble_steps;
pub use insertion::insertion_steps;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::step::{SortStep, StepLog};

/// The supported sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
}

impl SortAlgorithm {
    /// All variants.
    pub const ALL: [SortAlgorithm; 2] = [SortAlgorithm::Bubble, SortAlgorithm::Insertion];

    /// Run this algorithm's generator.
    pub fn generate_steps<T: PartialOrd + Clone>(&self, values: &[T]) -> StepLog<SortStep<T>> {
        match self {
            SortAlgorithm::Bubble => bubble_steps(values),
            SortAlgorithm::Insertion => insertion_steps(values),
        }
    }

    /// Lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Insertion => "insertion",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bubble" => Ok(SortAlgorithm::Bubble),
            "insertion" => Ok(SortAlgorithm::Insertion),
            other => Err(format!("unknown sorting algorithm: {other}")),
        }
    }
}
