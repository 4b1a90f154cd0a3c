//! Bubble sort step generation.

use crate::step::{SortStep, StepLog};

/// Record every operation bubble sort performs on a copy of `values`.
///
/// Each pass compares adjacent pairs across the unsorted prefix and swaps on
/// strict `>`, so equal values keep their order. The last slot of the pass is
/// then marked sorted. A pass without swaps ends the sort early; whatever is
/// still unmarked is marked from the highest index down, so the log always
/// closes with `MarkSorted { index: 0 }`.
pub fn bubble_steps<T: PartialOrd + Clone>(values: &[T]) -> StepLog<SortStep<T>> {
    let mut a = values.to_vec();
    let mut steps = StepLog::new();
    let n = a.len();
    if n == 0 {
        return steps;
    }

    // Lowest index already marked; everything at or above is final.
    let mut unmarked = n;
    let mut swapped = true;
    let mut pass = 0;
    while pass + 1 < n && swapped {
        swapped = false;
        for i in 0..n - 1 - pass {
            let j = i + 1;
            steps.push(SortStep::Compare { i, j });
            if a[i] > a[j] {
                a.swap(i, j);
                steps.push(SortStep::Swap { i, j });
                swapped = true;
            }
        }
        unmarked = n - 1 - pass;
        steps.push(SortStep::MarkSorted { index: unmarked });
        pass += 1;
    }

    for index in (0..unmarked).rev() {
        steps.push(SortStep::MarkSorted { index });
    }

    tracing::debug!(
        len = n,
        passes = pass,
        steps = steps.len(),
        "bubble sort steps generated"
    );
    steps
}
