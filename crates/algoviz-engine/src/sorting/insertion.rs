//! Insertion sort step generation.

use crate::step::{SortStep, StepLog};

/// Record every operation insertion sort performs on a copy of `values`.
///
/// Shifts are single-slot overwrites, not swaps. For each key, every
/// successful comparison against a strictly greater left neighbor is logged
/// as a compare followed by the overwrite that shifts that neighbor right.
/// The comparison that stops the shift is not logged. One last overwrite
/// drops the key into its slot. All indices are marked sorted at the end,
/// in ascending order.
pub fn insertion_steps<T: PartialOrd + Clone>(values: &[T]) -> StepLog<SortStep<T>> {
    let mut a = values.to_vec();
    let mut steps = StepLog::new();
    let n = a.len();

    for i in 1..n {
        let key = a[i].clone();
        // Slot the key will land in.
        let mut hole = i;
        while hole > 0 && a[hole - 1] > key {
            let j = hole - 1;
            steps.push(SortStep::Compare { i: j, j: hole });
            a[hole] = a[j].clone();
            steps.push(SortStep::Overwrite {
                index: hole,
                value: a[j].clone(),
            });
            hole = j;
        }
        a[hole] = key.clone();
        steps.push(SortStep::Overwrite {
            index: hole,
            value: key,
        });
    }

    for index in 0..n {
        steps.push(SortStep::MarkSorted { index });
    }

    tracing::debug!(len = n, steps = steps.len(), "insertion sort steps generated");
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    use SortStep::*;

    #[test]
    fn three_two_one() {
        let log = insertion_steps(&[3, 2, 1]);
        assert_eq!(
            log.as_slice(),
            &[
                // i = 1, key = 2
                Compare { i: 0, j: 1 },
                Overwrite { index: 1, value: 3 },
                Overwrite { index: 0, value: 2 },
                // i = 2, key = 1
                Compare { i: 1, j: 2 },
                Overwrite { index: 2, value: 3 },
                Compare { i: 0, j: 1 },
                Overwrite { index: 1, value: 2 },
                Overwrite { index: 0, value: 1 },
                MarkSorted { index: 0 },
                MarkSorted { index: 1 },
                MarkSorted { index: 2 },
            ]
        );
        assert_eq!(log.replay(&[3, 2, 1]), vec![1, 2, 3]);
    }

    #[test]
    fn sorted_input_only_places_keys() {
        let log = insertion_steps(&[1, 2, 3]);
        assert_eq!(
            log.as_slice(),
            &[
                Overwrite { index: 1, value: 2 },
                Overwrite { index: 2, value: 3 },
                MarkSorted { index: 0 },
                MarkSorted { index: 1 },
                MarkSorted { index: 2 },
            ]
        );
    }

    #[test]
    fn never_swaps() {
        let log = insertion_steps(&[4, 3, 2, 1, 0]);
        assert!(!log.iter().any(|s| matches!(s, Swap { .. })));
    }

    #[test]
    fn equal_keys_stay_put() {
        let log = insertion_steps(&[2, 2, 1]);
        assert_eq!(log.replay(&[2, 2, 1]), vec![1, 2, 2]);
        // Second 2 does not shift past the first.
        assert_eq!(log[0], Overwrite { index: 1, value: 2 });
    }

    #[test]
    fn empty_and_single() {
        assert!(insertion_steps::<u32>(&[]).is_empty());
        assert_eq!(insertion_steps(&[7]).as_slice(), &[MarkSorted { index: 0 }]);
    }

    #[test]
    fn input_untouched() {
        let input = vec![5, 3, 4];
        let _ = insertion_steps(&input);
        assert_eq!(input, vec![5, 3, 4]);
    }
}
