//! Wall-clock measurement of one sort over a private copy of its input.

use std::time::Instant;

use crate::error::BenchResult;
use crate::sorts::SortAlgorithm;

/// Run `algorithm` over a private copy of `input` and return the elapsed
/// wall-clock time in microseconds.
///
/// The copy is made before the clock starts, so only the sort itself is
/// measured; the caller's `input` is never mutated, which keeps one
/// algorithm's in-place work from contaminating the next measurement.
pub fn time_sort<T, S>(algorithm: &S, input: &[T]) -> BenchResult<u128>
where
    T: Copy,
    S: SortAlgorithm<T> + ?Sized,
{
    let mut scratch = input.to_vec();
    let start = Instant::now();
    algorithm.sort(&mut scratch)?;
    Ok(start.elapsed().as_micros())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::{MergeSort, QuickSort};

    #[test]
    fn test_input_is_left_untouched() {
        let input = vec![3, 1, 2];
        let _ = time_sort(&MergeSort, &input).unwrap();
        assert_eq!(input, vec![3, 1, 2]);
    }

    #[test]
    fn test_measures_every_algorithm_shape() {
        let input: Vec<i32> = (0..500).rev().collect();
        assert!(time_sort(&MergeSort, &input).is_ok());
        assert!(time_sort(&QuickSort, &input).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let input: Vec<i32> = Vec::new();
        assert!(time_sort(&QuickSort, &input).is_ok());
    }
}
