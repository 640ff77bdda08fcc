//! Stable merge sort and its insertion-cutoff hybrid.

use super::insertion_sort;
use crate::error::{BenchError, BenchResult};

/// Classic recursive merge sort.
///
/// Splits at the midpoint, recurses on both halves, then merges through an
/// auxiliary buffer of the window length. Equal elements are taken from the
/// left run first, so the sort is stable.
pub fn merge_sort<T: Ord + Copy>(data: &mut [T]) -> BenchResult<()> {
    if data.len() <= 1 {
        return Ok(());
    }
    let mid = data.len().div_ceil(2);
    let (left, right) = data.split_at_mut(mid);
    merge_sort(left)?;
    merge_sort(right)?;
    merge(data, mid)
}

/// Merge sort that hands any window of length `<= threshold` to insertion
/// sort instead of recursing further. Produces the same output as
/// [`merge_sort`] for every input; the cutoff changes performance only.
pub fn hybrid_merge_sort<T: Ord + Copy>(data: &mut [T], threshold: usize) -> BenchResult<()> {
    if data.len() <= 1 {
        return Ok(());
    }
    if data.len() <= threshold {
        insertion_sort(data);
        return Ok(());
    }
    let mid = data.len().div_ceil(2);
    let (left, right) = data.split_at_mut(mid);
    hybrid_merge_sort(left, threshold)?;
    hybrid_merge_sort(right, threshold)?;
    merge(data, mid)
}

/// Merge the sorted runs `data[..mid]` and `data[mid..]` back into `data`.
fn merge<T: Ord + Copy>(data: &mut [T], mid: usize) -> BenchResult<()> {
    let mut merged: Vec<T> = Vec::new();
    merged
        .try_reserve_exact(data.len())
        .map_err(|_| BenchError::allocation_failure("merge auxiliary buffer", data.len()))?;

    let (mut i, mut j) = (0, mid);
    while i < mid && j < data.len() {
        // <= keeps the left run's element first on ties (stability)
        if data[i] <= data[j] {
            merged.push(data[i]);
            i += 1;
        } else {
            merged.push(data[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&data[i..mid]);
    merged.extend_from_slice(&data[j..]);

    data.copy_from_slice(&merged);
    Ok(())
}
