//! Introsort-style quicksort: Lomuto partition with a last-element pivot,
//! insertion-sort cutoff for small windows, heapsort fallback once the
//! recursion-depth budget is spent.

use super::insertion_sort;
use crate::error::{BenchError, BenchResult};

/// Windows at or below this length go straight to insertion sort.
const INSERTION_CUTOFF: usize = 16;

/// The standard introsort depth budget, `2 * floor(log2(n))`.
pub fn depth_limit_for(n: usize) -> usize {
    if n <= 1 { 0 } else { 2 * n.ilog2() as usize }
}

/// Introsort entry point; derives the depth budget from the input length.
pub fn intro_sort<T: Ord + Copy>(data: &mut [T]) -> BenchResult<()> {
    quick_sort(data, depth_limit_for(data.len()))
}

/// Depth-limited quicksort.
///
/// The pivot is always the window's last element, so a fixed adversarial
/// input can drive quadratic partitioning; `depth_limit` exists precisely to
/// neutralize that by handing the window to [`heap_sort`] once exhausted,
/// which bounds the whole sort at O(n log n).
pub fn quick_sort<T: Ord + Copy>(data: &mut [T], depth_limit: usize) -> BenchResult<()> {
    if data.len() <= 1 {
        return Ok(());
    }
    if data.len() <= INSERTION_CUTOFF {
        insertion_sort(data);
        return Ok(());
    }
    if depth_limit == 0 {
        return heap_sort(data);
    }

    let pivot = partition(data);
    quick_sort(&mut data[..pivot], depth_limit - 1)?;
    quick_sort(&mut data[pivot + 1..], depth_limit - 1)
}

/// Lomuto partition around the last element; returns the pivot's final index.
fn partition<T: Ord + Copy>(data: &mut [T]) -> usize {
    let last = data.len() - 1;
    let pivot = data[last];
    let mut i = 0;
    for j in 0..last {
        if data[j] < pivot {
            data.swap(i, j);
            i += 1;
        }
    }
    data.swap(i, last);
    i
}

/// Heapsort over a private copy of the window.
///
/// Builds a max-heap via sift-down, repeatedly swaps the root behind the
/// shrinking heap, then writes the sorted copy back into `data`.
pub fn heap_sort<T: Ord + Copy>(data: &mut [T]) -> BenchResult<()> {
    let n = data.len();
    if n <= 1 {
        return Ok(());
    }

    let mut heap: Vec<T> = Vec::new();
    heap.try_reserve_exact(n)
        .map_err(|_| BenchError::allocation_failure("heapsort working copy", n))?;
    heap.extend_from_slice(data);

    for i in (0..n / 2).rev() {
        heapify(&mut heap, n, i);
    }
    for i in (1..n).rev() {
        heap.swap(0, i);
        heapify(&mut heap, i, 0);
    }

    data.copy_from_slice(&heap);
    Ok(())
}

/// Sift the element at `i` down through the max-heap occupying `heap[..n]`.
fn heapify<T: Ord + Copy>(heap: &mut [T], n: usize, mut i: usize) {
    loop {
        let left = 2 * i + 1;
        let right = 2 * i + 2;
        let mut largest = i;

        if left < n && heap[left] > heap[largest] {
            largest = left;
        }
        if right < n && heap[right] > heap[largest] {
            largest = right;
        }
        if largest == i {
            break;
        }
        heap.swap(i, largest);
        i = largest;
    }
}
