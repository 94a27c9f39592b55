//! Three ways to select the `k` smallest elements of a slice.
//!
//! | strategy               | time         | extra space |
//! |------------------------|--------------|-------------|
//! | [`k_smallest_scan`]    | O(n·k)       | O(n)        |
//! | [`k_smallest_sorted`]  | O(n log n)   | O(n)        |
//! | [`k_smallest_bounded`] | O(n log k)   | O(k)        |
//!
//! All of them return the same multiset for the same input; only the order of
//! the result differs. `k` larger than the input is clamped.

use crate::sort::heap_sort_in_place;
use crate::Heap;
use log::trace;
use std::cmp::Reverse;

/// Naive baseline: extract the current minimum from a working copy `k` times.
pub fn k_smallest_scan<T: Ord + Clone>(data: &[T], k: usize) -> Vec<T> {
    trace!("k_smallest_scan n={} k={}", data.len(), k);
    let mut rest = data.to_vec();
    let mut out = Vec::with_capacity(k.min(data.len()));
    for _ in 0..k {
        let min = rest
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.cmp(b.1))
            .map(|(i, _)| i);
        match min {
            Some(i) => out.push(rest.swap_remove(i)),
            None => break,
        }
    }
    out
}

/// Sorts a copy and keeps the first `k`. Result is ascending.
pub fn k_smallest_sorted<T: Ord + Clone>(data: &[T], k: usize) -> Vec<T> {
    trace!("k_smallest_sorted n={} k={}", data.len(), k);
    let mut sorted = data.to_vec();
    heap_sort_in_place(&mut sorted);
    sorted.truncate(k);
    sorted
}

/// Keeps a max-heap of the best `k` candidates seen so far. Its root is the
/// largest of them, i.e. the first one to evict when something smaller shows
/// up.
pub fn k_smallest_bounded<T: Ord + Clone>(data: &[T], k: usize) -> Vec<T> {
    trace!("k_smallest_bounded n={} k={}", data.len(), k);
    if k == 0 {
        return Vec::new();
    }
    let k = k.min(data.len());
    let mut window = Heap::build_max_heap(data[..k].to_vec());
    for x in &data[k..] {
        let evict = matches!(window.peek(), Ok(top) if x < top);
        if evict {
            window.pop().ok();
            window.push(x.clone());
        }
    }
    window.into_vec()
}

/// Mirror of [`k_smallest_bounded`] using a min-heap window built from
/// [`Reverse`].
pub fn k_largest_bounded<T: Ord + Clone>(data: &[T], k: usize) -> Vec<T> {
    trace!("k_largest_bounded n={} k={}", data.len(), k);
    if k == 0 {
        return Vec::new();
    }
    let k = k.min(data.len());
    let mut window: Heap<Reverse<T>> = data[..k].iter().cloned().map(Reverse).collect();
    for x in &data[k..] {
        let evict = matches!(window.peek(), Ok(Reverse(low)) if x > low);
        if evict {
            window.pop().ok();
            window.push(Reverse(x.clone()));
        }
    }
    window.into_vec().into_iter().map(|Reverse(v)| v).collect()
}
