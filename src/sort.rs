//! Heap sort, with and without a materialized [`Heap`].

use crate::sift;
use crate::Heap;

/// Sorts a copy of `data` ascending by building a [`Heap`] and draining it.
pub fn heap_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    let mut heap = Heap::build_max_heap(data.to_vec());
    let mut out = Vec::with_capacity(heap.len());
    while let Ok(v) = heap.pop() {
        out.push(v);
    }
    // pop yields descending order
    out.reverse();
    out
}

/// Sorts `data` ascending in place with O(1) extra space.
pub fn heap_sort_in_place<T: Ord>(data: &mut [T]) {
    sift::heapify(data);
    sort_heap(data);
}

/// Extraction phase of the in-place sort. `data` must already be a max-heap.
///
/// After each step `data[i..]` holds the largest elements in order and
/// `data[..i]` is a heap of size `i`.
pub(crate) fn sort_heap<T: Ord>(data: &mut [T]) {
    for i in (1..data.len()).rev() {
        data.swap(0, i);
        sift::sift_down(data, 0, i);
    }
}
