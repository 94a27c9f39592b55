//! An array-backed max-heap and the algorithms built on it: heap sort
//! (allocating and in-place) and bounded top-K selection.
//!
//! Building with the `check-invariants` feature makes every mutating `Heap`
//! method assert the max-heap property before returning. The
//! `checked_invariants` test target only runs with that feature on:
//! `cargo test --features check-invariants`.
//!
//! ```
//! use heapcore::Heap;
//!
//! let mut heap = Heap::from(vec![3, 1, 4, 1, 5, 9, 2, 6]);
//! assert_eq!(heap.pop(), Ok(9));
//! assert_eq!(heap.peek(), Ok(&6));
//! ```

pub mod error;
pub mod heap;
pub mod sift;
pub mod sort;
pub mod top_k;

#[cfg(test)]
mod testing;

pub use error::{HeapError, Result};
pub use heap::Heap;
pub use sort::{heap_sort, heap_sort_in_place};
pub use top_k::{k_largest_bounded, k_smallest_bounded, k_smallest_scan, k_smallest_sorted};
