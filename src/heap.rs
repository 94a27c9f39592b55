use crate::error::{HeapError, Result};
use crate::sift;
use crate::sort;
use log::{debug, trace};

/// A max-heap stored in level order in a growable buffer.
///
/// The tree is implicit: the children of `data[i]` live at `2i + 1` and
/// `2i + 2`. Every public method leaves `data[parent(i)] >= data[i]` true for
/// all `i`.
#[derive(Clone, Debug)]
pub struct Heap<T: Ord> {
    data: Vec<T>,
}

impl<T: Ord> Default for Heap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Heap<T>
where
    T: Ord,
{
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Takes ownership of `data` and arranges it into a heap in linear time.
    pub fn build_max_heap(mut data: Vec<T>) -> Self {
        sift::heapify(&mut data);
        debug!("built heap of {} elements", data.len());
        let heap = Self { data };
        heap.check();
        heap
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::build_max_heap(data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Read-only view of the backing buffer in level order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn push(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        sift::sift_up(&mut self.data, last);
        self.check();
    }

    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Removes and returns the greatest element.
    pub fn pop(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let top = self.data.pop().ok_or(HeapError::Empty)?;
        let len = self.data.len();
        sift::sift_down(&mut self.data, 0, len);
        self.check();
        Ok(top)
    }

    /// Deletes the element at `index` (level order). Returns `false` and leaves
    /// the heap untouched when `index` is out of range.
    ///
    /// The tail element is moved into the hole. It may be larger than its new
    /// ancestors or smaller than its new descendants, so both directions are
    /// tried; at most one of them moves anything.
    pub fn remove_at(&mut self, index: usize) -> bool {
        let len = self.data.len();
        if index >= len {
            trace!("remove_at({}) out of range for heap of {}", index, len);
            return false;
        }
        if index == len - 1 {
            self.data.pop();
            self.check();
            return true;
        }
        self.data.swap_remove(index);
        let len = self.data.len();
        sift::sift_up(&mut self.data, index);
        sift::sift_down(&mut self.data, index, len);
        self.check();
        true
    }

    /// Removes the first occurrence of `value` in level order.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.data.iter().position(|v| v == value) {
            Some(index) => self.remove_at(index),
            None => false,
        }
    }

    /// Moves every element of `other` into `self` and rebuilds the heap with
    /// Floyd's algorithm over the combined buffer. `other` is left empty.
    pub fn merge(&mut self, other: &mut Heap<T>) -> &mut Self {
        if other.is_empty() {
            return self;
        }
        debug!("merging heap of {} into heap of {}", other.len(), self.len());
        self.data.append(&mut other.data);
        self.rebuild();
        self
    }

    /// Same as [`Heap::merge`], for callers holding an optional heap.
    pub fn merge_heap(&mut self, other: Option<&mut Heap<T>>) -> Result<&mut Self> {
        let other = other.ok_or(HeapError::InvalidArgument("no heap to merge"))?;
        Ok(self.merge(other))
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the backing buffer in level order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the elements in ascending order, reusing the buffer.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        sort::sort_heap(&mut self.data);
        self.data
    }

    fn rebuild(&mut self) {
        sift::heapify(&mut self.data);
        self.check();
    }

    #[inline]
    fn check(&self) {
        #[cfg(feature = "check-invariants")]
        assert!(sift::is_max_heap(&self.data));
    }
}

impl<T: Ord> From<Vec<T>> for Heap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::build_max_heap(data)
    }
}

impl<T: Ord> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_max_heap(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for Heap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let before = self.data.len();
        self.data.extend(iter);
        if self.data.len() != before {
            debug!("extended heap from {} to {}", before, self.data.len());
            self.rebuild();
        }
    }
}
