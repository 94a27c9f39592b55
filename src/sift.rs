//! Index arithmetic and the two invariant-restoration primitives.
//!
//! Everything here works on plain slices in level order, so the owned
//! [`Heap`](crate::Heap) and the in-place sort share the same code.
//!
//! ```text
//!           0
//!     1            2
//!  3     4      5     6
//! ```

/// Position of the parent of `i`. Meaningless for the root, where it yields 0.
#[inline]
pub const fn parent(i: usize) -> usize {
    i.saturating_sub(1) / 2
}

#[inline]
pub const fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
pub const fn right(i: usize) -> usize {
    2 * i + 2
}

/// Moves the element at `i` toward the root while it is larger than its parent.
///
/// Out-of-range `i` is a no-op. Returns the final position of the element.
pub fn sift_up<T: Ord>(data: &mut [T], start: usize) -> usize {
    if start >= data.len() {
        return start;
    }
    let mut i = start;
    while i != 0 {
        let p = parent(i);
        if data[i] <= data[p] {
            break;
        }
        data.swap(i, p);
        i = p;
    }
    i
}

/// Moves the element at `start` toward the leaves while a child is larger,
/// looking only at the prefix `data[..end]`.
///
/// `end` is clamped to `data.len()`; `start >= end` is a no-op. Returns the
/// final position of the element.
pub fn sift_down<T: Ord>(data: &mut [T], start: usize, end: usize) -> usize {
    let end = end.min(data.len());
    let mut i = start;
    while i < end {
        let mut largest = i;
        let (l, r) = (left(i), right(i));
        if l < end && data[l] > data[largest] {
            largest = l;
        }
        if r < end && data[r] > data[largest] {
            largest = r;
        }
        if largest == i {
            break;
        }
        data.swap(largest, i);
        i = largest;
    }
    i
}

/// Floyd's bottom-up build: sift down every internal node, last one first.
pub fn heapify<T: Ord>(data: &mut [T]) {
    let len = data.len();
    // parent(len - 1) == len / 2 - 1 for len >= 2
    for i in (0..len / 2).rev() {
        sift_down(data, i, len);
    }
}

pub fn is_max_heap<T: Ord>(data: &[T]) -> bool {
    (1..data.len()).all(|i| data[parent(i)] >= data[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_arithmetic() {
        assert_eq!(0, parent(1));
        assert_eq!(0, parent(2));
        assert_eq!(1, parent(3));
        assert_eq!(2, parent(6));
        assert_eq!(0, parent(0));
        assert_eq!(7, left(3));
        assert_eq!(8, right(3));
        for i in 0..100 {
            assert_eq!(i, parent(left(i)));
            assert_eq!(i, parent(right(i)));
        }
    }

    #[test]
    fn test_sift_up() {
        let mut data = vec![9, 5, 8, 1, 2, 7, 10];
        assert_eq!(0, sift_up(&mut data, 6));
        assert_eq!(vec![10, 5, 9, 1, 2, 7, 8], data);
        assert!(is_max_heap(&data));
    }

    #[test]
    fn test_sift_up_noop() {
        let mut data = vec![3, 2, 1];
        assert_eq!(2, sift_up(&mut data, 2));
        assert_eq!(5, sift_up(&mut data, 5));
        assert_eq!(vec![3, 2, 1], data);
    }

    #[test]
    fn test_sift_down() {
        let mut data = vec![1, 9, 8, 7, 6, 5, 4];
        assert_eq!(3, sift_down(&mut data, 0, 7));
        assert_eq!(vec![9, 7, 8, 1, 6, 5, 4], data);
        assert!(is_max_heap(&data));
    }

    #[test]
    fn test_sift_down_bounded() {
        // the tail past `end` must never be touched
        let mut data = vec![1, 2, 3, 100, 200];
        sift_down(&mut data, 0, 3);
        assert_eq!(vec![3, 2, 1, 100, 200], data);
        assert_eq!(9, sift_down(&mut data, 9, 3));
        sift_down(&mut data, 1, 99);
        assert_eq!(vec![3, 200, 1, 100, 2], data);
    }

    #[test]
    fn test_heapify() {
        let mut data = vec![3, 1, 2, 4, 5, 6, 7];
        heapify(&mut data);
        assert!(is_max_heap(&data));
        assert_eq!(7, data[0]);

        let mut empty: Vec<i32> = vec![];
        heapify(&mut empty);
        let mut one = vec![1];
        heapify(&mut one);
        assert_eq!(vec![1], one);
    }

    #[test]
    fn test_is_max_heap() {
        assert!(is_max_heap::<i32>(&[]));
        assert!(is_max_heap(&[5, 5, 5]));
        assert!(!is_max_heap(&[1, 2]));
        assert!(!is_max_heap(&[9, 6, 5, 7]));
    }
}
