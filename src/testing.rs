use crate::sift::is_max_heap;
use crate::Heap;
use std::fmt::Debug;

pub fn init_test() {
    drop(env_logger::builder().is_test(true).try_init());
}

pub fn assert_heap<T: Ord + Debug>(heap: &Heap<T>) {
    assert!(
        is_max_heap(heap.as_slice()),
        "max-heap property broken: {:?}",
        heap.as_slice()
    );
}

/// Drains a heap through `pop`, asserting the property after every step.
pub fn drain<T: Ord + Debug>(heap: &mut Heap<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(heap.len());
    while let Ok(v) = heap.pop() {
        assert_heap(heap);
        out.push(v);
    }
    out
}
