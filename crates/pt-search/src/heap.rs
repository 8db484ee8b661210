//! Minimum binary heap keyed by `f64` cost.
//!
//! `std::collections::BinaryHeap` is a max-heap over `Ord` keys, and `f64`
//! is not `Ord`.  [`MinHeap`] wraps both problems at once: entries compare
//! through [`f64::total_cmp`] with the ordering reversed, so `pop` yields
//! the smallest key.  Ties break on the value, so pop order never depends
//! on insertion history.
//!
//! Duplicate pushes of the same value are allowed.  The search loops treat
//! popping an already-finalized node as a no-op, which is simpler and no
//! slower at this scale than a decrease-key heap with index tracking.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct HeapEntry<T> {
    key:   f64,
    value: T,
}

impl<T: Ord> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the minimum key.
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.value.cmp(&self.value))
    }
}

impl<T: Ord> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for HeapEntry<T> {}

/// Min-heap of `(f64 key, value)` pairs with deterministic tie-breaking.
///
/// # Example
///
/// ```
/// use pt_search::MinHeap;
///
/// let mut h = MinHeap::new();
/// h.push(3.0, "far");
/// h.push(1.0, "near");
/// h.push(2.0, "mid");
/// assert_eq!(h.pop(), Some((1.0, "near")));
/// assert_eq!(h.pop(), Some((2.0, "mid")));
/// ```
pub struct MinHeap<T: Ord> {
    heap: BinaryHeap<HeapEntry<T>>,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self { heap: BinaryHeap::new() }
    }

    /// Pre-allocate for the expected frontier size.
    pub fn with_capacity(n: usize) -> Self {
        Self { heap: BinaryHeap::with_capacity(n) }
    }

    /// Insert `value` with priority `key`.  NaN keys sort after every
    /// finite key under `total_cmp`; graph weights are sanitized at build
    /// time so they never occur in practice.
    pub fn push(&mut self, key: f64, value: T) {
        self.heap.push(HeapEntry { key, value });
    }

    /// Remove and return the entry with the smallest key.
    pub fn pop(&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|e| (e.key, e.value))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
