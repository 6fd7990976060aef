use core::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{Shape, SortKey, ZIndex};

#[derive(Debug)]
struct Entry {
    key: SortKey,
    shape: Shape,
}

// Entries compare by key only, reversed so `BinaryHeap` pops the minimum.
impl Ord for Entry {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other.key.cmp(&self.key)
    }
}

impl PartialOrd for Entry {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Entry {}

/// Min-priority queue of shapes keyed by `(z-index, push sequence)`.
///
/// Performance characteristics:
/// - `push()` / `pop()` are O(log n)
/// - draining n shapes is O(n log n)
///
/// Every push is an independent entry; equal z-indices and structurally equal
/// shapes are never merged. Equal z-indices pop in push order.
#[derive(Debug, Default)]
pub struct ShapeQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl ShapeQueue {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `shape` under its own z-index.
    pub fn push(&mut self, shape: Shape) {
        let key = SortKey::new(shape.z_index(), self.next_seq);
        self.next_seq += 1;
        self.heap.push(Entry { key, shape });
    }

    /// Removes and returns the shape that paints next.
    #[inline]
    pub fn pop(&mut self) -> Option<Shape> {
        self.heap.pop().map(|e| e.shape)
    }

    /// Z-index of the shape [`pop`](Self::pop) would return.
    #[inline]
    pub fn peek_z(&self) -> Option<ZIndex> {
        self.heap.peek().map(|e| e.key.z)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Concatenates `other` after every entry already queued.
    ///
    /// `other`'s shapes keep their relative order and are sequenced behind
    /// this queue's, so equal-z shapes from `self` still paint first.
    pub fn append(&mut self, other: ShapeQueue) {
        for shape in other.into_paint_order() {
            self.push(shape);
        }
    }

    /// Drains all shapes in paint order (back-to-front).
    pub fn into_paint_order(mut self) -> Vec<Shape> {
        std::iter::from_fn(|| self.pop()).collect()
    }
}
