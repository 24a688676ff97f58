//! Replaceable min-priority queue used by the Dijkstra family
//!
//! Engines never name a heap type directly. They receive a [`QueueFactory`]
//! at construction time and ask it for a fresh queue on every call, so a
//! caller can swap the heap implementation without touching the algorithms.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Min-priority queue of `(item, priority)` pairs.
///
/// Entries with equal priority must come out in insertion order; the
/// engines rely on that for deterministic tie-breaking.
pub trait PriorityQueue<T, P> {
    fn push(&mut self, item: T, priority: P);

    /// Removes the entry with the smallest priority.
    fn pop(&mut self) -> Option<(T, P)>;

    fn peek_priority(&self) -> Option<&P>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Produces one empty queue per algorithm call.
pub trait QueueFactory {
    type Queue<T, P: PartialOrd>: PriorityQueue<T, P>;

    fn create<T, P: PartialOrd>(&self) -> Self::Queue<T, P>;
}

impl<Q: QueueFactory> QueueFactory for &Q {
    type Queue<T, P: PartialOrd> = Q::Queue<T, P>;

    fn create<T, P: PartialOrd>(&self) -> Self::Queue<T, P> {
        (**self).create()
    }
}

/// Default factory backed by [`std::collections::BinaryHeap`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryHeapFactory;

impl QueueFactory for BinaryHeapFactory {
    type Queue<T, P: PartialOrd> = BinaryHeapQueue<T, P>;

    fn create<T, P: PartialOrd>(&self) -> Self::Queue<T, P> {
        BinaryHeapQueue::new()
    }
}

#[derive(Debug)]
struct HeapEntry<T, P> {
    priority: P,
    sequence: u64,
    item: T,
}

impl<T, P: PartialOrd> PartialEq for HeapEntry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: PartialOrd> Eq for HeapEntry<T, P> {}

// Min-heap by priority, then FIFO by sequence (reversed for BinaryHeap)
impl<T, P: PartialOrd> Ord for HeapEntry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<T, P: PartialOrd> PartialOrd for HeapEntry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary min-heap with FIFO order among equal priorities.
#[derive(Debug)]
pub struct BinaryHeapQueue<T, P> {
    heap: BinaryHeap<HeapEntry<T, P>>,
    next_sequence: u64,
}

impl<T, P: PartialOrd> BinaryHeapQueue<T, P> {
    pub fn new() -> Self {
        BinaryHeapQueue {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }
}

impl<T, P: PartialOrd> Default for BinaryHeapQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: PartialOrd> PriorityQueue<T, P> for BinaryHeapQueue<T, P> {
    fn push(&mut self, item: T, priority: P) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(HeapEntry {
            priority,
            sequence,
            item,
        });
    }

    fn pop(&mut self) -> Option<(T, P)> {
        self.heap.pop().map(|entry| (entry.item, entry.priority))
    }

    fn peek_priority(&self) -> Option<&P> {
        self.heap.peek().map(|entry| &entry.priority)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
