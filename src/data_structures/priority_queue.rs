use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of shortest-path candidates.
///
/// Stale entries are allowed; callers discard them on extraction (lazy deletion).
/// Entries with equal priority come out in insertion order, which keeps step
/// logs deterministic.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Clone + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// The underlying binary heap, keyed by (priority, insertion sequence)
    heap: BinaryHeap<Reverse<(P, u64, V)>>,

    /// Next insertion sequence number
    sequence: u64,
}

impl<V, P> Frontier<V, P>
where
    V: Clone + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, self.sequence, vertex)));
        self.sequence += 1;
    }

    /// Removes the entry with the lowest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, _, vertex))| (vertex, priority))
    }

    /// Returns the entry with the lowest priority without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap
            .peek()
            .map(|Reverse((priority, _, vertex))| (vertex, *priority))
    }
}

impl<V, P> Default for Frontier<V, P>
where
    V: Clone + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
