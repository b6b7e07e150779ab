use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority frontier of `(vertex, tentative distance)` entries
///
/// Entries are never updated in place: a better distance is pushed as a new
/// entry and the outdated one is discarded by the caller when it surfaces.
/// Equal distances pop in ascending vertex order.
#[derive(Debug)]
pub struct Frontier<P>
where
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(P, usize)>>,
}

impl<P> Frontier<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty frontier with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
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

    /// Pushes a vertex with its tentative distance
    pub fn push(&mut self, vertex: usize, distance: P) {
        self.heap.push(Reverse((distance, vertex)));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(usize, P)> {
        self.heap.pop().map(|Reverse((distance, vertex))| (vertex, distance))
    }
}

impl<P> Default for Frontier<P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
