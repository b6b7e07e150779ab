use std::fmt::Debug;
use num_traits::{Bounded, CheckedAdd, Unsigned, Zero};

/// Edge weight usable by the shortest path engine
///
/// Weights are unsigned, so a negative edge cannot be expressed. The maximum
/// representable value is reserved as the "infinity" distance sentinel.
pub trait Weight: Copy + Ord + Debug + Zero + Bounded + CheckedAdd + Unsigned {
    /// Distance sentinel for vertices the source cannot reach
    fn infinity() -> Self {
        Self::max_value()
    }

    /// Returns true if this value is the unreachable sentinel
    fn is_infinite(&self) -> bool {
        *self == Self::max_value()
    }
}

impl<W> Weight for W where W: Copy + Ord + Debug + Zero + Bounded + CheckedAdd + Unsigned {}

/// Trait representing a weighted directed graph stored as per-vertex edge lists
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the outgoing `(target, weight)` pairs of a vertex.
    /// A vertex outside the graph has no edges.
    fn outgoing_edges(&self, vertex: usize) -> &[(usize, W)];

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).iter().any(|&(target, _)| target == to)
    }

    /// Gets the smallest weight among edges `from -> to`, if any exist
    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .iter()
            .filter(|&&(target, _)| target == to)
            .map(|&(_, weight)| weight)
            .min()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex with no outgoing edges and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge. Parallel edges are kept.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> crate::Result<()>;

    /// Removes every edge `from -> to`, returning whether any existed
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;
}
