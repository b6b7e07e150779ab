use serde::{Deserialize, Serialize};

use crate::graph::{Graph, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
///
/// Both tables are indexed by vertex. A vertex that is its own predecessor is
/// either the source or was never reached; unreached vertices also carry
/// [`Weight::infinity`] as their distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathResult<W> {
    /// Distances from source to each vertex
    pub distances: Vec<W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<usize>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Number of vertices covered by the result
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Shortest distance to `vertex`, or `None` if it is unreachable or unknown
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().filter(|d| !d.is_infinite())
    }

    /// Vertex preceding `vertex` on its shortest path.
    /// `None` for the source, unreached vertices and unknown vertices.
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors
            .get(vertex)
            .copied()
            .filter(|&pred| pred != vertex)
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| !d.is_infinite()).count()
    }

    /// Vertices on the shortest path from the source to `target`, in order
    ///
    /// Walks predecessors back from `target` until a self-referencing vertex.
    /// Returns `None` when `target` is unreachable, or when the predecessor
    /// table does not lead back to the source without revisiting a vertex.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(pred) = self.predecessor(current) {
            if path.len() >= self.vertex_count() {
                return None;
            }
            path.push(pred);
            current = pred;
        }

        if current != self.source {
            return None;
        }
        path.reverse();
        Some(path)
    }

    /// Splits the result into its `(predecessors, distances)` tables
    pub fn into_parts(self) -> (Vec<usize>, Vec<W>) {
        (self.predecessors, self.distances)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
