use log::{debug, trace, warn};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::adjacency::validate_targets;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// How the engine treats edges that point outside the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GraphValidation {
    /// Scan every edge before computing and fail with `Error::MalformedGraph`
    #[default]
    Strict,
    /// Skip the scan; out-of-range targets are ignored during relaxation
    Lenient,
}

/// Dijkstra's algorithm with a lazy-deletion frontier
///
/// Improved distances are pushed as fresh frontier entries instead of
/// decreasing a key; entries for already finalized vertices are dropped when
/// popped. Weights are unsigned, so a finalized vertex is never improved.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    validation: GraphValidation,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance with strict validation
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Sets how out-of-range edge targets are handled
    pub fn with_validation(mut self, validation: GraphValidation) -> Self {
        self.validation = validation;
        self
    }

    pub fn validation(&self) -> GraphValidation {
        self.validation
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.vertex_count();
        if source >= n {
            return Err(Error::InvalidSource {
                vertex: source,
                vertex_count: n,
            });
        }
        if self.validation == GraphValidation::Strict {
            validate_targets(graph)?;
        }

        debug!(
            "Dijkstra from {} over {} vertices and {} edges",
            source,
            n,
            graph.edge_count()
        );

        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<usize> = (0..n).collect();
        let mut finalized = vec![false; n];
        distances[source] = W::zero();

        let mut frontier = Frontier::new();
        frontier.push(source, W::zero());
        let mut stale_pops = 0usize;

        while let Some((u, _)) = frontier.pop() {
            if finalized[u] {
                stale_pops += 1;
                trace!("Discarding stale frontier entry for vertex {}", u);
                continue;
            }
            finalized[u] = true;
            let dist_u = distances[u];

            for &(v, weight) in graph.outgoing_edges(u) {
                if v >= n {
                    warn!("Skipping edge {} -> {}: graph has {} vertices", u, v, n);
                    continue;
                }
                if finalized[v] {
                    continue;
                }

                // A sum equal to the sentinel is as unusable as an overflow
                let candidate = match dist_u.checked_add(&weight) {
                    Some(d) if !d.is_infinite() => d,
                    _ => continue,
                };

                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = u;
                    frontier.push(v, candidate);
                }
            }
        }

        let result = ShortestPathResult {
            distances,
            predecessors,
            source,
        };
        debug!(
            "Dijkstra from {} finished: {} of {} vertices reachable, {} stale entries discarded",
            source,
            result.reachable_count(),
            n,
            stale_pops
        );
        Ok(result)
    }
}

/// Computes single-source shortest paths over raw per-vertex edge lists
///
/// Returns `(predecessors, distances)`. Unreachable vertices get
/// `W::max_value()` as distance and themselves as predecessor.
pub fn shortest_path<W>(source: usize, graph: &[Vec<(usize, W)>]) -> Result<(Vec<usize>, Vec<W>)>
where
    W: Weight,
{
    Dijkstra::new()
        .compute_shortest_paths(graph, source)
        .map(ShortestPathResult::into_parts)
}
