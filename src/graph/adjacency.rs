use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A directed graph stored as one edge list per vertex
///
/// Every vertex in `0..vertex_count()` owns exactly one (possibly empty)
/// record, so a vertex without outgoing edges is never omitted. Serializes
/// as a JSON array of arrays of `[target, weight]` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyList<W> {
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    edges: Vec<Vec<(usize, W)>>,
}

impl<W> AdjacencyList<W>
where
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyList { edges: Vec::new() }
    }

    /// Creates a graph with `vertices` isolated vertices
    pub fn with_vertices(vertices: usize) -> Self {
        AdjacencyList {
            edges: vec![Vec::new(); vertices],
        }
    }

    /// Borrows the raw per-vertex edge lists
    pub fn as_slice(&self) -> &[Vec<(usize, W)>] {
        &self.edges
    }

    /// Consumes the graph, returning the raw per-vertex edge lists
    pub fn into_inner(self) -> Vec<Vec<(usize, W)>> {
        self.edges
    }

    /// Checks that every edge points at a vertex inside the graph
    pub fn validate(&self) -> Result<()> {
        validate_targets(self)
    }
}

impl<W> From<Vec<Vec<(usize, W)>>> for AdjacencyList<W> {
    fn from(edges: Vec<Vec<(usize, W)>>) -> Self {
        AdjacencyList { edges }
    }
}

/// Returns the first edge whose target lies outside the graph as an error
pub(crate) fn validate_targets<W, G>(graph: &G) -> Result<()>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    let vertex_count = graph.vertex_count();
    for from in 0..vertex_count {
        if let Some(&(to, _)) = graph
            .outgoing_edges(from)
            .iter()
            .find(|&&(to, _)| to >= vertex_count)
        {
            return Err(Error::MalformedGraph {
                from,
                to,
                vertex_count,
            });
        }
    }
    Ok(())
}

fn edges_of<W>(edges: &[Vec<(usize, W)>], vertex: usize) -> &[(usize, W)] {
    edges.get(vertex).map(Vec::as_slice).unwrap_or(&[])
}

impl<W> Graph<W> for AdjacencyList<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> &[(usize, W)] {
        edges_of(&self.edges, vertex)
    }
}

impl<W> Graph<W> for [Vec<(usize, W)>]
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn edge_count(&self) -> usize {
        self.iter().map(Vec::len).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> &[(usize, W)] {
        edges_of(self, vertex)
    }
}

impl<W> Graph<W> for Vec<Vec<(usize, W)>>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn edge_count(&self) -> usize {
        self.iter().map(Vec::len).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> &[(usize, W)] {
        edges_of(self, vertex)
    }
}

impl<W> MutableGraph<W> for AdjacencyList<W>
where
    W: Weight,
{
    fn add_vertex(&mut self) -> usize {
        self.edges.push(Vec::new());
        self.edges.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }
        match self.edges.get_mut(from) {
            Some(outgoing) => {
                outgoing.push((to, weight));
                Ok(())
            }
            None => Err(Error::InvalidEdge(from, to)),
        }
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        match self.edges.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|&(target, _)| target != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }
}
