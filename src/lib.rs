//! Dijkstra SSSP - single-source shortest paths with a lazy-deletion frontier
//!
//! Computes, for every vertex of a directed graph with non-negative integer
//! edge weights, its shortest distance from a source vertex and its predecessor
//! on one shortest path.
//!
//! Unreachable vertices carry the weight type's maximum value as an "infinity"
//! sentinel and are their own predecessor, exactly like the source vertex.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod report;

pub use algorithm::{
    dijkstra::{shortest_path, Dijkstra, GraphValidation},
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyList, Graph, MutableGraph, Weight};
pub use report::PathReport;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid source vertex {vertex}: graph has {vertex_count} vertices")]
    InvalidSource { vertex: usize, vertex_count: usize },

    #[error("Malformed graph: edge from {from} to {to} but graph has {vertex_count} vertices")]
    MalformedGraph {
        from: usize,
        to: usize,
        vertex_count: usize,
    },

    #[error("Invalid destination vertex {0}.")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Graph JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
