use crate::graph::{AdjacencyList, MutableGraph};
use rand::prelude::*;

/// Cost of a horizontal or vertical grid step
pub const GRID_STRAIGHT_COST: u64 = 10;
/// Cost of a diagonal grid step, roughly `10 * sqrt(2)`
pub const GRID_DIAGONAL_COST: u64 = 14;

/// Generates a random directed graph with about `edge_factor * n` edges
///
/// Weights are drawn uniformly from `1..=max_weight`. Self-loops are skipped.
/// The same `seed` always yields the same graph.
pub fn generate_random(n: usize, edge_factor: f64, max_weight: u64, seed: u64) -> AdjacencyList<u64> {
    let mut graph = AdjacencyList::with_vertices(n);
    if n == 0 {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;
    let max_weight = max_weight.max(1);

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1..=max_weight);
            // Both endpoints were drawn from 0..n
            let _ = graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width * height` grid with 8-connectivity
///
/// Vertex `(x, y)` has index `y * width + x`. Straight moves cost
/// [`GRID_STRAIGHT_COST`] and diagonal moves [`GRID_DIAGONAL_COST`].
pub fn generate_grid(width: usize, height: usize) -> AdjacencyList<u64> {
    let mut graph = AdjacencyList::with_vertices(width * height);

    let directions: [(i64, i64, u64); 8] = [
        (0, -1, GRID_STRAIGHT_COST),
        (1, 0, GRID_STRAIGHT_COST),
        (0, 1, GRID_STRAIGHT_COST),
        (-1, 0, GRID_STRAIGHT_COST),
        (1, -1, GRID_DIAGONAL_COST),
        (1, 1, GRID_DIAGONAL_COST),
        (-1, 1, GRID_DIAGONAL_COST),
        (-1, -1, GRID_DIAGONAL_COST),
    ];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            for &(dx, dy, cost) in &directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    let _ = graph.add_edge(vertex, neighbor, cost);
                }
            }
        }
    }

    graph
}
