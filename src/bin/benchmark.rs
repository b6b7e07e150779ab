use std::time::{Duration, Instant};
use dijkstra_sssp::graph::generators::generate_random;
use dijkstra_sssp::{AdjacencyList, Dijkstra, Graph, ShortestPathAlgorithm};

// Times one run of the algorithm and reports reachability
fn benchmark_algorithm<A>(name: &str, algorithm: &A, graph: &AdjacencyList<u64>, source: usize) -> dijkstra_sssp::Result<Duration>
where
    A: ShortestPathAlgorithm<u64, AdjacencyList<u64>>,
{
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    println!(
        "  - Found {} reachable vertices in {:?}",
        result.reachable_count(),
        duration
    );

    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000, 500_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 2.0;
    let max_weight = 100;
    let seed = 42;

    println!("=====================================================");
    println!("Benchmark: lazy-deletion Dijkstra");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(size, edge_factor, max_weight, seed);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let elapsed = benchmark_algorithm("Dijkstra", &dijkstra, &graph, 0)?;
        results.push((size, graph.edge_count(), elapsed));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15} | {:<15}", "Vertices", "Edges", "Dijkstra (ms)", "ns / edge");
    println!("-----------------------------------------------------");

    for (size, edges, elapsed) in &results {
        let per_edge = elapsed.as_nanos() as f64 / (*edges).max(1) as f64;
        println!("{:<10} | {:<10} | {:<15} | {:<15.2}", size, edges, elapsed.as_millis(), per_edge);
    }

    Ok(())
}
