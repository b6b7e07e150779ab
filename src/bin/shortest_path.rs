use dijkstra_sssp::{AdjacencyList, Dijkstra, Graph, ShortestPathAlgorithm};
use std::env;
use std::path::{Path, PathBuf};

/// Command line configuration: `shortest_path [GRAPH_JSON] [SOURCE] [DESTINATION]`
#[derive(Debug, Clone)]
struct RunConfig {
    graph_path: Option<PathBuf>,
    source: usize,
    destination: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            graph_path: None,
            source: 0,
            destination: 2,
        }
    }
}

impl RunConfig {
    fn from_args(args: &[String]) -> Self {
        let defaults = Self::default();
        Self {
            graph_path: args.get(1).map(PathBuf::from),
            source: args
                .get(2)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.source),
            destination: args
                .get(3)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.destination),
        }
    }
}

/// Three vertices laid out as a triangle: 0 reaches 1 with weight 1 and 2
/// with weight 3, and 1 reaches 2 with weight 1. Vertex 2 has no outgoing
/// edges but still owns an empty record.
fn triangle() -> AdjacencyList<u64> {
    AdjacencyList::from(vec![vec![(1, 1), (2, 3)], vec![(2, 1)], vec![]])
}

fn load_graph(path: &Path) -> dijkstra_sssp::Result<AdjacencyList<u64>> {
    let text = std::fs::read_to_string(path)?;
    let graph: AdjacencyList<u64> = serde_json::from_str(&text)?;
    Ok(graph)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = RunConfig::from_args(&args);

    let graph = match &config.graph_path {
        Some(path) => load_graph(path)?,
        None => triangle(),
    };
    log::info!(
        "Loaded graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, config.source)?;
    log::info!(
        "{} reached {} of {} vertices from {}",
        <Dijkstra as ShortestPathAlgorithm<u64, AdjacencyList<u64>>>::name(&dijkstra),
        result.reachable_count(),
        graph.vertex_count(),
        config.source
    );

    match result.report(config.destination) {
        Ok(report) => println!("{}", report),
        Err(err) => println!("{}", err),
    }

    Ok(())
}
