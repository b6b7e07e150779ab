use dijkstra_sssp::graph::generators::{generate_grid, GRID_DIAGONAL_COST, GRID_STRAIGHT_COST};
use dijkstra_sssp::graph::{AdjacencyList, Graph, MutableGraph};
use dijkstra_sssp::{shortest_path, Dijkstra, Error, ShortestPathAlgorithm};

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = generate_grid(10, 10);

    let source = 0; // Top-left corner (0,0)
    let target = 99; // Bottom-right corner (9,9)

    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, source).unwrap();

    assert_eq!(result.distance(target), Some(9 * GRID_DIAGONAL_COST));

    let path = result.path_to(target).expect("Dijkstra should construct a path");
    assert_eq!(path.len(), 10, "Diagonal walk visits one vertex per row");
    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], target, "Path should end at target");
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    let mut graph = generate_grid(10, 10);

    // Create a wall of obstacles in column 5, leaving rows 8 and 9 open
    let wall: Vec<usize> = (0..8).map(|y| y * 10 + 5).collect();
    for &obstacle in &wall {
        for v in 0..graph.vertex_count() {
            graph.remove_edge(v, obstacle);
            graph.remove_edge(obstacle, v);
        }
    }

    let source = 0;
    let target = 99;

    let result = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();

    // Cheapest detour passes through (5, 8)
    let expected = 6 * GRID_DIAGONAL_COST + 6 * GRID_STRAIGHT_COST;
    assert_eq!(result.distance(target), Some(expected));

    let path = result.path_to(target).expect("A path around the wall should exist");
    assert_eq!(path[0], source);
    assert_eq!(path[path.len() - 1], target);
    for vertex in &path {
        assert!(!wall.contains(vertex), "Path should not pass through obstacle {}", vertex);
    }

    // Wall vertices are cut off entirely
    for &obstacle in &wall {
        assert!(!result.is_reachable(obstacle));
        assert_eq!(result.distances[obstacle], u64::MAX);
        assert_eq!(result.predecessors[obstacle], obstacle);
    }
}

// Consecutive path vertices must be joined by edges whose weights add up to the distance
#[test]
fn test_path_weights_match_distance() {
    let graph = generate_grid(8, 5);
    let result = Dijkstra::new().compute_shortest_paths(&graph, 3).unwrap();

    for target in 0..graph.vertex_count() {
        let path = result.path_to(target).unwrap();
        let total: u64 = path
            .windows(2)
            .map(|pair| graph.edge_weight(pair[0], pair[1]).expect("path uses existing edges"))
            .sum();
        assert_eq!(Some(total), result.distance(target));
    }
}

#[test]
fn test_triangle_scenario() {
    let graph = vec![vec![(1, 1u64), (2, 3)], vec![(2, 1)], vec![]];

    let (predecessor, distance) = shortest_path(0, &graph).unwrap();
    assert_eq!(distance, vec![0, 1, 2]);
    assert_eq!(predecessor, vec![0, 0, 1]);

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let report = result.report(2).unwrap();
    assert_eq!(report.path, vec![0, 1, 2]);
    assert_eq!(report.distance, Some(2));
    assert_eq!(report.to_string(), "v = 2, Distance = 2, Path = 0, 1, 2");
}

#[test]
fn test_single_isolated_vertex() {
    let graph: AdjacencyList<u32> = AdjacencyList::with_vertices(1);
    let (predecessor, distance) = shortest_path(0, graph.as_slice()).unwrap();
    assert_eq!(distance, vec![0]);
    assert_eq!(predecessor, vec![0]);
}

#[test]
fn test_disconnected_vertex_reports_infinity() {
    // Vertex 2 only has outbound edges; nothing reaches it
    let graph = vec![vec![(1, 4u64)], vec![(0, 4)], vec![(0, 1), (1, 1)]];

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distances[2], u64::MAX);
    assert_eq!(result.predecessors[2], 2);
    assert_eq!(result.path_to(2), None);
    assert_eq!(result.report(2).unwrap().to_string(), "v = 2, Distance = Infinity");
}

#[test]
fn test_invalid_source_produces_no_result() {
    let graph = generate_grid(3, 3);
    let dijkstra = Dijkstra::new();

    for source in [9, 10, usize::MAX] {
        let err = dijkstra.compute_shortest_paths(&graph, source).unwrap_err();
        assert!(matches!(err, Error::InvalidSource { vertex, vertex_count: 9 } if vertex == source));
    }
}

#[test]
fn test_invalid_destination_is_reported() {
    let graph = generate_grid(2, 2);
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let err = result.report(4).unwrap_err();
    assert_eq!(err.to_string(), "Invalid destination vertex 4.");
}

#[test]
fn test_repeated_calls_are_identical() {
    let graph = generate_grid(12, 7);
    let dijkstra = Dijkstra::new();

    let first = dijkstra.compute_shortest_paths(&graph, 17).unwrap();
    let second = dijkstra.compute_shortest_paths(&graph, 17).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_graph_is_not_mutated() {
    let graph = generate_grid(6, 6);
    let before = graph.clone();
    Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(graph, before);
}
