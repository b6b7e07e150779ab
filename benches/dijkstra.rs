use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dijkstra_sssp::graph::generators::{generate_grid, generate_random};
use dijkstra_sssp::{Dijkstra, ShortestPathAlgorithm};

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_random");
    let dijkstra = Dijkstra::new();

    for &size in &[1_000usize, 10_000, 100_000] {
        let graph = generate_random(size, 4.0, 100, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| dijkstra.compute_shortest_paths(graph, black_box(0)).unwrap())
        });
    }

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let graph = generate_grid(200, 200);
    let dijkstra = Dijkstra::new();

    c.bench_function("dijkstra_grid_200x200", |b| {
        b.iter(|| dijkstra.compute_shortest_paths(&graph, black_box(0)).unwrap())
    });
}

criterion_group!(benches, bench_random_graphs, bench_grid);
criterion_main!(benches);
