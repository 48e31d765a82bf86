//! Benchmarks for graph construction and queries
//!
//! Out-neighbor lists are scanned linearly for duplicate suppression and
//! edge lookups, so these track how that scales with out-degree.

use adjgraph::graph::DirectedGraph;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Create a graph where every vertex points at the next `fan_out` vertices
fn create_graph(vertices: usize, fan_out: usize) -> DirectedGraph<usize> {
    let mut graph = DirectedGraph::with_capacity(vertices);
    for v in 0..vertices {
        graph.add_vertex(v).unwrap();
    }
    for v in 0..vertices {
        for step in 1..=fan_out {
            graph.add_edge(&v, &((v + step) % vertices)).unwrap();
        }
    }
    graph
}

/// Benchmark building a graph from scratch
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100, 1000, 5000].iter() {
        group.bench_with_input(BenchmarkId::new("vertices_fan_out_8", size), size, |b, &n| {
            b.iter(|| black_box(create_graph(n, 8)));
        });
    }

    group.finish();
}

/// Benchmark edge lookups at increasing out-degree
fn bench_edge_exists(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_exists");

    for fan_out in [4, 32, 256].iter() {
        let graph = create_graph(1000, *fan_out);

        group.bench_with_input(BenchmarkId::new("fan_out", fan_out), fan_out, |b, _| {
            b.iter(|| {
                for v in 0..1000 {
                    black_box(graph.edge_exists(&v, &((v + 1) % 1000)).unwrap());
                    black_box(graph.edge_exists(&v, &((v + 500) % 1000)).unwrap());
                }
            });
        });
    }

    group.finish();
}

/// Benchmark counting edges across the whole graph
fn bench_num_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("num_edges");

    for size in [1000, 10000].iter() {
        let graph = create_graph(*size, 8);

        group.bench_with_input(BenchmarkId::new("vertices", size), size, |b, _| {
            b.iter(|| black_box(graph.num_edges()));
        });
    }

    group.finish();
}

/// Benchmark cycle detection through petgraph
fn bench_detect_cycles(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_cycles");

    for size in [100, 1000].iter() {
        let graph = create_graph(*size, 4);

        group.bench_with_input(BenchmarkId::new("vertices", size), size, |b, _| {
            b.iter(|| black_box(graph.detect_cycles()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_edge_exists,
    bench_num_edges,
    bench_detect_cycles
);
criterion_main!(benches);
