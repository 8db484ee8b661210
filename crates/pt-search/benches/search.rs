//! Benchmarks over a square lattice: graph build, waypoint snapping, and
//! the four search algorithms corner to corner.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use pt_core::{CancelToken, GeoPoint};
use pt_graph::{Edge, GraphBuilder, Node, RouteGraph};
use pt_search::Algorithm;

const SIDE: usize = 60; // 3600 nodes, ~14k directed adjacency entries

fn lattice_records(n: usize) -> (Vec<Node>, Vec<Edge>) {
    let mut nodes = Vec::with_capacity(n * n);
    let mut edges = Vec::new();
    for r in 0..n {
        for c in 0..n {
            nodes.push(Node {
                id:  format!("{r}-{c}"),
                lat: r as f64 * 0.01,
                lon: c as f64 * 0.01,
            });
            if c + 1 < n {
                edges.push(Edge {
                    source: format!("{r}-{c}"),
                    target: format!("{r}-{}", c + 1),
                    weight: None,
                });
            }
            if r + 1 < n {
                edges.push(Edge {
                    source: format!("{r}-{c}"),
                    target: format!("{}-{c}", r + 1),
                    weight: None,
                });
            }
        }
    }
    (nodes, edges)
}

fn lattice(n: usize) -> RouteGraph {
    let (nodes, edges) = lattice_records(n);
    GraphBuilder::from_records(nodes, edges).build()
}

fn bench_build(c: &mut Criterion) {
    let (nodes, edges) = lattice_records(SIDE);
    c.bench_function("build_lattice_60x60", |b| {
        b.iter_batched(
            || (nodes.clone(), edges.clone()),
            |(n, e)| GraphBuilder::from_records(n, e).build(),
            BatchSize::SmallInput,
        )
    });
}

fn bench_snap(c: &mut Criterion) {
    let g = lattice(SIDE);
    c.bench_function("nearest_node_60x60", |b| {
        b.iter(|| g.nearest_node(black_box(GeoPoint::new(0.313, 0.271))))
    });
}

fn bench_search(c: &mut Criterion) {
    let g = lattice(SIDE);
    let start = g.resolve("0-0").expect("corner node");
    let goal = g.resolve(&format!("{0}-{0}", SIDE - 1)).expect("corner node");
    let token = CancelToken::new();

    let mut group = c.benchmark_group("corner_to_corner_60x60");
    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.as_str(), |b| {
            b.iter(|| algorithm.run(black_box(&g), start, goal, &token))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_snap, bench_search);
criterion_main!(benches);
