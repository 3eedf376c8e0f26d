//! Criterion benchmarks comparing the indexed heap with the naive reference
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench minpq_bench
//!
//! # Only the Dijkstra workloads
//! cargo bench --bench minpq_bench -- dijkstra
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use indexed_minpq::pathfinding::{dijkstra, AdjacencyListGraph};
use indexed_minpq::topk::BoundedTopK;
use indexed_minpq::{IndexedMinPQ, MinPQ, NaiveMinPQ};

/// Linear congruential generator so inputs are identical across runs
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn next_range(&mut self, upper: u64) -> u64 {
        self.next() % upper
    }
}

fn add_then_drain<Q: MinPQ<u64>>(priorities: &[f64]) -> usize {
    let mut pq = Q::new();
    for (i, &p) in priorities.iter().enumerate() {
        pq.add(i as u64, p).unwrap();
    }
    let mut drained = 0;
    while pq.remove_min().is_ok() {
        drained += 1;
    }
    drained
}

fn decrease_keys<Q: MinPQ<u64>>(n: u64, updates: &[(u64, f64)]) -> usize {
    let mut pq = Q::new();
    for i in 0..n {
        pq.add(i, 1e9).unwrap();
    }
    for &(element, p) in updates {
        let current = pq.get_priority(&element).unwrap();
        if p < current {
            pq.change_priority(&element, p).unwrap();
        }
    }
    pq.len()
}

fn synthetic_graph(vertices: u64, degree: u64, seed: u64) -> AdjacencyListGraph<u64> {
    let mut rng = Lcg(seed);
    let mut graph = AdjacencyListGraph::new();
    for v in 0..vertices {
        // Keep the graph connected with a ring, then add random shortcuts
        graph.add_edge(v, (v + 1) % vertices, 1.0 + rng.next_range(100) as f64);
        for _ in 1..degree {
            graph.add_edge(v, rng.next_range(vertices), 1.0 + rng.next_range(100) as f64);
        }
    }
    graph
}

fn benchmark_add_then_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_then_drain");
    group.sample_size(20);

    for &n in &[100u64, 1_000, 5_000] {
        let mut rng = Lcg(12345);
        let priorities: Vec<f64> = (0..n).map(|_| rng.next_range(n) as f64).collect();

        group.bench_with_input(BenchmarkId::new("indexed", n), &priorities, |b, ps| {
            b.iter(|| black_box(add_then_drain::<IndexedMinPQ<u64>>(ps)))
        });
        if n <= 1_000 {
            group.bench_with_input(BenchmarkId::new("naive", n), &priorities, |b, ps| {
                b.iter(|| black_box(add_then_drain::<NaiveMinPQ<u64>>(ps)))
            });
        }
    }
    group.finish();
}

fn benchmark_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrease_key");
    group.sample_size(20);

    let n = 10_000u64;
    let mut rng = Lcg(54321);
    let updates: Vec<(u64, f64)> = (0..50_000)
        .map(|_| (rng.next_range(n), rng.next_range(1_000_000) as f64))
        .collect();

    group.bench_function("indexed", |b| {
        b.iter(|| black_box(decrease_keys::<IndexedMinPQ<u64>>(n, &updates)))
    });
    group.bench_function("naive", |b| {
        b.iter(|| black_box(decrease_keys::<NaiveMinPQ<u64>>(n, &updates)))
    });
    group.finish();
}

fn benchmark_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    group.sample_size(10);

    for &vertices in &[1_000u64, 10_000] {
        let graph = synthetic_graph(vertices, 6, 777);
        group.bench_with_input(BenchmarkId::new("indexed", vertices), &graph, |b, g| {
            b.iter(|| black_box(dijkstra::<_, _, IndexedMinPQ<_>>(g, &0).unwrap().reached()))
        });
        if vertices <= 1_000 {
            group.bench_with_input(BenchmarkId::new("naive", vertices), &graph, |b, g| {
                b.iter(|| black_box(dijkstra::<_, _, NaiveMinPQ<_>>(g, &0).unwrap().reached()))
            });
        }
    }
    group.finish();
}

fn benchmark_top_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k");

    let mut rng = Lcg(99);
    let stream: Vec<(u64, f64)> = (0..100_000)
        .map(|_| (rng.next_range(5_000), rng.next_range(1_000) as f64))
        .collect();

    group.bench_function("top_10", |b| {
        b.iter(|| {
            let mut top: BoundedTopK<u64> = BoundedTopK::new(10);
            for &(element, weight) in &stream {
                top.offer(element, weight).unwrap();
            }
            black_box(top.into_ranked().unwrap())
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_add_then_drain,
    benchmark_decrease_key,
    benchmark_dijkstra,
    benchmark_top_k,
);

criterion_main!(benches);
