//! Criterion benchmarks for u-shortpath.
//!
//! Uses seeded random multigraphs so runs are comparable across commits.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_shortpath::dijkstra::{DijkstraSolver, FORBIDDEN_LEN};
use u_shortpath::graph::MultiGraph;
use u_shortpath::heap::{IndexedMinHeap, KeyedSlots};

// ===========================================================================
// Random multigraph: a spanning path plus uniformly drawn extra edges
// ===========================================================================

fn random_instance(n: usize, extra: usize, seed: u64) -> (MultiGraph, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = MultiGraph::new(n);
    let mut costs = Vec::with_capacity(n - 1 + extra);
    for u in 1..n {
        graph.add_edge(u - 1, u).unwrap();
        costs.push(rng.random_range(1.0..100.0));
    }
    for _ in 0..extra {
        let u = rng.random_range(0..n);
        let v = (u + rng.random_range(1..n)) % n;
        graph.add_edge(u, v).unwrap();
        costs.push(rng.random_range(1.0..100.0));
    }
    (graph, costs)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_solve");
    group.sample_size(20);

    for &n in &[100usize, 1_000, 10_000] {
        let (graph, costs) = random_instance(n, 4 * n, 42);
        let mut solver = DijkstraSolver::new(&graph);
        group.bench_with_input(BenchmarkId::from_parameter(n), &costs, |b, costs| {
            b.iter(|| {
                let path = solver.solve(black_box(costs), 0, n - 1);
                black_box(path)
            })
        });
    }
    group.finish();
}

fn bench_pricing_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_pricing_loop");
    group.sample_size(10);

    // Same destination, costs perturbed and some edges blocked each round.
    let n = 2_000;
    let (graph, base) = random_instance(n, 4 * n, 7);
    group.bench_function(BenchmarkId::from_parameter(n), |b| {
        let mut rng = StdRng::seed_from_u64(7);
        let mut solver = DijkstraSolver::new(&graph);
        let mut costs = base.clone();
        b.iter(|| {
            for (c, &orig) in costs.iter_mut().zip(&base) {
                *c = if rng.random_bool(0.05) {
                    FORBIDDEN_LEN
                } else {
                    orig * rng.random_range(0.5..1.5)
                };
            }
            let src = rng.random_range(1..n);
            black_box(solver.solve(&costs, src, 0))
        })
    });
    group.finish();
}

fn bench_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_heap");

    for &n in &[1_000usize, 10_000] {
        let mut rng = StdRng::seed_from_u64(3);
        let keys: Vec<f64> = (0..n).map(|_| rng.random_range(0.0..1e6)).collect();
        group.bench_with_input(BenchmarkId::new("insert_decrease_drain", n), &keys, |b, keys| {
            b.iter(|| {
                let mut store = KeyedSlots::new();
                let mut heap = IndexedMinHeap::with_capacity(keys.len());
                for &k in keys {
                    let h = store.push(k);
                    heap.insert(&mut store, h);
                }
                for h in (0..keys.len()).step_by(3) {
                    if let Some(slot) = store.slot_of(h) {
                        let k = *store.key(h) * 0.5;
                        heap.update(&mut store, slot, |s, h| s.set_key(h, k));
                    }
                }
                while let Some(h) = heap.pop(&mut store) {
                    black_box(h);
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve, bench_pricing_loop, bench_heap);
criterion_main!(benches);
