use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use graphtric_centrality::{
    CentralityEngine, Distance, EdgeKind, EngineConfig, Graph, NodeId, ParallelEngine,
    SequentialEngine,
};

const SIZES: [usize; 3] = [16, 64, 128];

/// Ring with chords every 7 nodes; weights cycle through 1..=3.
fn ring_with_chords(n: usize) -> Graph {
    let mut g = Graph::with_nodes(EdgeKind::Undirected, n);
    for i in 0..n {
        let w = Distance(u32::try_from(i % 3).unwrap_or(0) + 1);
        let _ = g.add_edge(NodeId(i), NodeId((i + 1) % n), w);
        if i % 7 == 0 {
            let _ = g.add_edge(NodeId(i), NodeId((i + n / 2) % n), Distance::UNIT);
        }
    }
    g
}

fn bench_engines(c: &mut Criterion) {
    let config = EngineConfig::default();
    let mut group = c.benchmark_group("centrality");

    for n in SIZES {
        let graph = ring_with_chords(n);

        let mut seq = SequentialEngine::new();
        let mut par = ParallelEngine::new(&config).expect("worker pool");
        // Warm the path caches so betweenness measures the kernel only.
        let _ = seq.shortest_paths(&graph);
        let _ = par.shortest_paths(&graph);

        group.bench_with_input(BenchmarkId::new("betweenness/sequential", n), &graph, |b, g| {
            b.iter(|| black_box(seq.betweenness_centrality(g)));
        });
        group.bench_with_input(BenchmarkId::new("betweenness/parallel", n), &graph, |b, g| {
            b.iter(|| black_box(par.betweenness_centrality(g)));
        });
        group.bench_with_input(BenchmarkId::new("degree/sequential", n), &graph, |b, g| {
            b.iter(|| black_box(seq.degree_centrality(g)));
        });
        group.bench_with_input(BenchmarkId::new("degree/parallel", n), &graph, |b, g| {
            b.iter(|| black_box(par.degree_centrality(g)));
        });
        group.bench_with_input(BenchmarkId::new("eigenvector/sequential", n), &graph, |b, g| {
            b.iter(|| black_box(seq.eigenvector_centrality(g, 100, 1e-9)));
        });
        group.bench_with_input(BenchmarkId::new("eigenvector/parallel", n), &graph, |b, g| {
            b.iter(|| black_box(par.eigenvector_centrality(g, 100, 1e-9)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
