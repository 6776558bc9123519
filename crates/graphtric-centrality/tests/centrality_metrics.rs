//! Known-topology regression tests for both engines.
//!
//! Each test builds a hand-crafted graph whose centrality values can be
//! worked out by hand, and checks both engines against them.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use graphtric_centrality::{
    AllShortestPaths, Centrality, CentralityEngine, Distance, EdgeKind, EngineConfig, Graph,
    NodeId, ParallelEngine, Path, PathProvider, SequentialEngine, ShortestPaths,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build(kind: EdgeKind, n: usize, edges: &[(usize, usize)]) -> Graph {
    build_weighted(kind, n, &edges.iter().map(|&(a, b)| (a, b, 1)).collect::<Vec<_>>())
}

fn build_weighted(kind: EdgeKind, n: usize, edges: &[(usize, usize, u32)]) -> Graph {
    let mut g = Graph::with_nodes(kind, n);
    for &(a, b, w) in edges {
        g.add_edge(NodeId(a), NodeId(b), Distance(w))
            .expect("test edges are valid");
    }
    g
}

fn complete(n: usize) -> Graph {
    let mut edges = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            edges.push((a, b));
        }
    }
    build(EdgeKind::Undirected, n, &edges)
}

fn star(n: usize) -> Graph {
    let edges: Vec<_> = (1..n).map(|leaf| (0, leaf)).collect();
    build(EdgeKind::Undirected, n, &edges)
}

fn cycle(n: usize, weight: u32) -> Graph {
    let edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n, weight)).collect();
    build_weighted(EdgeKind::Undirected, n, &edges)
}

fn parallel() -> ParallelEngine {
    ParallelEngine::new(&EngineConfig {
        worker_threads: 4,
        ..EngineConfig::default()
    })
    .expect("pool")
}

fn assert_close(map: &Centrality, node: usize, expected: f64) {
    let got = map[&NodeId(node)];
    assert!(
        (got - expected).abs() < 1e-10,
        "node {node}: expected {expected}, got {got}"
    );
}

/// Path provider that counts how often it is asked.
#[derive(Clone, Default)]
struct CountingProvider {
    calls: Arc<AtomicUsize>,
}

impl CountingProvider {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PathProvider for CountingProvider {
    fn compute_paths(&self, graph: &Graph) -> Vec<Path> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ShortestPaths.compute_paths(graph)
    }
}

// ---------------------------------------------------------------------------
// Betweenness
// ---------------------------------------------------------------------------

#[test]
fn directed_chain_middle_node_is_half() {
    // 0 → 1 → 2: the only path with an interior node is [0, 1, 2].
    let g = build(EdgeKind::Directed, 3, &[(0, 1), (1, 2)]);

    for bc in [
        SequentialEngine::new().betweenness_centrality(&g),
        parallel().betweenness_centrality(&g),
    ] {
        assert_eq!(bc.len(), 3);
        assert_close(&bc, 0, 0.0);
        assert_close(&bc, 1, 0.5);
        assert_close(&bc, 2, 0.0);
    }
}

#[test]
fn undirected_chain_counts_both_directions() {
    // [0,1,2] and [2,1,0] both pass through 1: 2 / (2 * 1).
    let g = build(EdgeKind::Undirected, 3, &[(0, 1), (1, 2)]);
    let bc = SequentialEngine::new().betweenness_centrality(&g);
    assert_close(&bc, 1, 1.0);
}

#[test]
fn diamond_default_provider_takes_one_route() {
    // 0 → 1 → 3 and 0 → 2 → 3 tie; the canonical route goes through 1.
    let g = build(EdgeKind::Directed, 4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
    for bc in [
        SequentialEngine::new().betweenness_centrality(&g),
        parallel().betweenness_centrality(&g),
    ] {
        assert_close(&bc, 0, 0.0);
        assert_close(&bc, 1, 1.0 / 6.0);
        assert_close(&bc, 2, 0.0);
        assert_close(&bc, 3, 0.0);
    }
}

#[test]
fn diamond_all_routes_provider_counts_both() {
    // One path each through 1 and 2, over 3 * 2 pairs.
    let g = build(EdgeKind::Directed, 4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
    let bc = SequentialEngine::with_provider(AllShortestPaths).betweenness_centrality(&g);
    assert_close(&bc, 0, 0.0);
    assert_close(&bc, 1, 1.0 / 6.0);
    assert_close(&bc, 2, 1.0 / 6.0);
    assert_close(&bc, 3, 0.0);
}

#[test]
fn hub_between_tied_routes_stays_bounded() {
    // Three nodes on each side of hub 6, with 7 and 8 tying it as a bridge.
    // Enumerating every tied route pushes the hub past 1.0; the default
    // provider does not.
    let mut edges = Vec::new();
    for left in 0..3 {
        edges.extend([(left, 6), (left, 7)]);
    }
    for right in 3..6 {
        edges.extend([(right, 6), (right, 8)]);
    }
    let g = build(EdgeKind::Undirected, 9, &edges);

    let bounded = SequentialEngine::new().betweenness_centrality(&g);
    assert!(bounded.values().all(|v| (0.0..=1.0).contains(v)), "{bounded:?}");

    let all = SequentialEngine::with_provider(AllShortestPaths).betweenness_centrality(&g);
    assert!((all[&NodeId(6)] - 1.5).abs() < 1e-10, "{all:?}");
}

#[test]
fn undirected_star_center_carries_every_leaf_pair() {
    // Every ordered leaf pair routes through the center: (n-1)(n-2) paths.
    let g = star(6);
    let bc = SequentialEngine::new().betweenness_centrality(&g);
    assert_close(&bc, 0, 1.0);
    for leaf in 1..6 {
        assert_close(&bc, leaf, 0.0);
    }
}

#[test]
fn betweenness_stays_within_unit_interval() {
    let g = build(
        EdgeKind::Undirected,
        7,
        &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (1, 5), (2, 6)],
    );
    let bc = SequentialEngine::new().betweenness_centrality(&g);
    assert_eq!(bc.len(), 7);
    assert!(bc.values().all(|v| (0.0..=1.0).contains(v)), "{bc:?}");
}

#[test]
fn isolated_nodes_still_get_a_score() {
    let g = build(EdgeKind::Directed, 5, &[(0, 1), (1, 2)]);
    let bc = parallel().betweenness_centrality(&g);
    assert_eq!(bc.len(), 5);
    assert_close(&bc, 3, 0.0);
    assert_close(&bc, 4, 0.0);
}

#[test]
fn empty_graph_gives_empty_maps() {
    let g = Graph::new(EdgeKind::Directed);
    let mut seq = SequentialEngine::new();
    let mut par = parallel();

    assert!(seq.betweenness_centrality(&g).is_empty());
    assert!(par.betweenness_centrality(&g).is_empty());
    assert!(seq.degree_centrality(&g).is_empty());
    assert!(par.degree_centrality(&g).is_empty());
    assert!(seq.eigenvector_centrality(&g, 10, 1e-6).scores.is_empty());
    assert!(par.eigenvector_centrality(&g, 10, 1e-6).scores.is_empty());
}

// ---------------------------------------------------------------------------
// Degree
// ---------------------------------------------------------------------------

#[test]
fn complete_graph_degree_is_exactly_one() {
    for n in 2..8 {
        let g = complete(n);
        for dc in [
            SequentialEngine::new().degree_centrality(&g),
            parallel().degree_centrality(&g),
        ] {
            assert_eq!(dc.len(), n);
            assert!(dc.values().all(|&v| v == 1.0), "n={n}: {dc:?}");
        }
    }
}

#[test]
fn star_degree_center_and_leaves() {
    let n = 5;
    let g = star(n);
    let dc = parallel().degree_centrality(&g);
    assert_close(&dc, 0, 1.0);
    for leaf in 1..n {
        assert_close(&dc, leaf, 1.0 / 4.0);
    }
}

#[test]
fn degree_ignores_weights() {
    let g = build_weighted(EdgeKind::Directed, 3, &[(0, 1, 50), (0, 2, 3)]);
    let dc = SequentialEngine::new().degree_centrality(&g);
    assert_close(&dc, 0, 1.0);
    assert_close(&dc, 1, 0.0);
}

#[test]
fn single_node_degree_is_unnormalized() {
    let g = Graph::with_nodes(EdgeKind::Undirected, 1);
    let dc = SequentialEngine::new().degree_centrality(&g);
    assert_eq!(dc.len(), 1);
    assert_close(&dc, 0, 0.0);
}

// ---------------------------------------------------------------------------
// Eigenvector
// ---------------------------------------------------------------------------

#[test]
fn regular_graph_converges_to_uniform() {
    // A 5-cycle is 2-regular and not bipartite.
    for weight in [1, 3] {
        let g = cycle(5, weight);
        let expected = 1.0 / 5.0_f64.sqrt();

        for result in [
            SequentialEngine::new().eigenvector_centrality(&g, 100, 1e-9),
            parallel().eigenvector_centrality(&g, 100, 1e-9),
        ] {
            assert!(result.converged);
            assert_eq!(result.scores.len(), 5);
            for v in result.scores.values() {
                assert!((v - expected).abs() < 1e-9, "weight={weight}: {v}");
            }
        }
    }
}

#[test]
fn regular_graph_is_stable_past_convergence() {
    let g = complete(4);
    let engine = SequentialEngine::new();
    let short = engine.eigenvector_centrality(&g, 5, 1e-9);
    let long = engine.eigenvector_centrality(&g, 500, 1e-9);
    assert_eq!(short.iterations, long.iterations);
    for (node, v) in &short.scores {
        assert!((v - long.scores[node]).abs() < 1e-12);
    }
}

#[test]
fn heavier_edges_pull_score() {
    // Triangle where edge 0-1 is much heavier than the rest.
    let g = build_weighted(EdgeKind::Undirected, 3, &[(0, 1, 10), (1, 2, 1), (0, 2, 1)]);
    let result = SequentialEngine::new().eigenvector_centrality(&g, 1000, 1e-12);
    assert!(result.converged);
    assert!(result.scores[&NodeId(0)] > result.scores[&NodeId(2)]);
    assert!(result.scores[&NodeId(1)] > result.scores[&NodeId(2)]);
}

#[test]
fn non_convergence_is_reported() {
    // A star is bipartite with unequal sides: from a uniform start the
    // iteration flips between (3,1,1,1)/√12 and the uniform vector forever.
    let g = star(4);
    let result = parallel().eigenvector_centrality(&g, 30, 1e-12);
    assert!(!result.converged);
    assert_eq!(result.iterations, 30);
    assert_eq!(result.scores.len(), 4);
}

// ---------------------------------------------------------------------------
// Path cache
// ---------------------------------------------------------------------------

#[test]
fn unchanged_graph_reuses_cached_paths() {
    let provider = CountingProvider::default();
    let mut g = build(EdgeKind::Directed, 3, &[(0, 1), (1, 2)]);
    let mut engine = SequentialEngine::with_provider(provider.clone());

    let first = engine.betweenness_centrality(&g);
    let second = engine.betweenness_centrality(&g);
    assert_eq!(first, second);
    assert_eq!(provider.calls(), 1);
    assert_eq!(engine.cache().refreshes(), 1);

    // Degree and eigenvector never touch the cache.
    let _ = engine.degree_centrality(&g);
    let _ = engine.eigenvector_centrality(&g, 10, 1e-6);
    assert_eq!(provider.calls(), 1);

    g.add_edge(NodeId(0), NodeId(2), Distance::UNIT)
        .expect("valid edge");
    let third = engine.betweenness_centrality(&g);
    assert_eq!(provider.calls(), 2);
    assert_close(&third, 1, 0.0);
}

#[test]
fn parallel_engine_reuses_cached_paths() {
    let provider = CountingProvider::default();
    let g = star(5);
    let mut engine = ParallelEngine::with_provider(&EngineConfig::default(), provider.clone())
        .expect("pool");

    let _ = engine.betweenness_centrality(&g);
    let _ = engine.betweenness_centrality(&g);
    assert_eq!(engine.shortest_paths(&g).len(), 20);
    assert_eq!(provider.calls(), 1);
}

#[test]
fn switching_graphs_refreshes_the_cache() {
    let provider = CountingProvider::default();
    let chain = build(EdgeKind::Directed, 3, &[(0, 1), (1, 2)]);
    let other = build(EdgeKind::Directed, 3, &[(0, 2)]);
    let mut engine = SequentialEngine::with_provider(provider.clone());

    assert_close(&engine.betweenness_centrality(&chain), 1, 0.5);
    assert_close(&engine.betweenness_centrality(&other), 1, 0.0);
    assert_close(&engine.betweenness_centrality(&chain), 1, 0.5);
    assert_eq!(provider.calls(), 3);
}

#[test]
fn custom_provider_paths_are_what_gets_counted() {
    // A hand-picked path set, independent of the graph's edges.
    let provider = |_: &Graph| vec![Path::from(&[0, 1, 2][..]), Path::from(&[3, 1, 2, 0][..])];
    let g = Graph::with_nodes(EdgeKind::Directed, 4);
    let bc = SequentialEngine::with_provider(provider).betweenness_centrality(&g);

    // Node 1 is interior twice, node 2 once; divided by 3 * 2.
    assert_close(&bc, 1, 2.0 / 6.0);
    assert_close(&bc, 2, 1.0 / 6.0);
    assert_close(&bc, 0, 0.0);
}
