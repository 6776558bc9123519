//! Shortest paths feeding betweenness centrality.
//!
//! # Overview
//!
//! Betweenness counts, for every cached [`Path`], each interior node once.
//! The cache is filled by a [`PathProvider`]. Two providers ship here:
//!
//! - [`ShortestPaths`] (the engines' default) yields **one** canonical
//!   shortest path per ordered pair of distinct, connected nodes. A node can
//!   then be interior to at most `(n-1)(n-2)` paths, which keeps normalized
//!   betweenness inside `[0, 1]`.
//! - [`AllShortestPaths`] enumerates **every distinct** shortest path per
//!   pair. Scores can exceed `1.0` when a node lies on several equal-cost
//!   routes of the same pair.
//!
//! # Algorithm
//!
//! For each source `s`:
//!
//! 1. Run Dijkstra from `s`, keeping for every node `w` the list of
//!    predecessors `v` with `dist[v] + weight(v, w) == dist[w]`. Weights are
//!    at least 1, so the predecessor relation is acyclic.
//! 2. For each reachable target `t != s`, walk the predecessor lists back
//!    from `t` to `s`. [`AllShortestPaths`] emits one path per distinct
//!    walk; [`ShortestPaths`] always steps to the smallest predecessor id.
//!
//! The number of shortest paths can grow exponentially on lattice-like
//! graphs; the enumeration is exact, not sampled.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, instrument};

use crate::graph::{Graph, NodeId};

// ---------------------------------------------------------------------------
// Path
// ---------------------------------------------------------------------------

/// One shortest route `[source, …, target]`, at least two nodes long.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(Vec<NodeId>);

impl Path {
    /// Wrap an ordered node sequence.
    ///
    /// # Panics
    ///
    /// Panics if `nodes` has fewer than two elements.
    #[must_use]
    pub fn new(nodes: Vec<NodeId>) -> Self {
        assert!(nodes.len() >= 2, "a path needs a source and a target");
        Self(nodes)
    }

    /// All nodes in order, endpoints included.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    #[must_use]
    pub fn source(&self) -> NodeId {
        self.0[0]
    }

    #[must_use]
    pub fn target(&self) -> NodeId {
        self.0[self.0.len() - 1]
    }

    /// Nodes strictly between source and target.
    #[must_use]
    pub fn interior(&self) -> &[NodeId] {
        &self.0[1..self.0.len() - 1]
    }
}

impl From<&[usize]> for Path {
    fn from(nodes: &[usize]) -> Self {
        Self::new(nodes.iter().copied().map(NodeId).collect())
    }
}

// ---------------------------------------------------------------------------
// PathProvider
// ---------------------------------------------------------------------------

/// Produces the path set betweenness centrality enumerates.
///
/// Engines call this lazily, once per graph version.
pub trait PathProvider {
    fn compute_paths(&self, graph: &Graph) -> Vec<Path>;
}

impl<F> PathProvider for F
where
    F: Fn(&Graph) -> Vec<Path>,
{
    fn compute_paths(&self, graph: &Graph) -> Vec<Path> {
        self(graph)
    }
}

/// One shortest path per ordered pair of distinct, connected nodes.
///
/// Ties between equal-cost routes are broken by stepping back from the
/// target to the smallest predecessor id at every hop. Output is grouped by
/// source, then target, both ascending.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPaths;

impl PathProvider for ShortestPaths {
    #[instrument(skip(self, graph), fields(nodes = graph.node_count()))]
    fn compute_paths(&self, graph: &Graph) -> Vec<Path> {
        let mut paths = Vec::new();

        for source in graph.nodes() {
            let predecessors = shortest_path_predecessors(graph, source);

            for target in graph.nodes() {
                if target == source || predecessors[target.0].is_empty() {
                    continue;
                }

                let mut reversed = vec![target];
                let mut head = target;
                while head != source {
                    head = predecessors[head.0][0];
                    reversed.push(head);
                }
                reversed.reverse();
                paths.push(Path(reversed));
            }
        }

        debug!(paths = paths.len(), "selected shortest paths");
        paths
    }
}

/// Every distinct shortest path between every ordered pair of distinct,
/// connected nodes.
///
/// Paths come out grouped by source, then target (both ascending), and
/// sorted within a pair, so the output is deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllShortestPaths;

impl PathProvider for AllShortestPaths {
    #[instrument(skip(self, graph), fields(nodes = graph.node_count()))]
    fn compute_paths(&self, graph: &Graph) -> Vec<Path> {
        let mut paths = Vec::new();

        for source in graph.nodes() {
            let predecessors = shortest_path_predecessors(graph, source);

            for target in graph.nodes() {
                // Unreachable targets have no predecessors.
                if target == source || predecessors[target.0].is_empty() {
                    continue;
                }

                let first = paths.len();
                walk_predecessors(&predecessors, source, target, &mut vec![target], &mut paths);
                paths[first..].sort_unstable();
            }
        }

        debug!(paths = paths.len(), "enumerated shortest paths");
        paths
    }
}

/// Dijkstra from `source`, returning for each node the sorted list of its
/// predecessors on shortest paths from `source`.
fn shortest_path_predecessors(graph: &Graph, source: NodeId) -> Vec<Vec<NodeId>> {
    let n = graph.node_count();

    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut predecessors: Vec<Vec<NodeId>> = vec![Vec::new(); n];

    let mut heap = BinaryHeap::new();
    dist[source.0] = Some(0);
    heap.push(Reverse((0_u64, source)));

    while let Some(Reverse((d, v))) = heap.pop() {
        if settled[v.0] {
            continue;
        }
        settled[v.0] = true;

        for (w, weight) in graph.neighbors(v) {
            let candidate = d + u64::from(weight.0);
            match dist[w.0] {
                Some(current) if candidate > current => {}
                Some(current) if candidate == current => predecessors[w.0].push(v),
                _ => {
                    dist[w.0] = Some(candidate);
                    predecessors[w.0].clear();
                    predecessors[w.0].push(v);
                    heap.push(Reverse((candidate, w)));
                }
            }
        }
    }

    for list in &mut predecessors {
        list.sort_unstable();
    }
    predecessors
}

/// Depth-first walk from `head` back to `source`. `reversed` holds the
/// path built so far, target first.
fn walk_predecessors(
    predecessors: &[Vec<NodeId>],
    source: NodeId,
    head: NodeId,
    reversed: &mut Vec<NodeId>,
    out: &mut Vec<Path>,
) {
    if head == source {
        out.push(Path(reversed.iter().rev().copied().collect()));
        return;
    }

    for &prev in &predecessors[head.0] {
        reversed.push(prev);
        walk_predecessors(predecessors, source, prev, reversed, out);
        reversed.pop();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
