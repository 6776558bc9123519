//! Single-threaded engine.

use tracing::instrument;

use super::CentralityEngine;
use super::cache::PathCache;
use crate::graph::Graph;
use crate::metrics::eigenvector::{EigenvectorResult, eigenvector_sequential};
use crate::metrics::{Centrality, betweenness::betweenness_sequential, degree::degree_sequential};
use crate::paths::{Path, PathProvider, ShortestPaths};

/// Computes every metric on the calling thread.
#[derive(Debug)]
pub struct SequentialEngine<P = ShortestPaths> {
    cache: PathCache<P>,
}

impl SequentialEngine {
    /// An engine using [`ShortestPaths`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_provider(ShortestPaths)
    }
}

impl Default for SequentialEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PathProvider> SequentialEngine<P> {
    /// An engine filling its path cache from `provider`.
    pub const fn with_provider(provider: P) -> Self {
        Self {
            cache: PathCache::new(provider),
        }
    }

    /// The path cache, for inspecting refresh counts.
    #[must_use]
    pub const fn cache(&self) -> &PathCache<P> {
        &self.cache
    }
}

impl<P: PathProvider> CentralityEngine for SequentialEngine<P> {
    #[instrument(skip_all, fields(nodes = graph.node_count()))]
    fn degree_centrality(&self, graph: &Graph) -> Centrality {
        degree_sequential(&graph.to_matrix())
    }

    #[instrument(skip_all, fields(nodes = graph.node_count()))]
    fn betweenness_centrality(&mut self, graph: &Graph) -> Centrality {
        let paths = self.cache.paths(graph);
        betweenness_sequential(paths, graph.node_count())
    }

    #[instrument(skip(self, graph), fields(nodes = graph.node_count()))]
    fn eigenvector_centrality(
        &self,
        graph: &Graph,
        max_iter: usize,
        tolerance: f64,
    ) -> EigenvectorResult {
        eigenvector_sequential(&graph.to_matrix(), max_iter, tolerance)
    }

    fn shortest_paths(&mut self, graph: &Graph) -> &[Path] {
        self.cache.paths(graph)
    }
}
