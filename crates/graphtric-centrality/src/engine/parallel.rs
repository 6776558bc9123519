//! Worker-pool engine.
//!
//! Same contract as [`SequentialEngine`](super::SequentialEngine); the
//! kernels fan out over a fixed-size pool owned by the engine. The pool is
//! built once, at construction, and reused by every call.

use anyhow::Result;
use tracing::{debug, instrument};

use super::CentralityEngine;
use super::cache::PathCache;
use crate::config::EngineConfig;
use crate::graph::Graph;
use crate::metrics::eigenvector::{EigenvectorResult, eigenvector_parallel};
use crate::metrics::{Centrality, betweenness::betweenness_parallel, degree::degree_parallel};
use crate::paths::{Path, PathProvider, ShortestPaths};
use crate::pool::WorkerPool;

/// Computes every metric on a bounded worker pool.
#[derive(Debug)]
pub struct ParallelEngine<P = ShortestPaths> {
    cache: PathCache<P>,
    pool: WorkerPool,
}

impl ParallelEngine {
    /// An engine using [`ShortestPaths`] and `config.worker_threads`
    /// workers.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot be built.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        Self::with_provider(config, ShortestPaths)
    }
}

impl<P: PathProvider> ParallelEngine<P> {
    /// An engine filling its path cache from `provider`.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot be built.
    pub fn with_provider(config: &EngineConfig, provider: P) -> Result<Self> {
        let pool = WorkerPool::new(config.worker_threads)?;
        debug!(threads = pool.threads(), "parallel centrality engine ready");

        Ok(Self {
            cache: PathCache::new(provider),
            pool,
        })
    }

    /// Number of worker threads in the pool.
    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool.threads()
    }

    /// The path cache, for inspecting refresh counts.
    #[must_use]
    pub const fn cache(&self) -> &PathCache<P> {
        &self.cache
    }
}

impl<P: PathProvider> CentralityEngine for ParallelEngine<P> {
    #[instrument(skip_all, fields(nodes = graph.node_count()))]
    fn degree_centrality(&self, graph: &Graph) -> Centrality {
        degree_parallel(&self.pool, &graph.to_matrix())
    }

    #[instrument(skip_all, fields(nodes = graph.node_count()))]
    fn betweenness_centrality(&mut self, graph: &Graph) -> Centrality {
        let paths = self.cache.paths(graph);
        betweenness_parallel(&self.pool, paths, graph.node_count())
    }

    #[instrument(skip(self, graph), fields(nodes = graph.node_count()))]
    fn eigenvector_centrality(
        &self,
        graph: &Graph,
        max_iter: usize,
        tolerance: f64,
    ) -> EigenvectorResult {
        eigenvector_parallel(&self.pool, &graph.to_matrix(), max_iter, tolerance)
    }

    fn shortest_paths(&mut self, graph: &Graph) -> &[Path] {
        self.cache.paths(graph)
    }
}
