//! Sequential and parallel centrality engines.
//!
//! # Overview
//!
//! Both engines implement [`CentralityEngine`] and differ only in how the
//! metric kernels run:
//!
//! - [`SequentialEngine`]: every kernel on the calling thread.
//! - [`ParallelEngine`]: kernels fanned out over a fixed-size
//!   [`WorkerPool`](crate::pool::WorkerPool).
//!
//! For the same graph they return identical betweenness and degree maps and
//! eigenvector maps equal within `1e-9`.
//!
//! # Caching
//!
//! Betweenness needs the shortest-path set, which is expensive. Each engine
//! owns a [`PathCache`] that recomputes it only when the graph's identity or
//! version differs from the one it was computed for. Degree and eigenvector
//! work straight off the adjacency matrix and never consult the cache.
//!
//! ```rust,ignore
//! use graphtric_centrality::{CentralityEngine, EngineConfig, ParallelEngine, SequentialEngine};
//!
//! let mut seq = SequentialEngine::new();
//! let mut par = ParallelEngine::new(&EngineConfig::default())?;
//!
//! assert_eq!(seq.betweenness_centrality(&graph), par.betweenness_centrality(&graph));
//! ```

pub mod cache;
pub mod parallel;
pub mod sequential;

pub use cache::PathCache;
pub use parallel::ParallelEngine;
pub use sequential::SequentialEngine;

use crate::graph::Graph;
use crate::metrics::Centrality;
use crate::metrics::eigenvector::EigenvectorResult;
use crate::paths::Path;

/// The three centrality metrics, one full answer per call.
///
/// None of these fail: degenerate graphs produce degenerate (empty, zero or
/// unnormalized) maps.
pub trait CentralityEngine {
    /// Normalized count of direct connections per node.
    fn degree_centrality(&self, graph: &Graph) -> Centrality;

    /// Normalized count of cached shortest paths passing through each node.
    /// Refreshes the path cache first if it is stale.
    fn betweenness_centrality(&mut self, graph: &Graph) -> Centrality;

    /// Power-iteration eigenvector centrality.
    fn eigenvector_centrality(
        &self,
        graph: &Graph,
        max_iter: usize,
        tolerance: f64,
    ) -> EigenvectorResult;

    /// The cached shortest paths for `graph`, refreshed if stale.
    fn shortest_paths(&mut self, graph: &Graph) -> &[Path];
}
