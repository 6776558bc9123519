//! Lazily refreshed shortest-path cache.
//!
//! The cache records the `(GraphId, version)` its paths were computed from.
//! A lookup against a graph with a different key recomputes the paths in
//! place; a lookup with the same key returns the cached slice without
//! touching the provider.

use tracing::debug;

use crate::graph::{Graph, GraphId};
use crate::paths::{Path, PathProvider};

#[derive(Debug)]
pub struct PathCache<P> {
    provider: P,
    paths: Vec<Path>,
    key: Option<(GraphId, u64)>,
    refreshes: u64,
}

impl<P: PathProvider> PathCache<P> {
    pub const fn new(provider: P) -> Self {
        Self {
            provider,
            paths: Vec::new(),
            key: None,
            refreshes: 0,
        }
    }

    /// Whether the cached paths were computed from `graph` at its current
    /// version.
    #[must_use]
    pub fn is_fresh(&self, graph: &Graph) -> bool {
        self.key == Some((graph.id(), graph.version()))
    }

    /// The paths for `graph`, recomputing them first if stale.
    pub fn paths(&mut self, graph: &Graph) -> &[Path] {
        if !self.is_fresh(graph) {
            self.refresh(graph);
        }
        &self.paths
    }

    /// How many times the provider has been invoked.
    #[must_use]
    pub const fn refreshes(&self) -> u64 {
        self.refreshes
    }

    fn refresh(&mut self, graph: &Graph) {
        debug!(
            graph_version = graph.version(),
            cached_version = self.key.map(|(_, v)| v),
            "refreshing shortest-path cache"
        );
        self.paths = self.provider.compute_paths(graph);
        self.key = Some((graph.id(), graph.version()));
        self.refreshes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Distance, EdgeKind, NodeId};
    use crate::paths::AllShortestPaths;

    #[test]
    fn reuses_paths_until_the_graph_changes() {
        let mut g = Graph::with_nodes(EdgeKind::Directed, 3);
        g.add_edge(NodeId(0), NodeId(1), Distance::UNIT).expect("valid edge");

        let mut cache = PathCache::new(AllShortestPaths);
        assert!(!cache.is_fresh(&g));

        assert_eq!(cache.paths(&g).len(), 1);
        assert_eq!(cache.paths(&g).len(), 1);
        assert_eq!(cache.refreshes(), 1);
        assert!(cache.is_fresh(&g));

        g.add_edge(NodeId(1), NodeId(2), Distance::UNIT).expect("valid edge");
        assert!(!cache.is_fresh(&g));
        assert_eq!(cache.paths(&g).len(), 3);
        assert_eq!(cache.refreshes(), 2);
    }

    #[test]
    fn a_different_graph_at_the_same_version_is_stale() {
        let g = Graph::with_nodes(EdgeKind::Directed, 2);
        let h = Graph::with_nodes(EdgeKind::Directed, 2);
        assert_eq!(g.version(), h.version());

        let mut cache = PathCache::new(AllShortestPaths);
        let _ = cache.paths(&g);
        assert!(!cache.is_fresh(&h));
        let _ = cache.paths(&h);
        assert_eq!(cache.refreshes(), 2);
    }
}
