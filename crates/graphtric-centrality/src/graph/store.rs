//! The graph snapshot consumed by the centrality engines.
//!
//! # Versioning
//!
//! Every structural mutation bumps [`Graph::version`]. Engines record the
//! `(id, version)` pair their cached shortest paths were computed from and
//! recompute exactly when it differs, so there is no flag to reset and no
//! ordering question about who clears it.
//!
//! Each graph (including each clone) gets a process-unique [`GraphId`], so a
//! cache built for one graph is never mistaken for another graph that
//! happens to sit at the same version.

use std::sync::atomic::{AtomicU64, Ordering};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use super::matrix::{AdjacencyMatrix, Distance, NodeId};
use crate::error::GraphError;

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`Graph`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphId(u64);

impl GraphId {
    fn fresh() -> Self {
        Self(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Whether an edge `a - b` is one-way or two-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    #[default]
    Directed,
    /// Each edge is stored in both directions, so the matrix is symmetric.
    Undirected,
}

/// A weighted graph over nodes `0..node_count`.
///
/// Internally a petgraph [`DiGraph`]; undirected edges are stored as two
/// mirrored arcs.
#[derive(Debug)]
pub struct Graph {
    id: GraphId,
    kind: EdgeKind,
    inner: DiGraph<(), Distance>,
    version: u64,
}

impl Clone for Graph {
    fn clone(&self) -> Self {
        Self {
            id: GraphId::fresh(),
            kind: self.kind,
            inner: self.inner.clone(),
            version: self.version,
        }
    }
}

impl Graph {
    /// An empty graph.
    #[must_use]
    pub fn new(kind: EdgeKind) -> Self {
        Self {
            id: GraphId::fresh(),
            kind,
            inner: DiGraph::new(),
            version: 0,
        }
    }

    /// A graph with `n` isolated nodes `0..n`.
    #[must_use]
    pub fn with_nodes(kind: EdgeKind, n: usize) -> Self {
        let mut graph = Self::new(kind);
        for _ in 0..n {
            graph.add_node();
        }
        graph
    }

    #[must_use]
    pub const fn id(&self) -> GraphId {
        self.id
    }

    #[must_use]
    pub const fn edge_kind(&self) -> EdgeKind {
        self.kind
    }

    /// Monotonic structural version. Starts at 0, bumped by every mutation.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of edges; an undirected edge counts once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        match self.kind {
            EdgeKind::Directed => self.inner.edge_count(),
            EdgeKind::Undirected => self.inner.edge_count() / 2,
        }
    }

    /// All node identifiers in ascending order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> {
        (0..self.node_count()).map(NodeId)
    }

    /// Append a new isolated node.
    pub fn add_node(&mut self) -> NodeId {
        let idx = self.inner.add_node(());
        self.version += 1;
        NodeId(idx.index())
    }

    /// Insert the edge `from -> to`, or update its weight if it exists.
    ///
    /// Undirected graphs also set `to -> from`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] if either endpoint is out of range, the edge is
    /// a self-loop, or `weight` is zero or [`Distance::INF`].
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Distance) -> Result<(), GraphError> {
        self.check_node(from)?;
        self.check_node(to)?;
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }
        if weight.0 == 0 || weight.is_inf() {
            return Err(GraphError::InvalidWeight { from, to, weight });
        }

        let (a, b) = (NodeIndex::new(from.0), NodeIndex::new(to.0));
        self.inner.update_edge(a, b, weight);
        if self.kind == EdgeKind::Undirected {
            self.inner.update_edge(b, a, weight);
        }
        self.version += 1;
        Ok(())
    }

    /// Remove the edge `from -> to` (and its mirror on undirected graphs).
    ///
    /// Returns whether an edge was removed. The version only changes when
    /// something was removed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeOutOfRange`] for unknown endpoints.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Result<bool, GraphError> {
        self.check_node(from)?;
        self.check_node(to)?;

        let (a, b) = (NodeIndex::new(from.0), NodeIndex::new(to.0));
        let mut removed = self.remove_arc(a, b);
        if self.kind == EdgeKind::Undirected {
            removed |= self.remove_arc(b, a);
        }
        if removed {
            self.version += 1;
        }
        Ok(removed)
    }

    /// Weight of the edge `from -> to`, if present.
    #[must_use]
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<Distance> {
        self.inner
            .find_edge(NodeIndex::new(from.0), NodeIndex::new(to.0))
            .and_then(|e| self.inner.edge_weight(e))
            .copied()
    }

    /// Outgoing neighbors of `node` with their edge weights, in no
    /// particular order. Unknown nodes have no neighbors.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Distance)> + '_ {
        self.inner
            .edges(NodeIndex::new(node.0))
            .map(|e| (NodeId(e.target().index()), *e.weight()))
    }

    /// Materialize the dense weight matrix. Cells without an edge (including
    /// the diagonal) hold [`Distance::INF`].
    #[must_use]
    pub fn to_matrix(&self) -> AdjacencyMatrix {
        let mut matrix = AdjacencyMatrix::unconnected(self.node_count());
        for e in self.inner.edge_references() {
            matrix.set(e.source().index(), e.target().index(), *e.weight());
        }
        matrix
    }

    fn check_node(&self, node: NodeId) -> Result<(), GraphError> {
        let node_count = self.node_count();
        if node.0 < node_count {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange { node, node_count })
        }
    }

    fn remove_arc(&mut self, a: NodeIndex, b: NodeIndex) -> bool {
        match self.inner.find_edge(a, b) {
            Some(e) => self.inner.remove_edge(e).is_some(),
            None => false,
        }
    }
}
