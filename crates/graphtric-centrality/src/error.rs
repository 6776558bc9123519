//! Typed errors for graph construction.
//!
//! Centrality computations themselves never fail; only mutating a [`Graph`]
//! with an invalid edge does. Loaders and the engine constructors use
//! `anyhow::Result` instead.
//!
//! [`Graph`]: crate::graph::Graph

use crate::graph::{Distance, NodeId};

/// Errors raised while mutating a [`crate::graph::Graph`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge endpoint does not name a node of the graph.
    #[error("node {node} is out of range (graph has {node_count} nodes)")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    /// Self-loops would put a weight on the matrix diagonal.
    #[error("self-loop on node {0} is not allowed")]
    SelfLoop(NodeId),

    /// Weights must be finite and at least 1.
    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        from: NodeId,
        to: NodeId,
        weight: Distance,
    },
}
