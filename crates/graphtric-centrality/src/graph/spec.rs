//! Serializable graph descriptions.
//!
//! A [`GraphSpec`] is the on-disk form of a [`Graph`]: a node count, the edge
//! kind, and an edge list. Weights default to 1.
//!
//! ```json
//! {
//!   "kind": "undirected",
//!   "nodes": 3,
//!   "edges": [
//!     { "from": 0, "to": 1 },
//!     { "from": 1, "to": 2, "weight": 4 }
//!   ]
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::matrix::{Distance, NodeId};
use super::store::{EdgeKind, Graph};

/// One edge of a [`GraphSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default = "default_weight")]
    pub weight: Distance,
}

/// Serializable description of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec {
    #[serde(default)]
    pub kind: EdgeKind,
    pub nodes: usize,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl Graph {
    /// Build a graph from its description.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending edge if any edge is invalid.
    pub fn from_spec(spec: &GraphSpec) -> Result<Self> {
        let mut graph = Self::with_nodes(spec.kind, spec.nodes);
        for (i, edge) in spec.edges.iter().enumerate() {
            graph
                .add_edge(edge.from, edge.to, edge.weight)
                .with_context(|| format!("edge #{i} ({} -> {})", edge.from, edge.to))?;
        }
        Ok(graph)
    }
}

/// Read and parse a JSON [`GraphSpec`] file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid spec.
pub fn load_graph_spec(path: &Path) -> Result<GraphSpec> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str::<GraphSpec>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

const fn default_weight() -> Distance {
    Distance::UNIT
}
