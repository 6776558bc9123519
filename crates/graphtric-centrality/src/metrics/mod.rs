//! Centrality kernels shared by both engines.
//!
//! # Overview
//!
//! Each metric has a sequential kernel and a pool-driven kernel that must
//! agree with it:
//!
//! - **Betweenness** (`betweenness`): how many cached shortest paths pass
//!   *through* a node, normalized by `(n-1)(n-2)`.
//! - **Degree** (`degree`): non-sentinel entries in a node's matrix row,
//!   normalized by `n-1`.
//! - **Eigenvector** (`eigenvector`): dominant eigenvector of the weighted
//!   adjacency matrix by power iteration.
//!
//! # Usage
//!
//! Engines are the public entry points; the kernels take already-resolved
//! inputs (a path slice or an [`AdjacencyMatrix`]) and know nothing about
//! caching.
//!
//! ```rust,ignore
//! use graphtric_centrality::metrics::{betweenness, degree, eigenvector};
//!
//! let bc = betweenness::betweenness_sequential(&paths, n);
//! let dc = degree::degree_sequential(&matrix);
//! let ev = eigenvector::eigenvector_sequential(&matrix, 100, 1e-6);
//! ```
//!
//! [`AdjacencyMatrix`]: crate::graph::AdjacencyMatrix

use std::collections::HashMap;

use crate::graph::NodeId;

pub mod betweenness;
pub mod degree;
pub mod eigenvector;

/// Score per node. Always holds exactly one entry per node of the graph.
pub type Centrality = HashMap<NodeId, f64>;

/// Key a dense score vector by node id.
pub(crate) fn into_centrality(scores: Vec<f64>) -> Centrality {
    scores
        .into_iter()
        .enumerate()
        .map(|(i, score)| (NodeId(i), score))
        .collect()
}
