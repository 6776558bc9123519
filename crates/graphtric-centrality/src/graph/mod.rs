//! Graph snapshot consumed by the centrality engines.
//!
//! # Overview
//!
//! A [`Graph`] is a weighted graph over dense node identifiers `0..n`. The
//! engines only need three things from it:
//!
//! - [`Graph::node_count`]: the valid [`NodeId`] range,
//! - [`Graph::id`] and [`Graph::version`]: the cache key deciding whether
//!   cached shortest paths are still valid,
//! - [`Graph::to_matrix`]: the dense [`AdjacencyMatrix`] with
//!   [`Distance::INF`] marking "no edge".
//!
//! ## Pipeline
//!
//! ```text
//! GraphSpec (JSON)
//!        ↓  Graph::from_spec()
//! Graph (petgraph DiGraph + version)
//!        ↓  Graph::to_matrix()            ↓  PathProvider::compute_paths()
//! AdjacencyMatrix                         Vec<Path>
//!        ↓                                ↓
//!    degree / eigenvector             betweenness
//! ```

pub mod matrix;
pub mod spec;
pub mod store;

pub use matrix::{AdjacencyMatrix, Distance, NodeId};
pub use spec::{EdgeSpec, GraphSpec, load_graph_spec};
pub use store::{EdgeKind, Graph, GraphId};
