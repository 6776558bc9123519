#![forbid(unsafe_code)]
//! graphtric-centrality library.
//!
//! Betweenness, degree and eigenvector centrality over a static weighted
//! graph, computed by a [`SequentialEngine`] or a [`ParallelEngine`] that
//! produce the same answers.
//!
//! # Conventions
//!
//! - **Errors**: Metric calls never fail. Graph mutation returns
//!   [`GraphError`]; loaders and pool construction use `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod paths;
pub mod pool;

pub use config::{EigenvectorConfig, EngineConfig, load_engine_config, resolve_engine_config};
pub use engine::{CentralityEngine, ParallelEngine, PathCache, SequentialEngine};
pub use error::GraphError;
pub use graph::{AdjacencyMatrix, Distance, EdgeKind, Graph, GraphSpec, NodeId};
pub use metrics::Centrality;
pub use metrics::eigenvector::EigenvectorResult;
pub use paths::{AllShortestPaths, Path, PathProvider, ShortestPaths};
