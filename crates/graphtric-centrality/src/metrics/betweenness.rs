//! Betweenness centrality from a cached shortest-path set.
//!
//! # Overview
//!
//! A node's betweenness is the number of cached shortest paths on which it
//! appears as an **interior** vertex (source and target excluded), divided
//! by `(n-1)(n-2)`, the number of ordered pairs of other nodes. For `n <= 2`
//! no node can be interior, so the raw (all-zero) counts are returned.
//!
//! # Parallel variant
//!
//! One unit of work per path. Each unit emits one increment per interior
//! node; a single consumer adds them up. Integer-valued sums are exact in
//! `f64`, so both variants produce identical maps.
//!
//! Paths naming nodes outside `0..n` (possible only with a custom
//! [`crate::paths::PathProvider`]) are ignored by both variants.

use tracing::instrument;

use super::{Centrality, into_centrality};
use crate::graph::NodeId;
use crate::paths::Path;
use crate::pool::WorkerPool;

/// Single-threaded betweenness over `paths` for a graph of `node_count`
/// nodes.
#[must_use]
#[instrument(skip(paths), fields(path_count = paths.len()))]
pub fn betweenness_sequential(paths: &[Path], node_count: usize) -> Centrality {
    let mut counts = vec![0.0; node_count];

    for path in paths {
        for node in path.interior() {
            increment(&mut counts, *node);
        }
    }

    normalize(&mut counts);
    into_centrality(counts)
}

/// Betweenness with one pool task per path, merged through a channel sized
/// to `node_count`.
#[must_use]
#[instrument(skip(pool, paths), fields(path_count = paths.len(), threads = pool.threads()))]
pub fn betweenness_parallel(pool: &WorkerPool, paths: &[Path], node_count: usize) -> Centrality {
    let mut counts = vec![0.0; node_count];

    pool.fan_in(
        paths,
        node_count,
        |_, path, emit| {
            for &node in path.interior() {
                emit.emit(node);
            }
        },
        |node| increment(&mut counts, node),
    );

    normalize(&mut counts);
    into_centrality(counts)
}

fn increment(counts: &mut [f64], node: NodeId) {
    if let Some(count) = counts.get_mut(node.0) {
        *count += 1.0;
    }
}

#[allow(clippy::cast_precision_loss)]
fn normalize(counts: &mut [f64]) {
    let n = counts.len();
    if n > 2 {
        let pairs = ((n - 1) * (n - 2)) as f64;
        for count in counts.iter_mut() {
            *count /= pairs;
        }
    }
}
