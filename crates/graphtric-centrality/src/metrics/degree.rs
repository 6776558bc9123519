//! Degree centrality from the adjacency matrix.
//!
//! A node's degree is the number of non-[`Distance::INF`] cells in its
//! matrix row (its out-degree; on undirected graphs, its degree), divided
//! by `n-1`. For `n <= 1` the raw count is returned.

use tracing::instrument;

use super::{Centrality, into_centrality};
use crate::graph::{AdjacencyMatrix, Distance, NodeId};
use crate::pool::WorkerPool;

/// Single-threaded degree centrality, one matrix row at a time.
#[must_use]
#[instrument(skip(matrix), fields(nodes = matrix.len()))]
pub fn degree_sequential(matrix: &AdjacencyMatrix) -> Centrality {
    #[allow(clippy::cast_precision_loss)]
    let mut degrees: Vec<f64> = matrix.rows().map(|row| row_degree(row) as f64).collect();

    normalize(&mut degrees);
    into_centrality(degrees)
}

/// Degree centrality with one pool task per row. Each row's count is
/// produced exactly once, so the consumer assigns instead of adding.
#[must_use]
#[allow(clippy::cast_precision_loss)]
#[instrument(skip(pool, matrix), fields(nodes = matrix.len(), threads = pool.threads()))]
pub fn degree_parallel(pool: &WorkerPool, matrix: &AdjacencyMatrix) -> Centrality {
    let rows: Vec<&[Distance]> = matrix.rows().collect();
    let mut degrees = vec![0.0; rows.len()];

    pool.fan_in(
        &rows,
        rows.len(),
        |i, row, emit| emit.emit((NodeId(i), row_degree(row))),
        |(node, count)| degrees[node.0] = count as f64,
    );

    normalize(&mut degrees);
    into_centrality(degrees)
}

fn row_degree(row: &[Distance]) -> usize {
    row.iter().filter(|w| !w.is_inf()).count()
}

#[allow(clippy::cast_precision_loss)]
fn normalize(degrees: &mut [f64]) {
    let n = degrees.len();
    if n > 1 {
        let max_degree = (n - 1) as f64;
        for degree in degrees.iter_mut() {
            *degree /= max_degree;
        }
    }
}
