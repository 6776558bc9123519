//! Eigenvector centrality via power iteration.
//!
//! # Overview
//!
//! Eigenvector centrality scores a node by the scores of the nodes it points
//! at, weighted by edge weight. It is the dominant eigenvector of the
//! weighted adjacency matrix.
//!
//! # Algorithm
//!
//! 1. Initialize every score to `1/n`.
//! 2. `next[i] = Σ_j weight(i, j) * score[j]` over cells that are not
//!    [`Distance::INF`]. The sentinel is skipped, never read as a weight.
//! 3. Normalize `next` to unit L2 norm. A zero vector means the walk has
//!    drained away (no edges, or every path ends in a sink); it becomes the
//!    result and the iteration stops without converging.
//! 4. `diff = Σ |next[i] - score[i]|`. `next` becomes the current vector;
//!    if `diff < tolerance` the iteration has converged and stops.
//! 5. Repeat from 2, at most `max_iter` times.
//!
//! Convergence is not guaranteed (bipartite graphs oscillate, for
//! instance). When `max_iter` runs out the last normalized vector is
//! returned with [`EigenvectorResult::converged`] set to `false`.
//!
//! # Parallel variant
//!
//! Step 2 runs on the pool. `par_iter_mut` hands each task exclusive
//! ownership of one output slot while `score` and the matrix are shared
//! read-only, so no locking is involved. The parallel iterator returning is
//! the barrier before step 3; steps 3 and 4 are sequential. Every slot sums
//! its row in the same order as the sequential kernel, so the two variants
//! agree to the bit.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use super::{Centrality, into_centrality};
use crate::graph::{AdjacencyMatrix, Distance};
use crate::pool::WorkerPool;

/// Result of eigenvector centrality computation.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenvectorResult {
    /// Eigenvector centrality scores: node → score.
    pub scores: Centrality,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether the L1 change dropped below the tolerance within `max_iter`.
    ///
    /// Always `false` when the iterate collapsed to the zero vector, as it
    /// does on edgeless graphs and DAGs; the scores are then all `0.0`.
    pub converged: bool,
}

/// Single-threaded power iteration.
#[must_use]
#[instrument(skip(matrix), fields(nodes = matrix.len()))]
pub fn eigenvector_sequential(
    matrix: &AdjacencyMatrix,
    max_iter: usize,
    tolerance: f64,
) -> EigenvectorResult {
    power_iteration(matrix.len(), max_iter, tolerance, |score, next| {
        for (i, slot) in next.iter_mut().enumerate() {
            *slot = weighted_row_sum(matrix.row(i), score);
        }
    })
}

/// Power iteration with the matrix-vector product spread over the pool.
#[must_use]
#[instrument(skip(pool, matrix), fields(nodes = matrix.len(), threads = pool.threads()))]
pub fn eigenvector_parallel(
    pool: &WorkerPool,
    matrix: &AdjacencyMatrix,
    max_iter: usize,
    tolerance: f64,
) -> EigenvectorResult {
    power_iteration(matrix.len(), max_iter, tolerance, |score, next| {
        pool.install(|| {
            next.par_iter_mut()
                .enumerate()
                .for_each(|(i, slot)| *slot = weighted_row_sum(matrix.row(i), score));
        });
    })
}

/// `Σ_j row[j] * score[j]`, skipping the sentinel. An all-`INF` row sums
/// to `+0.0`.
fn weighted_row_sum(row: &[Distance], score: &[f64]) -> f64 {
    row.iter()
        .zip(score)
        .filter(|(weight, _)| !weight.is_inf())
        .fold(0.0, |acc, (weight, s)| weight.as_f64().mul_add(*s, acc))
}

/// Drive the iteration. `multiply(score, next)` must overwrite every slot
/// of `next` with the product of the matrix and `score`.
#[allow(clippy::cast_precision_loss)]
fn power_iteration<F>(n: usize, max_iter: usize, tolerance: f64, mut multiply: F) -> EigenvectorResult
where
    F: FnMut(&[f64], &mut [f64]),
{
    if n == 0 {
        return EigenvectorResult {
            scores: HashMap::new(),
            iterations: 0,
            converged: true,
        };
    }

    let mut score = vec![1.0 / n as f64; n];
    let mut next = vec![0.0; n];
    let mut iterations = 0;
    let mut converged = false;

    for iter in 0..max_iter {
        iterations = iter + 1;

        multiply(&score, &mut next);

        let norm = next.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm <= 0.0 {
            std::mem::swap(&mut score, &mut next);
            debug!(iteration = iterations, "power iteration collapsed to zero");
            break;
        }
        for x in &mut next {
            *x /= norm;
        }

        let diff: f64 = score.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
        std::mem::swap(&mut score, &mut next);
        trace!(iteration = iterations, diff, "power iteration step");

        if diff < tolerance {
            converged = true;
            break;
        }
    }

    if converged {
        debug!(iterations, "eigenvector centrality converged");
    } else {
        debug!(max_iter, "eigenvector centrality did not converge");
    }

    EigenvectorResult {
        scores: into_centrality(score),
        iterations,
        converged,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
