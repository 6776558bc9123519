//! Node identifiers, edge weights, and the dense adjacency matrix.
//!
//! # Sentinel
//!
//! The matrix is dense: every `(i, j)` cell holds a [`Distance`]. Cells with
//! no direct edge hold [`Distance::INF`]. The sentinel is never a weight; all
//! numeric aggregation over the matrix must skip it rather than treat it as
//! zero.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Index of a node in `[0, node_count)`.
///
/// Stable for the lifetime of a [`crate::graph::Graph`]: nodes are appended
/// and never removed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Distance
// ---------------------------------------------------------------------------

/// Weight of a direct edge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Distance(pub u32);

impl Distance {
    /// "No direct edge".
    pub const INF: Self = Self(u32::MAX);

    /// Weight used for unweighted graphs.
    pub const UNIT: Self = Self(1);

    /// Whether this is the "no edge" sentinel.
    #[must_use]
    pub const fn is_inf(self) -> bool {
        self.0 == u32::MAX
    }

    /// The weight as a real number. Meaningless for [`Distance::INF`].
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_inf() {
            f.write_str("INF")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

// ---------------------------------------------------------------------------
// AdjacencyMatrix
// ---------------------------------------------------------------------------

/// Dense `n × n` weight matrix, row-major.
///
/// Row `i` holds the weights of edges leaving node `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: usize,
    cells: Vec<Distance>,
}

impl AdjacencyMatrix {
    /// An `n × n` matrix with every cell set to [`Distance::INF`].
    #[must_use]
    pub fn unconnected(n: usize) -> Self {
        Self {
            n,
            cells: vec![Distance::INF; n * n],
        }
    }

    /// Side length of the matrix (the node count).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.n
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Weight of `(i, j)`, [`Distance::INF`] when there is no edge.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Distance {
        assert!(i < self.n && j < self.n, "matrix index out of range");
        self.cells[i * self.n + j]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, weight: Distance) {
        self.cells[i * self.n + j] = weight;
    }

    /// Row `i` of the matrix.
    #[must_use]
    pub fn row(&self, i: usize) -> &[Distance] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    /// All rows in node order. Yields nothing for an empty matrix.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Distance]> + '_ {
        // `chunks_exact(0)` panics, so size the chunks to at least 1; an
        // empty cell vector then yields no rows.
        self.cells.chunks_exact(self.n.max(1))
    }
}
