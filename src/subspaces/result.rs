use serde::Serialize;
use std::time::Duration;

use crate::error::{Result, SubspaceError};

/// Wall-clock measurements taken around the reduction phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Timings {
    /// Rank of `A` alone.
    pub rank: Duration,
    /// RREF of `[A | I]`.
    pub rref: Duration,
    /// Whole computation, extraction included.
    pub total: Duration,
}

/// Spanning sets of the four fundamental subspaces of an `m x n` matrix `A`.
///
/// `range_a` and `null_at` hold vectors of length `m`, `range_at` and `null_a`
/// vectors of length `n`. An empty collection is the zero subspace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubspaceResult<T> {
    /// `(m, n)`
    pub shape: (usize, usize),
    pub rank: usize,
    /// Column space: pivot columns of `A`.
    pub range_a: Vec<Vec<T>>,
    /// Row space: nonzero rows of `rref(A)`.
    pub range_at: Vec<Vec<T>>,
    /// Null space of `A`.
    pub null_a: Vec<Vec<T>>,
    /// Left null space, i.e. null space of `A^T`.
    pub null_at: Vec<Vec<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timings: Option<Timings>,
}

impl<T> SubspaceResult<T> {
    pub fn rows(&self) -> usize {
        self.shape.0
    }

    pub fn cols(&self) -> usize {
        self.shape.1
    }

    /// `n - rank`
    pub fn nullity(&self) -> usize {
        self.null_a.len()
    }

    /// `m - rank`
    pub fn left_nullity(&self) -> usize {
        self.null_at.len()
    }

    /// Checks the basis counts and vector lengths against rank-nullity.
    pub fn check_dimensions(&self) -> Result<()> {
        let (m, n) = self.shape;
        if self.rank > m.min(n) {
            return Err(SubspaceError::invariant(format!(
                "rank {} exceeds min({m}, {n})",
                self.rank
            )));
        }

        let expected = [
            ("range_a", &self.range_a, self.rank, m),
            ("range_at", &self.range_at, self.rank, n),
            ("null_a", &self.null_a, n - self.rank, n),
            ("null_at", &self.null_at, m - self.rank, m),
        ];
        for (name, vectors, count, len) in expected {
            if vectors.len() != count {
                return Err(SubspaceError::invariant(format!(
                    "{name} has {} vectors, expected {count}",
                    vectors.len()
                )));
            }
            if let Some(v) = vectors.iter().find(|v| v.len() != len) {
                return Err(SubspaceError::invariant(format!(
                    "{name} holds a vector of length {}, expected {len}",
                    v.len()
                )));
            }
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
