//! Row reduction of the augmented matrix `[A | I_m]`.
//!
//! Gauss-Jordan on `[A | I]` never places a pivot in the identity block while
//! a pivot of the `A` block is still available, so the first `rank(A)` pivots
//! are exactly the pivot columns of `A`. The rows below them carry, in the
//! identity block, the row combinations that annihilate `A`.

use tracing::{debug, error, instrument};

use crate::config::SubspaceConfig;
use crate::error::{Result, SubspaceError};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::{FieldElement, MatrixGen};
use crate::subspaces::result::Timings;
use crate::utils::timed;

/// Output of [`reduce`], consumed by the extractor.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction<T> {
    /// `I_m`
    pub identity: MatrixGen<T>,
    /// RREF of `[A | I_m]`, an `m x (n + m)` matrix.
    pub rref: MatrixGen<T>,
    /// Pivot columns of `rref` inside the `A` block, strictly increasing.
    pub pivot_indices: Vec<usize>,
    pub rank: usize,
    pub timings: Option<Timings>,
}

#[instrument(level = "debug", skip_all, fields(rows = a.rows, cols = a.cols))]
pub fn reduce<T: FieldElement>(a: &MatrixGen<T>, config: &SubspaceConfig) -> Result<Reduction<T>> {
    let (m, n) = a.shape();
    if m < 1 || n < 1 {
        return Err(SubspaceError::invalid(format!(
            "matrix must have at least one row and one column, got {m}x{n}"
        )));
    }
    if a.cells.len() != m * n {
        return Err(SubspaceError::invalid(format!(
            "{m}x{n} matrix holds {} entries",
            a.cells.len()
        )));
    }

    let (rank, rank_time) = timed(|| a.rank());

    let identity = MatrixGen::identity(m);
    let augmented = a.hstack(&identity)?;
    let ((rref, pivots), rref_time) = timed(|| augmented.rref());

    let pivot_indices = check_pivots(m, n, rank, pivots)?;
    debug!(rank, ?pivot_indices, "reduced augmented matrix");

    Ok(Reduction {
        identity,
        rref,
        pivot_indices,
        rank,
        timings: config.timings.then(|| Timings {
            rank: rank_time,
            rref: rref_time,
            total: rank_time + rref_time,
        }),
    })
}

/// Validates the pivots of `rref([A | I_m])` against `rank(A)` and keeps the
/// ones inside the `A` block.
pub(crate) fn check_pivots(
    m: usize,
    n: usize,
    rank: usize,
    mut pivots: Vec<usize>,
) -> Result<Vec<usize>> {
    let fail = |msg: String| {
        error!(m, n, rank, ?pivots, "{msg}");
        Err(SubspaceError::invariant(msg))
    };

    if rank > m.min(n) {
        return fail(format!("rank {rank} exceeds min({m}, {n})"));
    }
    // [A | I] always has full row rank
    if pivots.len() != m {
        return fail(format!(
            "augmented matrix has {} pivots, expected {m}",
            pivots.len()
        ));
    }
    if pivots.windows(2).any(|w| w[0] >= w[1]) {
        return fail("pivot columns are not strictly increasing".into());
    }
    let in_block = pivots.iter().filter(|&&p| p < n).count();
    if in_block != rank {
        return fail(format!(
            "{in_block} pivots fall inside the A block, but rank is {rank}"
        ));
    }

    pivots.truncate(rank);
    Ok(pivots)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
