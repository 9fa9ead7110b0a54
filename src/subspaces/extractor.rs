use tracing::debug;

use crate::config::SubspaceConfig;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::{FieldElement, MatrixGen};
use crate::subspaces::reduction::Reduction;
use crate::subspaces::result::SubspaceResult;

/// Pivot columns of the original matrix `a`.
pub fn column_space<T: FieldElement>(a: &MatrixGen<T>, pivot_indices: &[usize]) -> Vec<Vec<T>> {
    pivot_indices.iter().map(|&idx| a.column(idx)).collect()
}

/// First `rank` rows of the augmented RREF, restricted to the `A` block.
pub fn row_space<T: FieldElement>(rref: &MatrixGen<T>, rank: usize, n: usize) -> Vec<Vec<T>> {
    rref.block(0..rank, 0..n)
}

/// Last `m - rank` rows of the augmented RREF, restricted to the identity block.
///
/// Empty when `A` has full row rank.
pub fn left_null_space<T: FieldElement>(
    rref: &MatrixGen<T>,
    rank: usize,
    n: usize,
) -> Vec<Vec<T>> {
    rref.block(rank..rref.rows, n..rref.cols)
}

/// Derives the four spanning sets from `a` and its reduction.
pub fn extract<T: FieldElement>(
    a: &MatrixGen<T>,
    reduction: &Reduction<T>,
    config: &SubspaceConfig,
) -> SubspaceResult<T> {
    let (m, n) = a.shape();
    let rank = reduction.rank;

    let ranges = || {
        (
            column_space(a, &reduction.pivot_indices),
            row_space(&reduction.rref, rank, n),
        )
    };
    let nulls = || (a.null_space(), left_null_space(&reduction.rref, rank, n));

    let ((range_a, range_at), (null_a, null_at)) = if config.parallel {
        rayon::join(ranges, nulls)
    } else {
        (ranges(), nulls())
    };

    debug!(
        range = range_a.len(),
        null = null_a.len(),
        left_null = null_at.len(),
        "extracted subspaces"
    );

    SubspaceResult {
        shape: (m, n),
        rank,
        range_a,
        range_at,
        null_a,
        null_at,
        timings: reduction.timings,
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
