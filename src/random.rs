use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SubspaceError};
use crate::matrix::matrix_gen::MatrixGen;
use crate::rings::fraction::Fraction;

/// `rows x cols` matrix of integers drawn uniformly from `[-bound, bound]`.
pub fn random_matrix<R: Rng>(
    rows: usize,
    cols: usize,
    bound: u32,
    rng: &mut R,
) -> Result<MatrixGen<Fraction>> {
    if rows == 0 || cols == 0 {
        return Err(SubspaceError::invalid(format!(
            "cannot generate a {rows}x{cols} matrix"
        )));
    }

    let bound = i64::from(bound);
    Ok(MatrixGen {
        rows,
        cols,
        cells: (0..rows * cols)
            .map(|_| Fraction::from(rng.gen_range(-bound..=bound)))
            .collect(),
    })
}

/// Reproducible variant of [`random_matrix`].
pub fn seeded_matrix(rows: usize, cols: usize, bound: u32, seed: u64) -> Result<MatrixGen<Fraction>> {
    random_matrix(rows, cols, bound, &mut StdRng::seed_from_u64(seed))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
