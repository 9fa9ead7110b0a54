use tracing::info;

use crate::config::SubspaceConfig;
use crate::error::Result;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::{FieldElement, MatrixGen};
use crate::subspaces::extractor::extract;
use crate::subspaces::reduction::reduce;
use crate::subspaces::result::SubspaceResult;
use crate::utils::timed;

/// Four fundamental subspaces of `a`, sequentially, with timings.
pub fn four_subspaces<T: FieldElement>(a: &MatrixGen<T>) -> Result<SubspaceResult<T>> {
    four_subspaces_with(a, &SubspaceConfig::default())
}

pub fn four_subspaces_with<T: FieldElement>(
    a: &MatrixGen<T>,
    config: &SubspaceConfig,
) -> Result<SubspaceResult<T>> {
    let (result, elapsed) = timed(|| -> Result<SubspaceResult<T>> {
        let reduction = reduce(a, config)?;
        let result = extract(a, &reduction, config);
        result.check_dimensions()?;
        Ok(result)
    });

    let mut result = result?;
    if let Some(timings) = result.timings.as_mut() {
        timings.total = elapsed;
    }

    info!(
        rows = result.rows(),
        cols = result.cols(),
        rank = result.rank,
        "computed four fundamental subspaces"
    );
    Ok(result)
}

/// Validates `rows` as a rectangular matrix before computing its subspaces.
pub fn four_subspaces_from_rows<T: FieldElement>(rows: Vec<Vec<T>>) -> Result<SubspaceResult<T>> {
    four_subspaces(&MatrixGen::try_from_rows(rows)?)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubspaceError;
    use crate::rings::fraction::Fraction;
    use num_traits::{One, Zero};

    fn qm(lines: &[&[i64]]) -> MatrixGen<Fraction> {
        MatrixGen::try_from_rows(
            lines
                .iter()
                .map(|l| l.iter().map(|&x| Fraction::from(x)).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_rank_deficient_3x4() {
        let a = qm(&[&[1, 2, 2, 3], &[2, 4, 1, 3], &[3, 6, 1, 4]]);
        let result = four_subspaces(&a).unwrap();

        // column 1 = 2 * column 0 and column 3 = column 0 + column 2
        assert_eq!(result.rank, 2);
        assert_eq!(result.range_a.len(), 2);
        assert_eq!(result.range_at.len(), 2);
        assert_eq!(result.nullity(), 2);
        assert_eq!(result.left_nullity(), 1);

        let timings = result.timings.unwrap();
        assert!(timings.total >= timings.rref);
    }

    #[test]
    fn test_full_rank_square() {
        for k in 1..=4 {
            let identity = MatrixGen::<Fraction>::identity(k);
            let result = four_subspaces(&identity).unwrap();
            assert_eq!(result.rank, k);
            assert_eq!(result.range_a, identity.to_list());
            assert_eq!(result.range_at, identity.to_list());
            assert!(result.null_a.is_empty());
            assert!(result.null_at.is_empty());
        }
    }

    #[test]
    fn test_zero_matrix() {
        let zero = MatrixGen::<Fraction>::new(3, 2);
        let result = four_subspaces(&zero).unwrap();
        assert_eq!(result.rank, 0);
        assert!(result.range_a.is_empty());
        assert!(result.range_at.is_empty());
        assert_eq!(result.null_a, MatrixGen::<Fraction>::identity(2).to_list());
        assert_eq!(result.null_at, MatrixGen::<Fraction>::identity(3).to_list());
    }

    #[test]
    fn test_single_entry() {
        let result = four_subspaces_from_rows(vec![vec![Fraction::from(-7)]]).unwrap();
        assert_eq!(result.rank, 1);
        assert_eq!(result.range_a, vec![vec![Fraction::from(-7)]]);
        assert_eq!(result.range_at, vec![vec![Fraction::one()]]);

        let result = four_subspaces_from_rows(vec![vec![Fraction::zero()]]).unwrap();
        assert_eq!(result.rank, 0);
        assert_eq!(result.null_a, vec![vec![Fraction::one()]]);
        assert_eq!(result.null_at, vec![vec![Fraction::one()]]);
    }

    #[test]
    fn test_invalid_rows() {
        let ragged = vec![vec![Fraction::one()], vec![]];
        assert!(matches!(
            four_subspaces_from_rows(ragged),
            Err(SubspaceError::InvalidInput(_))
        ));
        assert!(four_subspaces_from_rows(Vec::<Vec<Fraction>>::new()).is_err());
    }

    #[test]
    fn test_without_timings() {
        let a = qm(&[&[1, 1], &[1, 1]]);
        let config = SubspaceConfig::default().with_timings(false).with_parallel(true);
        let result = four_subspaces_with(&a, &config).unwrap();
        assert_eq!(result.timings, None);
        assert_eq!(result.rank, 1);
    }
}
