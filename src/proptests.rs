//! Property-based tests for the subspace computation.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::config::SubspaceConfig;
    use crate::matrix::matrix::Matrix;
    use crate::matrix::matrix_gen::MatrixGen;
    use crate::rings::fraction::Fraction;
    use crate::subspaces::reduction::reduce;
    use crate::subspaces::subspaces::four_subspaces_with;

    fn to_matrix(lines: Vec<Vec<i64>>) -> MatrixGen<Fraction> {
        MatrixGen::try_from_rows(
            lines
                .into_iter()
                .map(|l| l.into_iter().map(Fraction::from).collect())
                .collect(),
        )
        .unwrap()
    }

    // Strategy for small integer matrices of arbitrary shape
    fn small_matrix() -> impl Strategy<Value = MatrixGen<Fraction>> {
        (1usize..6, 1usize..6)
            .prop_flat_map(|(m, n)| prop::collection::vec(prop::collection::vec(-4i64..=4, n), m))
            .prop_map(to_matrix)
    }

    // Product of an m x k and a k x n matrix, so rank <= k is common
    fn low_rank_matrix() -> impl Strategy<Value = MatrixGen<Fraction>> {
        (1usize..6, 1usize..6, 1usize..3)
            .prop_flat_map(|(m, n, k)| {
                (
                    prop::collection::vec(prop::collection::vec(-3i64..=3, k), m),
                    prop::collection::vec(prop::collection::vec(-3i64..=3, n), k),
                )
            })
            .prop_map(|(left, right)| (&to_matrix(left) * &to_matrix(right)).unwrap())
    }

    fn any_matrix() -> impl Strategy<Value = MatrixGen<Fraction>> {
        prop_oneof![small_matrix(), low_rank_matrix()]
    }

    fn rank_of(vectors: &[Vec<Fraction>], len: usize) -> usize {
        if vectors.is_empty() {
            return 0;
        }
        MatrixGen::from_vectors(vectors, len).unwrap().rank()
    }

    fn config() -> SubspaceConfig {
        SubspaceConfig::default().with_timings(false)
    }

    proptest! {
        #[test]
        fn basis_counts_follow_rank_nullity(a in any_matrix()) {
            let (m, n) = a.shape();
            let result = four_subspaces_with(&a, &config()).unwrap();
            prop_assert_eq!(result.rank, a.rank());
            prop_assert_eq!(result.range_a.len(), result.rank);
            prop_assert_eq!(result.range_at.len(), result.rank);
            prop_assert_eq!(result.null_a.len(), n - result.rank);
            prop_assert_eq!(result.null_at.len(), m - result.rank);
            prop_assert_eq!(result.range_a.len() + result.null_at.len(), m);
        }

        #[test]
        fn null_space_is_annihilated(a in any_matrix()) {
            let result = four_subspaces_with(&a, &config()).unwrap();
            for x in &result.null_a {
                prop_assert!(a.mul_vec(x).unwrap().iter().all(Zero::is_zero));
            }
            prop_assert_eq!(rank_of(&result.null_a, a.cols), result.null_a.len());
        }

        #[test]
        fn left_null_space_is_annihilated(a in any_matrix()) {
            let result = four_subspaces_with(&a, &config()).unwrap();
            for v in &result.null_at {
                prop_assert!(a.vec_mul(v).unwrap().iter().all(Zero::is_zero));
            }
            prop_assert_eq!(rank_of(&result.null_at, a.rows), result.null_at.len());
        }

        #[test]
        fn ranges_are_independent_and_span(a in any_matrix()) {
            let result = four_subspaces_with(&a, &config()).unwrap();
            let columns = a.transpose().to_list();

            for v in &result.range_a {
                prop_assert!(columns.contains(v));
            }
            prop_assert_eq!(rank_of(&result.range_a, a.rows), result.rank);
            prop_assert_eq!(rank_of(&result.range_at, a.cols), result.rank);

            // appending the row basis to A must not grow its rank
            let mut stacked = a.to_list();
            stacked.extend(result.range_at.iter().cloned());
            prop_assert_eq!(rank_of(&stacked, a.cols), result.rank);
        }

        #[test]
        fn reduction_is_idempotent(a in any_matrix()) {
            let first = reduce(&a, &config()).unwrap();
            let second = reduce(&a, &config()).unwrap();
            prop_assert_eq!(&first.rref, &second.rref);
            prop_assert_eq!(first.rank, second.rank);
            prop_assert_eq!(&first.pivot_indices, &second.pivot_indices);
            prop_assert!(first.rref.is_rref());
        }

        #[test]
        fn parallel_extraction_matches_sequential(a in any_matrix()) {
            let sequential = four_subspaces_with(&a, &config()).unwrap();
            let parallel = four_subspaces_with(&a, &config().with_parallel(true)).unwrap();
            prop_assert_eq!(sequential, parallel);
        }
    }
}
