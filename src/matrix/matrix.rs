use std::ops::Range;

use crate::error::Result;

/// Dense matrix primitives the subspace computation is built on.
pub trait Matrix<T>
where
    Self: Sized,
{
    /// Builds a matrix from its rows, rejecting ragged or empty input.
    fn try_from_rows(lines: Vec<Vec<T>>) -> Result<Self>;
    fn to_list(&self) -> Vec<Vec<T>>;
    /// `(rows, cols)`
    fn shape(&self) -> (usize, usize);

    fn is_rref(&self) -> bool;
    /// Reduced row echelon form together with its pivot columns, in increasing order.
    fn rref(&self) -> (Self, Vec<usize>);
    fn rank(&self) -> usize {
        self.rref().1.len()
    }
    /// One basis vector of the right kernel per free column.
    fn null_space(&self) -> Vec<Vec<T>>;

    fn identity(n: usize) -> Self;
    fn transpose(&self) -> Self;
    /// Horizontal concatenation `[self | rhs]`.
    fn hstack(&self, rhs: &Self) -> Result<Self>;

    fn at(&self, row: usize, col: usize) -> T;
    fn row(&self, row: usize) -> &[T];
    fn column(&self, col: usize) -> Vec<T>;
    /// Rows in `rows`, each restricted to the columns in `cols`.
    fn block(&self, rows: Range<usize>, cols: Range<usize>) -> Vec<Vec<T>>;

    /// `A * x`
    fn mul_vec(&self, x: &[T]) -> Result<Vec<T>>;
    /// `v^T * A`
    fn vec_mul(&self, v: &[T]) -> Result<Vec<T>>;
    fn is_zero(&self) -> bool;
}
