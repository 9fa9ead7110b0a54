use num_traits::{One, Zero};
use tracing::trace;

use crate::error::{Result, SubspaceError};
use crate::matrix::matrix::Matrix;
use std::ops;
use std::ops::{Add, Div, Mul, Range, Sub};

/// Entries of a [`MatrixGen`]. Reductions assume `Div` is exact field division.
pub trait FieldElement:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::fmt::Debug
    + Send
    + Sync
{
}

impl<T> FieldElement for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + std::iter::Sum<T>
        + std::fmt::Display
        + std::fmt::Debug
        + Send
        + Sync
{
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGen<T> {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<T>,
}

impl<T: FieldElement> Matrix<T> for MatrixGen<T> {
    fn try_from_rows(lines: Vec<Vec<T>>) -> Result<Self> {
        let rows = lines.len();
        if rows == 0 {
            return Err(SubspaceError::invalid("matrix has no rows"));
        }

        let cols = lines[0].len();
        if cols == 0 {
            return Err(SubspaceError::invalid("matrix has no columns"));
        }
        if let Some((i, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
            return Err(SubspaceError::invalid(format!(
                "row {i} has {} entries, expected {cols}",
                line.len()
            )));
        }

        Ok(MatrixGen {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return vec![vec![]; self.rows];
        }
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn is_rref(&self) -> bool {
        let mut lead = None;

        for i in 0..self.rows {
            let row = self.row(i);
            let pivot_col_opt = row.iter().position(|x| !x.is_zero());

            match pivot_col_opt {
                None => {
                    for r in i + 1..self.rows {
                        if self.row(r).iter().any(|x| !x.is_zero()) {
                            return false;
                        }
                    }
                    break;
                }
                Some(pivot_col) => {
                    if let Some(prev_lead) = lead {
                        if pivot_col <= prev_lead {
                            return false;
                        }
                    }
                    lead = Some(pivot_col);

                    if !row[pivot_col].is_one() {
                        return false;
                    }

                    for r in 0..self.rows {
                        if r != i && !self.at(r, pivot_col).is_zero() {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    fn rref(&self) -> (MatrixGen<T>, Vec<usize>) {
        let mut mat = self.clone();
        let mut pivots = Vec::with_capacity(self.rows.min(self.cols));
        let mut row = 0;

        for col in 0..mat.cols {
            if row >= mat.rows {
                break;
            }

            let pivot_row = match (row..mat.rows).find(|&r| !mat.at(r, col).is_zero()) {
                Some(r) => r,
                None => continue,
            };
            mat.swap_rows(row, pivot_row);

            // Columns left of `col` are already zero in the pivot row
            let pivot_val = mat.at(row, col);
            if !pivot_val.is_one() {
                for k in col..mat.cols {
                    let idx = row * mat.cols + k;
                    mat.cells[idx] = mat.cells[idx].clone() / pivot_val.clone();
                }
            }

            for r in 0..mat.rows {
                if r == row {
                    continue;
                }
                let factor = mat.at(r, col);
                if factor.is_zero() {
                    continue;
                }
                for k in col..mat.cols {
                    let b = mat.at(row, k) * factor.clone();
                    let idx = r * mat.cols + k;
                    mat.cells[idx] = mat.cells[idx].clone() - b;
                }
            }

            trace!(row, col, "pivot");
            pivots.push(col);
            row += 1;
        }

        (mat, pivots)
    }

    fn null_space(&self) -> Vec<Vec<T>> {
        let (rref, pivots) = self.rref();

        let mut is_pivot = vec![false; self.cols];
        for &col in &pivots {
            is_pivot[col] = true;
        }

        (0..self.cols)
            .filter(|&c| !is_pivot[c])
            .map(|free_col| {
                let mut vec = vec![T::zero(); self.cols];
                vec[free_col] = T::one();
                for (pivot_row, &pivot_col) in pivots.iter().enumerate() {
                    vec[pivot_col] = T::zero() - rref.at(pivot_row, free_col);
                }
                vec
            })
            .collect()
    }

    fn identity(n: usize) -> MatrixGen<T> {
        MatrixGen {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        }
    }

    fn transpose(&self) -> MatrixGen<T> {
        MatrixGen {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    fn hstack(&self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        if self.rows != rhs.rows {
            return Err(SubspaceError::shapes(
                (self.rows, rhs.cols),
                (rhs.rows, rhs.cols),
            ));
        }

        Ok(MatrixGen {
            rows: self.rows,
            cols: self.cols + rhs.cols,
            cells: (0..self.rows)
                .flat_map(|r| self.row(r).iter().chain(rhs.row(r)).cloned())
                .collect(),
        })
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col].clone()
    }

    fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    fn column(&self, col: usize) -> Vec<T> {
        (0..self.rows).map(|r| self.at(r, col)).collect()
    }

    fn block(&self, rows: Range<usize>, cols: Range<usize>) -> Vec<Vec<T>> {
        rows.map(|r| self.row(r)[cols.clone()].to_vec()).collect()
    }

    fn mul_vec(&self, x: &[T]) -> Result<Vec<T>> {
        if x.len() != self.cols {
            return Err(SubspaceError::shapes((self.cols, 1), (x.len(), 1)));
        }

        Ok((0..self.rows)
            .map(|r| {
                self.row(r)
                    .iter()
                    .zip(x)
                    .map(|(a, b)| a.clone() * b.clone())
                    .sum::<T>()
            })
            .collect())
    }

    fn vec_mul(&self, v: &[T]) -> Result<Vec<T>> {
        if v.len() != self.rows {
            return Err(SubspaceError::shapes((1, self.rows), (1, v.len())));
        }

        Ok((0..self.cols)
            .map(|c| {
                v.iter()
                    .enumerate()
                    .map(|(r, coeff)| coeff.clone() * self.at(r, c))
                    .sum::<T>()
            })
            .collect())
    }

    fn is_zero(&self) -> bool {
        self.cells.iter().all(|x| x.is_zero())
    }
}

impl<T: FieldElement> MatrixGen<T> {
    pub fn new(rows: usize, cols: usize) -> MatrixGen<T> {
        MatrixGen {
            rows,
            cols,
            cells: (0..(rows * cols)).map(|_| T::zero()).collect(),
        }
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    /// Matrix whose rows are the given vectors, all of length `cols`.
    pub fn from_vectors(vectors: &[Vec<T>], cols: usize) -> Result<MatrixGen<T>> {
        if let Some(v) = vectors.iter().find(|v| v.len() != cols) {
            return Err(SubspaceError::shapes((1, cols), (1, v.len())));
        }
        Ok(MatrixGen {
            rows: vectors.len(),
            cols,
            cells: vectors.iter().flatten().cloned().collect(),
        })
    }
}

impl<T: FieldElement> ops::Add<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>>;

    fn add(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        if self.cols != rhs.cols || self.rows != rhs.rows {
            return Err(SubspaceError::shapes(self.shape(), rhs.shape()));
        }

        Ok(MatrixGen {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a.to_owned() + b.to_owned())
                .collect(),
        })
    }
}

impl<T: FieldElement> ops::Mul<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>>;

    fn mul(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        if self.cols != rhs.rows {
            return Err(SubspaceError::shapes(
                (self.cols, rhs.cols),
                (rhs.rows, rhs.cols),
            ));
        }

        Ok(MatrixGen {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols)
                        .map(move |j| (0..self.cols).map(|k| self.at(i, k) * rhs.at(k, j)).sum())
                })
                .collect(),
        })
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
