//! Four fundamental subspaces of a rational matrix `A`.
//!
//! A single Gauss-Jordan pass over `[A | I]` yields the column space, the row
//! space and the left null space; the null space comes from the kernel of `A`.
//!
//! ```
//! use four_subspaces::matrix::matrix::Matrix;
//! use four_subspaces::matrix::matrix_gen::MatrixGen;
//! use four_subspaces::rings::fraction::Fraction;
//!
//! let a = MatrixGen::try_from_rows(vec![
//!     vec![Fraction::from(1), Fraction::from(2)],
//!     vec![Fraction::from(2), Fraction::from(4)],
//! ])
//! .unwrap();
//! let result = four_subspaces::four_subspaces(&a).unwrap();
//! assert_eq!(result.rank, 1);
//! assert_eq!(result.null_at.len(), 1);
//! ```

pub mod matrix {
    pub mod matrix;
    pub mod matrix_gen;
}
pub mod rings {
    pub mod fraction;
}
pub mod subspaces {
    pub mod extractor;
    pub mod reduction;
    pub mod result;
    pub mod subspaces;
}

pub mod config;
pub mod display;
pub mod error;
pub mod random;
pub mod utils;

mod proptests;

pub use config::SubspaceConfig;
pub use error::{Result, SubspaceError};
pub use subspaces::result::{SubspaceResult, Timings};
pub use subspaces::subspaces::{four_subspaces, four_subspaces_from_rows, four_subspaces_with};

#[cfg(feature = "python")]
mod python {
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::SubspaceError;
    use crate::rings::fraction::Fraction;
    use crate::subspaces::result::SubspaceResult;

    fn to_strings(vectors: &[Vec<Fraction>]) -> Vec<Vec<String>> {
        vectors
            .iter()
            .map(|v| v.iter().map(|x| x.to_string()).collect())
            .collect()
    }

    #[pyclass(frozen, name = "Subspaces")]
    pub struct SubspacesPy {
        #[pyo3(get)]
        shape: (usize, usize),
        #[pyo3(get)]
        rank: usize,
        #[pyo3(get)]
        range_a: Vec<Vec<String>>,
        #[pyo3(get)]
        range_at: Vec<Vec<String>>,
        #[pyo3(get)]
        null_a: Vec<Vec<String>>,
        #[pyo3(get)]
        null_at: Vec<Vec<String>>,
    }

    impl From<SubspaceResult<Fraction>> for SubspacesPy {
        fn from(result: SubspaceResult<Fraction>) -> Self {
            SubspacesPy {
                shape: result.shape,
                rank: result.rank,
                range_a: to_strings(&result.range_a),
                range_at: to_strings(&result.range_at),
                null_a: to_strings(&result.null_a),
                null_at: to_strings(&result.null_at),
            }
        }
    }

    /// Entries are given as strings such as `"3"`, `"-1/2"` or `"0.25"`.
    #[pyfunction]
    #[pyo3(name = "four_subspaces")]
    pub fn py_four_subspaces(rows: Vec<Vec<String>>) -> PyResult<SubspacesPy> {
        let parse = || -> Result<SubspaceResult<Fraction>, SubspaceError> {
            let rows = rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|x| x.parse::<Fraction>())
                        .collect::<Result<Vec<_>, _>>()
                })
                .collect::<Result<Vec<_>, _>>()?;
            crate::four_subspaces_from_rows(rows)
        };

        match parse() {
            Ok(result) => Ok(result.into()),
            Err(error) => Err(PyValueError::new_err(error.to_string())),
        }
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    fn four_subspaces(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(py_four_subspaces, m)?)?;
        m.add_class::<SubspacesPy>()?;
        Ok(())
    }
}
