use itertools::Itertools;
use std::time::{Duration, Instant};

use crate::error::{Result, SubspaceError};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::MatrixGen;
use crate::rings::fraction::Fraction;

/// Runs `f` and returns its output along with the elapsed wall-clock time.
#[inline(always)]
pub fn timed<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let now = Instant::now();
    let result = f();
    (result, now.elapsed())
}

pub fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1e3
}

/// Parses `"1,2,3;4,5,6"`: rows separated by `;`, entries by `,`.
pub fn parse_matrix(input: &str) -> Result<MatrixGen<Fraction>> {
    let rows = input
        .split(';')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.split(',')
                .map(|entry| entry.parse::<Fraction>())
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    if rows.is_empty() {
        return Err(SubspaceError::invalid(format!("no rows in '{input}'")));
    }
    MatrixGen::try_from_rows(rows)
}

/// `(a, b, c)`
pub fn format_vector<T: std::fmt::Display>(values: &[T]) -> String {
    format!("({})", values.iter().join(", "))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
