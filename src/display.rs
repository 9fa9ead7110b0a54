use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};
use std::fmt::{self, Display, Formatter};

use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::{FieldElement, MatrixGen};
use crate::subspaces::result::SubspaceResult;
use crate::utils::{format_vector, millis};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS);
    table
}

/// Renders a matrix one row per table row.
pub fn matrix_table<T: FieldElement>(matrix: &MatrixGen<T>) -> Table {
    let mut table = new_table();
    for row in matrix.to_list() {
        table.add_row(row.iter().map(|x| Cell::new(x)).collect::<Vec<_>>());
    }
    table
}

fn basis_table<T: Display>(title: &str, dimension: usize, vectors: &[Vec<T>]) -> Table {
    let mut table = new_table();
    table.set_header(vec![title.to_string(), format!("dim {dimension}")]);
    if vectors.is_empty() {
        table.add_row(vec!["", "{0}"]);
    }
    for (i, v) in vectors.iter().enumerate() {
        table.add_row(vec![format!("v{}", i + 1), format_vector(v)]);
    }
    table
}

impl<T: Display> SubspaceResult<T> {
    pub fn display(&self) -> String {
        let (m, n) = self.shape;

        let mut summary = new_table();
        summary.set_header(vec!["shape", "rank"]);
        summary.add_row(vec![format!("{m} x {n}"), self.rank.to_string()]);
        if let Some(t) = &self.timings {
            summary.add_row(vec![
                "rank time".to_string(),
                format!("{:.3} ms", millis(t.rank)),
            ]);
            summary.add_row(vec![
                "rref time".to_string(),
                format!("{:.3} ms", millis(t.rref)),
            ]);
            summary.add_row(vec![
                "total time".to_string(),
                format!("{:.3} ms", millis(t.total)),
            ]);
        }

        let sections = [
            basis_table("Range(A)", self.range_a.len(), &self.range_a),
            basis_table("Range(A^T)", self.range_at.len(), &self.range_at),
            basis_table("Null(A)", self.null_a.len(), &self.null_a),
            basis_table("Null(A^T)", self.null_at.len(), &self.null_at),
        ];

        std::iter::once(summary)
            .chain(sections)
            .map(|table| table.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<T: Display> Display for SubspaceResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
