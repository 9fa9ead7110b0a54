use thiserror::Error;

/// Errors raised while building matrices or deriving their subspaces.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubspaceError {
    /// Ragged rows, zero dimension, unparsable or non-finite entries.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The reduction produced a result that contradicts itself.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),

    /// Operands of a matrix operation have incompatible shapes.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: String, found: String },
}

pub type Result<T> = std::result::Result<T, SubspaceError>;

impl SubspaceError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SubspaceError::InvalidInput(msg.into())
    }

    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        SubspaceError::InvariantViolation(msg.into())
    }

    pub(crate) fn shapes(expected: (usize, usize), found: (usize, usize)) -> Self {
        SubspaceError::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            found: format!("{}x{}", found.0, found.1),
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
