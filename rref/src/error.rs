use thiserror::Error;

pub type Result<T> = std::result::Result<T, RrefError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RrefError {
    /// The right-hand side does not have one entry per matrix row.
    #[error("the number of rows of A ({rows}) must match the number of elements in b ({rhs_len})")]
    RowCountMismatch { rows: usize, rhs_len: usize },

    /// A matrix was loaded into a workspace allocated for another shape.
    #[error("expected a {}x{} matrix, got {}x{}", .expected.0, .expected.1, .got.0, .got.1)]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("row {row} has {got} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    #[error("could not parse {token:?} on line {line} as a number")]
    Parse { line: usize, token: String },
}
