//! Error types for lattix-matrix.

use thiserror::Error;

/// Error type for matrix operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input carries a class tag that is not one of the recognised
    /// compressed-column classes.
    #[error("unknown class of M: {0}")]
    UnsupportedType(String),

    /// The operand must be square.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Matrix powers are only defined here for non-negative exponents.
    #[error("exponent must be non-negative, got {0}")]
    NegativeExponent(i64),

    /// A symmetric-tagged matrix stores entries in both strict triangles.
    #[error("symmetric matrix must store a single triangle")]
    NotTriangular,
}

/// Result type for matrix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Return the dimension of a square shape, or `NotSquare`.
pub(crate) fn ensure_square((rows, cols): (usize, usize)) -> Result<usize> {
    if rows == cols {
        Ok(rows)
    } else {
        Err(Error::NotSquare { rows, cols })
    }
}
