//! Error types for matrix operations.

use thiserror::Error;

/// A `(rows, cols)` pair.
pub type Shape = (usize, usize);

/// Everything a matrix operation can fail with.
///
/// Every check runs before the destination is touched, so an `Err` means
/// no element was written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The `rows * cols` buffer could not be allocated.
    #[error("cannot allocate a {rows}x{cols} matrix")]
    Memory { rows: usize, cols: usize },

    /// Operand shapes violate the operation's shape contract.
    #[error("{op}: dimension mismatch, expected {}x{} but got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        op: &'static str,
        expected: Shape,
        actual: Shape,
    },

    /// Element index outside the matrix.
    #[error("index ({row}, {col}) out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBound {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Reserved for inversion. Nothing in this crate returns it yet.
    #[error("matrix is singular")]
    SingularMatrix,

    /// A supplied buffer does not hold `rows * cols` elements.
    #[error("buffer holds {actual} elements, expected {expected}")]
    Length { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;

/// Builds a [`MatrixError::DimensionMismatch`] and logs the rejection.
pub(crate) fn mismatch(op: &'static str, expected: Shape, actual: Shape) -> MatrixError {
    log::debug!(
        "{op}: rejecting {}x{} operand, expected {}x{}",
        actual.0,
        actual.1,
        expected.0,
        expected.1
    );
    MatrixError::DimensionMismatch {
        op,
        expected,
        actual,
    }
}
