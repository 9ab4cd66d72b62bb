//! Reductions of a matrix to a single scalar.

use crate::error::{Result, mismatch};
use crate::matrix::{Matrix, elementwise::sum_of_squares};

/// Sum of the main diagonal of a square matrix. `0.0` for a 0×0 matrix.
///
/// # Errors
///
/// `DimensionMismatch` if `m` is not square.
pub fn trace(m: &Matrix) -> Result<f32> {
    let (rows, cols) = m.shape();
    if rows != cols {
        return Err(mismatch("trace", (rows, rows), (rows, cols)));
    }
    Ok((0..rows).fold(0.0, |acc, i| acc + m.as_slice()[m.offset(i, i)]))
}

/// Euclidean length of a row or column vector.
///
/// A vector's buffer is exactly its elements, so this is the square root
/// of the sum of squares over the whole buffer. A 1×1 matrix counts once.
///
/// # Errors
///
/// `DimensionMismatch` unless `rows == 1` or `cols == 1`.
///
/// # Example
///
/// ```
/// use densemat::{Matrix, ops::euclidean_norm};
///
/// let v = Matrix::from_vec(1, 2, vec![3.0, 4.0]).unwrap();
/// assert_eq!(euclidean_norm(&v).unwrap(), 5.0);
/// ```
pub fn euclidean_norm(vector: &Matrix) -> Result<f32> {
    if !vector.is_vector() {
        return Err(mismatch("euclidean_norm", (1, vector.cols()), vector.shape()));
    }
    Ok(sum_of_squares(vector.as_slice()).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;

    #[test]
    fn trace_of_square() {
        let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(trace(&m).unwrap(), 5.0);
        assert_eq!(trace(&Matrix::zeros(0, 0).unwrap()).unwrap(), 0.0);
    }

    #[test]
    fn empty_reductions_are_positive_zero() {
        let t = trace(&Matrix::zeros(0, 0).unwrap()).unwrap();
        assert!(!t.is_sign_negative());

        for (r, c) in [(1, 0), (0, 1)] {
            let n = euclidean_norm(&Matrix::zeros(r, c).unwrap()).unwrap();
            assert_eq!(n, 0.0);
            assert!(!n.is_sign_negative(), "{r}x{c}");
        }
    }

    #[test]
    fn trace_rejects_rectangular() {
        let m = Matrix::zeros(2, 3).unwrap();
        assert_eq!(
            trace(&m).unwrap_err(),
            MatrixError::DimensionMismatch {
                op: "trace",
                expected: (2, 2),
                actual: (2, 3)
            }
        );
    }

    #[test]
    fn norm_of_column_and_single_element() {
        let col = Matrix::from_vec(3, 1, vec![2.0, 3.0, 6.0]).unwrap();
        assert_eq!(euclidean_norm(&col).unwrap(), 7.0);

        let single = Matrix::from_vec(1, 1, vec![-4.0]).unwrap();
        assert_eq!(euclidean_norm(&single).unwrap(), 4.0);
    }

    #[test]
    fn norm_rejects_full_matrix() {
        let m = Matrix::zeros(2, 2).unwrap();
        assert!(matches!(
            euclidean_norm(&m),
            Err(MatrixError::DimensionMismatch {
                op: "euclidean_norm",
                ..
            })
        ));
    }
}
