//! Matrix-matrix product.

use crate::error::{Result, mismatch};
use crate::matrix::{Matrix, naive_ijk::matmul_naive_ijk};

/// `dst = a * b`.
///
/// `a` is m×k, `b` is k×n and `dst` must be m×n. Each element of `dst`
/// is overwritten with the dot product of a row of `a` and a column of
/// `b`.
///
/// # Errors
///
/// `DimensionMismatch` if `a.cols() != b.rows()` or `dst` is not m×n.
/// `dst` is untouched in either case.
///
/// # Example
///
/// ```
/// use densemat::{Matrix, ops::multiply};
///
/// let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
/// let mut c = Matrix::zeros(2, 2).unwrap();
///
/// multiply(&a, &b, &mut c).unwrap();
/// assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix, dst: &mut Matrix) -> Result<()> {
    let (m, k) = a.shape();
    let n = b.cols();

    if b.rows() != k {
        return Err(mismatch("multiply", (k, n), b.shape()));
    }
    if dst.shape() != (m, n) {
        return Err(mismatch("multiply", (m, n), dst.shape()));
    }

    matmul_naive_ijk(a.as_slice(), b.as_slice(), dst.as_mut_slice(), m, n, k);
    Ok(())
}

impl Matrix {
    /// Allocates and returns `self * other`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` on incompatible inner dimensions, `Memory` if
    /// the result cannot be allocated.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols() != other.rows() {
            return Err(mismatch(
                "multiply",
                (self.cols(), other.cols()),
                other.shape(),
            ));
        }
        let mut dst = Matrix::init(self.rows(), other.cols())?;
        multiply(self, other, &mut dst)?;
        Ok(dst)
    }
}
