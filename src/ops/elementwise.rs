//! Copy, add, subtract, scale and transpose.

use crate::error::{Result, mismatch};
use crate::matrix::{Matrix, elementwise, transpose as kernel};

fn check_same(op: &'static str, expected: &Matrix, actual: &Matrix) -> Result<()> {
    if expected.shape() != actual.shape() {
        return Err(mismatch(op, expected.shape(), actual.shape()));
    }
    Ok(())
}

/// `dst = src`, element by element.
///
/// # Errors
///
/// `DimensionMismatch` unless both shapes are equal.
pub fn copy(src: &Matrix, dst: &mut Matrix) -> Result<()> {
    check_same("copy", src, dst)?;
    dst.as_mut_slice().copy_from_slice(src.as_slice());
    Ok(())
}

/// `dst = a + b`.
///
/// # Errors
///
/// `DimensionMismatch` unless `a`, `b` and `dst` all share one shape.
pub fn add(a: &Matrix, b: &Matrix, dst: &mut Matrix) -> Result<()> {
    check_same("add", a, b)?;
    check_same("add", a, dst)?;
    elementwise::zip_with(a.as_slice(), b.as_slice(), dst.as_mut_slice(), |x, y| x + y);
    Ok(())
}

/// `dst = a - b`.
///
/// # Errors
///
/// `DimensionMismatch` unless `a`, `b` and `dst` all share one shape.
pub fn sub(a: &Matrix, b: &Matrix, dst: &mut Matrix) -> Result<()> {
    check_same("sub", a, b)?;
    check_same("sub", a, dst)?;
    elementwise::zip_with(a.as_slice(), b.as_slice(), dst.as_mut_slice(), |x, y| x - y);
    Ok(())
}

/// `m *= s` in place. Works for any shape.
pub fn scalar_multiply(m: &mut Matrix, s: f32) {
    elementwise::scale(m.as_mut_slice(), s);
}

/// `dst = src^T`.
///
/// `dst` must be `src.cols() × src.rows()`.
///
/// # Errors
///
/// `DimensionMismatch` if `dst` is not the swapped shape of `src`.
pub fn transpose(src: &Matrix, dst: &mut Matrix) -> Result<()> {
    let (rows, cols) = src.shape();
    if dst.shape() != (cols, rows) {
        return Err(mismatch("transpose", (cols, rows), dst.shape()));
    }
    kernel::transpose(src.as_slice(), dst.as_mut_slice(), rows, cols);
    Ok(())
}

impl Matrix {
    /// Allocates and returns `self^T`.
    ///
    /// # Errors
    ///
    /// `Memory` if the result cannot be allocated.
    pub fn transposed(&self) -> Result<Matrix> {
        let mut dst = Matrix::init(self.cols(), self.rows())?;
        transpose(self, &mut dst)?;
        Ok(dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;

    fn m(rows: usize, cols: usize, data: &[f32]) -> Matrix {
        Matrix::from_vec(rows, cols, data.to_vec()).unwrap()
    }

    #[test]
    fn add_and_sub() {
        let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = m(2, 2, &[0.5, 0.5, 1.0, 1.0]);
        let mut sum = Matrix::zeros(2, 2).unwrap();
        let mut diff = Matrix::zeros(2, 2).unwrap();

        add(&a, &b, &mut sum).unwrap();
        sub(&a, &b, &mut diff).unwrap();

        assert_eq!(sum.as_slice(), &[1.5, 2.5, 4.0, 5.0]);
        assert_eq!(diff.as_slice(), &[0.5, 1.5, 2.0, 3.0]);
    }

    #[test]
    fn add_rejects_wrong_destination_without_writing() {
        let a = m(1, 2, &[1.0, 2.0]);
        let b = m(1, 2, &[3.0, 4.0]);
        let mut dst = m(2, 1, &[9.0, 9.0]);

        let err = add(&a, &b, &mut dst).unwrap_err();

        assert_eq!(
            err,
            MatrixError::DimensionMismatch {
                op: "add",
                expected: (1, 2),
                actual: (2, 1)
            }
        );
        assert_eq!(dst.as_slice(), &[9.0, 9.0]);
    }

    #[test]
    fn sub_rejects_mismatched_operands() {
        let a = m(1, 2, &[1.0, 2.0]);
        let b = m(1, 3, &[1.0, 2.0, 3.0]);
        let mut dst = Matrix::zeros(1, 2).unwrap();
        assert!(sub(&a, &b, &mut dst).is_err());
    }

    #[test]
    fn copy_is_a_value_copy() {
        let mut src = m(2, 1, &[1.0, 2.0]);
        let mut dst = Matrix::zeros(2, 1).unwrap();
        copy(&src, &mut dst).unwrap();
        src.set(0, 0, 42.0).unwrap();
        assert_eq!(dst.as_slice(), &[1.0, 2.0]);

        let mut wrong = Matrix::zeros(1, 2).unwrap();
        assert!(copy(&src, &mut wrong).is_err());
    }

    #[test]
    fn scalar_multiply_in_place() {
        let mut a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        scalar_multiply(&mut a, -2.0);
        assert_eq!(a.as_slice(), &[-2.0, -4.0, -6.0, -8.0]);
    }

    #[test]
    fn transpose_needs_swapped_shape() {
        let a = m(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let mut same_shape = Matrix::zeros(2, 3).unwrap();
        assert_eq!(
            transpose(&a, &mut same_shape).unwrap_err(),
            MatrixError::DimensionMismatch {
                op: "transpose",
                expected: (3, 2),
                actual: (2, 3)
            }
        );

        let t = a.transposed().unwrap();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(t[(2, 1)], a[(1, 2)]);
    }
}
