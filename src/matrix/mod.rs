//! The dense [`Matrix`] type and the row-major loops the checked
//! operations in [`crate::ops`] are built on.
//!
//! The kernels in the submodules work on plain slices plus dimensions and
//! never validate shapes. Callers validate first.

pub mod elementwise;
pub mod format;
pub mod naive_ijk;
pub mod transpose;

use std::ops::{Index, IndexMut};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result, Shape};

/// Element type of every matrix.
pub type Scalar = f32;

/// A dense matrix of `f32` stored row-major.
///
/// Element `(i, j)` lives at offset `i * cols + j` of the buffer, and the
/// buffer always holds exactly `rows * cols` elements. The buffer is
/// released when the matrix is dropped, or explicitly with
/// [`Matrix::release`].
///
/// # Example
///
/// ```
/// use densemat::Matrix;
///
/// let mut m = Matrix::zeros(2, 3).unwrap();
/// m.set(1, 2, 4.5).unwrap();
/// assert_eq!(m.get(1, 2).unwrap(), 4.5);
/// assert!(m.get(2, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Scalar>,
}

#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Scalar>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Matrix::from_vec(raw.rows, raw.cols, raw.data)
    }
}

/// Allocates `rows * cols` zeroed elements, reporting failure instead of
/// aborting.
fn alloc_zeroed(rows: usize, cols: usize) -> Result<Vec<Scalar>> {
    let len = rows
        .checked_mul(cols)
        .ok_or(MatrixError::Memory { rows, cols })?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| MatrixError::Memory { rows, cols })?;
    data.resize(len, 0.0);
    Ok(data)
}

impl Matrix {
    /// Allocates a `rows × cols` matrix.
    ///
    /// The contents are unspecified and callers should overwrite every
    /// element. They currently come back zeroed.
    ///
    /// # Errors
    ///
    /// [`MatrixError::Memory`] if the buffer cannot be allocated.
    pub fn init(rows: usize, cols: usize) -> Result<Self> {
        trace!("allocating {rows}x{cols} matrix");
        let data = alloc_zeroed(rows, cols)?;
        Ok(Self { rows, cols, data })
    }

    /// Allocates a `rows × cols` matrix of zeros.
    ///
    /// # Errors
    ///
    /// [`MatrixError::Memory`] if the buffer cannot be allocated.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::init(rows, cols)
    }

    /// Allocates a `rows × cols` matrix with ones on the main diagonal.
    ///
    /// Rectangular shapes are accepted: the diagonal stops at
    /// `min(rows, cols)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::Memory`] if the buffer cannot be allocated.
    pub fn identity(rows: usize, cols: usize) -> Result<Self> {
        let mut m = Self::zeros(rows, cols)?;
        for i in 0..rows.min(cols) {
            let at = m.offset(i, i);
            m.data[at] = 1.0;
        }
        Ok(m)
    }

    /// Wraps an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// [`MatrixError::Length`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<Scalar>) -> Result<Self> {
        match rows.checked_mul(cols) {
            Some(len) if len == data.len() => Ok(Self { rows, cols, data }),
            expected => Err(MatrixError::Length {
                expected: expected.unwrap_or(usize::MAX),
                actual: data.len(),
            }),
        }
    }

    /// Releases the buffer.
    ///
    /// Takes the matrix by value, so it cannot be used afterwards.
    /// Dropping the matrix does the same thing.
    pub fn release(self) {
        trace!("releasing {}x{} matrix", self.rows, self.cols);
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> Shape {
        (self.rows, self.cols)
    }

    /// Number of elements, `rows * cols`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True for a row vector (`1 × n`) or a column vector (`n × 1`).
    #[must_use]
    pub fn is_vector(&self) -> bool {
        self.rows == 1 || self.cols == 1
    }

    /// Reads element `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexOutOfBound`] if `row >= rows` or `col >= cols`.
    pub fn get(&self, row: usize, col: usize) -> Result<Scalar> {
        self.check_index(row, col)?;
        Ok(self.data[self.offset(row, col)])
    }

    /// Writes element `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexOutOfBound`] if `row >= rows` or `col >= cols`.
    pub fn set(&mut self, row: usize, col: usize, value: Scalar) -> Result<()> {
        self.check_index(row, col)?;
        let at = self.offset(row, col);
        self.data[at] = value;
        Ok(())
    }

    /// Returns row `i` as a slice, or `None` past the last row.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[Scalar]> {
        if i >= self.rows {
            return None;
        }
        let start = i * self.cols;
        Some(&self.data[start..start + self.cols])
    }

    /// The row-major buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[Scalar] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Scalar] {
        &mut self.data
    }

    /// Consumes the matrix and returns its buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<Scalar> {
        self.data
    }

    /// Row-major offset of `(row, col)`. Unchecked.
    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBound {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

/// Panics on an out-of-range index. Use [`Matrix::get`] for a checked read.
impl Index<(usize, usize)> for Matrix {
    type Output = Scalar;

    fn index(&self, (row, col): (usize, usize)) -> &Scalar {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{}",
            self.rows,
            self.cols
        );
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Scalar {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{}",
            self.rows,
            self.cols
        );
        let at = self.offset(row, col);
        &mut self.data[at]
    }
}
