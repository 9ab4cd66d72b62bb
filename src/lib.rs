//! Small dense matrix arithmetic on row-major `f32` buffers.
//!
//! A [`Matrix`] owns a contiguous buffer of `rows * cols` scalars. The
//! operations in [`ops`] take their operands by reference and write into a
//! caller-allocated destination, checking every shape first.
//!
//! ## Usage
//!
//! ```
//! use densemat::{Matrix, ops};
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let eye = Matrix::identity(2, 2).unwrap();
//! let mut c = Matrix::zeros(2, 2).unwrap();
//!
//! ops::multiply(&eye, &a, &mut c).unwrap();
//! assert_eq!(c, a);
//!
//! ops::add(&a, &eye, &mut c).unwrap();
//! assert_eq!(ops::trace(&c).unwrap(), 7.0);
//! ```
//!
//! Failures come back as [`MatrixError`]:
//!
//! ```
//! use densemat::{Matrix, MatrixError, ops};
//!
//! let a = Matrix::zeros(2, 3).unwrap();
//! let b = Matrix::zeros(2, 2).unwrap();
//! let mut c = Matrix::zeros(2, 2).unwrap();
//!
//! assert!(matches!(
//!     ops::multiply(&a, &b, &mut c),
//!     Err(MatrixError::DimensionMismatch { .. })
//! ));
//! ```
//!
//! ## What's inside
//!
//! - `matrix`: the type, construction, element access, diagnostic dump
//! - `matrix::{naive_ijk, transpose, elementwise}`: unchecked slice loops
//! - `ops`: the checked operations

pub mod error;
pub mod matrix;
pub mod ops;

pub use error::{MatrixError, Result, Shape};
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use matrix::{Matrix, Scalar};
