//! Checked matrix operations.
//!
//! Every operation validates operand shapes before writing anything, so on
//! `Err` the destination still holds what it held before the call. Shared
//! borrows for sources plus a `&mut` destination mean a destination can
//! never alias one of its sources.

pub mod elementwise;
pub mod multiply;
pub mod reduce;

pub use elementwise::{add, copy, scalar_multiply, sub, transpose};
pub use multiply::multiply;
pub use reduce::{euclidean_norm, trace};
