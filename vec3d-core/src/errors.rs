//! Error types for the checked vector APIs.
//!
//! The core [`Vector3`](crate::Vector3) operations never fail: division by zero,
//! out-of-domain `asin` input and out-of-range indexing all fall through to the
//! native behaviour of the component type (NaN, infinity, an integer panic, or a
//! zero component). Callers who would rather see a failure use the separately
//! named checked methods, which return [`VectorResult<T>`]:
//!
//! | Method | Error |
//! |--------|-------|
//! | [`get`](crate::Vector3::get) / [`set`](crate::Vector3::set) | [`IndexOutOfBounds`](VectorError::IndexOutOfBounds) |
//! | [`try_normalised`](crate::Vector3::try_normalised) | [`MathError`](VectorError::MathError) with [`VectorErrorKind::ZeroMagnitude`] |
//!
//! ```
//! use vec3d_core::{VectorError, VectorErrorKind};
//!
//! fn checked_divide(a: f64, b: f64) -> Result<f64, VectorError> {
//!     if b == 0.0 {
//!         return Err(VectorError::math_error(
//!             "checked_divide",
//!             VectorErrorKind::DivisionByZero,
//!             "divisor is zero",
//!         ));
//!     }
//!     Ok(a / b)
//! }
//! ```

use thiserror::Error;

/// Classification of numerical failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorErrorKind {
    /// The vector has zero length and cannot be given a direction.
    ZeroMagnitude,
    /// Attempted division by zero.
    DivisionByZero,
    /// Result is NaN or infinity.
    NotFinite,
    /// Value outside the valid domain (e.g. `asin` of 1.5).
    OutOfRange,
}

/// Error returned by the checked vector APIs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    /// Component index outside `0..=2`.
    #[error("{operation}: index {index} out of bounds (valid range: 0-2)")]
    IndexOutOfBounds { operation: String, index: usize },

    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: VectorErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, VectorError>`.
pub type VectorResult<T> = Result<T, VectorError>;

impl VectorError {
    /// Creates an [`IndexOutOfBounds`](Self::IndexOutOfBounds) error.
    pub fn index_out_of_bounds(operation: &str, index: usize) -> Self {
        Self::IndexOutOfBounds {
            operation: operation.to_string(),
            index,
        }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: VectorErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Returns the [`VectorErrorKind`] for math errors, `None` otherwise.
    pub fn kind(&self) -> Option<VectorErrorKind> {
        match self {
            Self::MathError { kind, .. } => Some(*kind),
            Self::IndexOutOfBounds { .. } => None,
        }
    }
}
