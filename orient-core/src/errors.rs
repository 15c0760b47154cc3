//! Error types for orientation math.
//!
//! Degenerate-but-defined inputs (gimbal lock, pole snapping, zero-length polar
//! vectors, the identity quaternion raised to a power) are regular behavior and never
//! produce an error. What does fail is arithmetic that would otherwise leak
//! NaN or infinity into the result:
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`InvalidArgument`](OrientError::InvalidArgument) | Normalizing a zero vector, inverting a singular matrix |
//! | [`MathError`](OrientError::MathError) | Index out of bounds, non-finite input |
//!
//! ```
//! use orient_core::{OrientError, MathErrorKind};
//!
//! fn safe_divide(a: f64, b: f64) -> Result<f64, OrientError> {
//!     if b == 0.0 {
//!         return Err(OrientError::invalid_argument("safe_divide", "divisor is zero"));
//!     }
//!     Ok(a / b)
//! }
//!
//! assert!(safe_divide(1.0, 0.0).is_err());
//! ```

use thiserror::Error;

/// Classification of numerical failures carried by [`OrientError::MathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MathErrorKind {
    /// Attempted division by zero or near-zero value.
    DivisionByZero,
    /// Input value is invalid for the operation.
    InvalidInput,
    /// Result is NaN or infinity.
    NotFinite,
    /// Index or value outside the valid domain.
    OutOfRange,
}

/// Unified error type for the vector, matrix and angle primitives.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrientError {
    /// The operation has no defined result for this input.
    #[error("Invalid argument to {operation}: {message}")]
    InvalidArgument { operation: String, message: String },

    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, OrientError>`.
pub type OrientResult<T> = Result<T, OrientError>;

impl OrientError {
    /// Creates an [`InvalidArgument`](Self::InvalidArgument) error.
    pub fn invalid_argument(operation: &str, reason: &str) -> Self {
        Self::InvalidArgument {
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Returns `true` for [`InvalidArgument`](Self::InvalidArgument).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
