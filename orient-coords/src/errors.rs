use orient_core::OrientError;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Error, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoordError {
    /// The conversion has no defined result for this input.
    #[error("Invalid argument to {operation}: {message}")]
    InvalidArgument { operation: String, message: String },

    #[error("Core calculation failed: {source}")]
    Core {
        #[from]
        source: OrientError,
    },
}

impl CoordError {
    pub fn invalid_argument(operation: &str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation: operation.to_string(),
            message: message.into(),
        }
    }

    /// `true` for [`InvalidArgument`](Self::InvalidArgument), including one
    /// wrapped from the core crate.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::InvalidArgument { .. } => true,
            Self::Core { source } => source.is_invalid_argument(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument() {
        let err = CoordError::invalid_argument("Quaternion::inverse", "zero magnitude");
        assert_eq!(
            err.to_string(),
            "Invalid argument to Quaternion::inverse: zero magnitude"
        );
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_from_core() {
        let core = OrientError::invalid_argument("Vector::normalized", "zero-length vector");
        let err: CoordError = core.clone().into();
        assert!(err.to_string().contains("zero-length vector"));
        assert!(err.is_invalid_argument());
        assert_eq!(err, CoordError::Core { source: core });
    }
}
