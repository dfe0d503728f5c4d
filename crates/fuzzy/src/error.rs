//! Error types for the fuzzy crate.
//!
//! The distance and scoring functions are total and never return these; only
//! configuration validation and the JSON batch entry point can fail.

use thiserror::Error;

/// Result type alias for fuzzy matching operations.
pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors that can occur at the edges of the matcher.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Threshold is NaN or infinite
    #[error("Invalid threshold: {0} (must be a finite number)")]
    InvalidThreshold(f64),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error code for integration with host error reporting.
/// Range: 11xxx for matcher errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchErrorCode {
    /// Threshold is NaN or infinite
    InvalidThreshold = 11001,
    /// JSON parsing error
    Json = 11002,
}

impl MatchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> MatchErrorCode {
        match self {
            MatchError::InvalidThreshold(_) => MatchErrorCode::InvalidThreshold,
            MatchError::Json(_) => MatchErrorCode::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(MatchError::InvalidThreshold(f64::NAN).code() as u32, 11001);

        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert_eq!(MatchError::from(json_err).code(), MatchErrorCode::Json);
    }

    #[test]
    fn test_error_display() {
        let err = MatchError::InvalidThreshold(f64::INFINITY);
        assert_eq!(err.to_string(), "Invalid threshold: inf (must be a finite number)");
    }
}
