//! Application-wide error types.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request, bad amount or bad denomination list.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Amount outside the configured bounds.
    #[error("Amount out of range: {0}")]
    OutOfRange(String),

    /// No combination of the denominations sums to the target.
    #[error("Unreachable target: {0}")]
    Unreachable(String),

    /// Route or resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) | Self::OutOfRange(_) => 400,
            Self::NotFound(_) => 404,
            Self::Unreachable(_) => 422,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::OutOfRange(_) => "OUT_OF_RANGE",
            Self::Unreachable(_) => "UNREACHABLE",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the message without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput(msg)
            | Self::OutOfRange(msg)
            | Self::Unreachable(msg)
            | Self::NotFound(msg)
            | Self::Internal(msg) => msg,
        }
    }

    /// Returns true for errors caused by the caller rather than the service.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
