//! Error types for StudyBuddy Lambda functions.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling an analysis request.
#[derive(Error, Debug)]
pub enum Error {
    /// Caller error (missing or empty content)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Deployment error (missing Gemini credential)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The Gemini service was unreachable or returned a non-success reply
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            _ => 500,
        }
    }

    /// Message returned to the caller. The variant payload carries the
    /// diagnostic detail and only ever reaches the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            Error::Validation(_) => "Content is required",
            Error::Config(_) => "Gemini API key not configured",
            Error::Upstream(_) => "Failed to analyze content with Gemini AI",
            Error::Serialization(_) | Error::Internal(_) => "Internal server error",
        }
    }
}
