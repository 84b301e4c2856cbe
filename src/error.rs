//! Error types for photo-pins

use thiserror::Error;

/// Failure reported by the photo provider itself
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The provider answered successfully but the photo list was empty
    #[error("no results")]
    NoResults,

    /// The provider answered with a non-"ok" status
    #[error("provider error {code}: {message}")]
    Provider { code: i64, message: String },
}

/// Main error type for photo-pins operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the search succeeded at the protocol level but found nothing
    pub fn is_no_results(&self) -> bool {
        matches!(self, Error::Api(ApiError::NoResults))
    }
}

/// Result type alias for photo-pins operations
pub type Result<T> = std::result::Result<T, Error>;
