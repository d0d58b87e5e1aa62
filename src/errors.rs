//! Error types for curlgen

use thiserror::Error;

/// Main error type for curlgen
#[derive(Error, Debug)]
pub enum CurlgenError {
    /// Structural problem with the request description (empty method, bad URL,
    /// wrong body type, JSON or query encoding failure)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CurlgenError {
    /// Shorthand for building an [`CurlgenError::InvalidArgument`]
    pub fn invalid(message: impl Into<String>) -> Self {
        CurlgenError::InvalidArgument(message.into())
    }

    /// Whether this error came from validating the request description
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CurlgenError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, CurlgenError>;
