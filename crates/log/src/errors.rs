//! Logging error surface.

use thiserror::Error;

/// Errors raised while installing the logger.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LogError {
    /// The filter directive string did not parse.
    #[error("invalid filter directive: {0}")]
    Filter(String),

    /// A global subscriber is already installed.
    #[error("logger initialization failed: {0}")]
    Init(String),
}

/// Result alias for logger setup.
pub type LogResult<T> = std::result::Result<T, LogError>;
