//! Error types for geohash cover construction.

use thiserror::Error;

/// Errors returned by sampling, compression and configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProxhashError {
    /// A precision argument fell outside the supported geohash range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A coordinate or radius supplied by the caller is unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A configuration document failed validation.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ProxhashError>;
