use thiserror::Error;

use crate::types::Timestamp;

/// Input text could not be converted into the requested value.
///
/// Always recoverable: the reason is shown to the participant verbatim and
/// the prompt that produced it asks again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct FormatError {
    pub reason: String,
}

impl FormatError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors from converting between durations and absolute timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("Negative time duration: target {target} already elapsed at {now}")]
    Elapsed { target: Timestamp, now: Timestamp },
}

/// Top-level error type for the Parley crates.
///
/// Subsystem errors convert into it with `?` so the binary can bubble
/// everything up through one type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParleyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Duration error: {0}")]
    Duration(#[from] DurationError),
}

impl From<toml::de::Error> for ParleyError {
    fn from(err: toml::de::Error) -> Self {
        ParleyError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ParleyError {
    fn from(err: toml::ser::Error) -> Self {
        ParleyError::Config(err.to_string())
    }
}

/// A specialized `Result` type for Parley operations.
pub type Result<T> = std::result::Result<T, ParleyError>;
