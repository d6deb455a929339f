//! Error types for trustpipe-sinks

use thiserror::Error;

/// Errors that can occur when writing to an external sink
#[derive(Error, Debug)]
pub enum SinkError {
    /// Sink backend is unreachable or not configured
    #[error("Sink unavailable: {0}")]
    Unavailable(String),

    /// Write was rejected or failed mid-flight
    #[error("Sink write failed: {0}")]
    Write(String),

    /// Record could not be serialized for the sink
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SinkError {
    fn from(err: serde_json::Error) -> Self {
        SinkError::Serialization(err.to_string())
    }
}
