//! Domain error types.

use thiserror::Error;

/// Errors raised while pushing a frame to a single connection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("connection '{0}' is not registered")]
    ClientNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),
}

/// Errors raised by an `EventRelay` backend
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),
}
