//! Error types for the relay client.

use bbs_relay_shared::RoomIdError;
use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Board or thread does not form a valid room
    #[error("Invalid page: {0}")]
    InvalidPage(#[from] RoomIdError),

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Relay closed the connection or the socket failed
    #[error("Connection lost")]
    ConnectionLost,

    #[error("Failed to encode frame: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to reconnect after {0} attempts")]
    ReconnectExhausted(u32),
}

/// Errors returned by the board's read API
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API asks for a bot-verification challenge before answering
    #[error("Verification required: {message}")]
    VerificationRequired {
        sitekey: Option<String>,
        message: String,
    },

    /// Non-2xx answer with a structured error body
    #[error("Board API returned {status}: {detail}")]
    Status {
        status: u16,
        detail: String,
        message: Option<String>,
    },

    #[error("Board API request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Text to show to the reader: the human message when there is one,
    /// otherwise the machine-readable discriminator.
    pub fn user_message(&self) -> String {
        match self {
            Self::VerificationRequired { message, .. } => message.clone(),
            Self::Status {
                detail, message, ..
            } => message.clone().unwrap_or_else(|| detail.clone()),
            Self::Transport(e) => e.to_string(),
        }
    }
}

/// Errors raised while merging relayed frames into a page
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("Malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Snapshot does not match the {0} page")]
    SnapshotMismatch(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_message() {
        // テスト項目: message がある場合はそれを、無い場合は detail を表示する
        // given (前提条件):
        let with_message = ApiError::Status {
            status: 400,
            detail: "CONTENT_TOO_LONG".to_string(),
            message: Some("本文が長すぎます".to_string()),
        };
        let without_message = ApiError::Status {
            status: 404,
            detail: "Not Found".to_string(),
            message: None,
        };

        // when (操作) / then (期待する結果):
        assert_eq!(with_message.user_message(), "本文が長すぎます");
        assert_eq!(without_message.user_message(), "Not Found");
    }
}
