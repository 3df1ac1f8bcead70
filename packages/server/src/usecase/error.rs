//! UseCase error types.

use bbs_relay_shared::RoomIdError;
use thiserror::Error;

use crate::domain::{MessagePushError, RelayError};

/// Errors raised while replying directly to one connection
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("failed to encode reply: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Push(#[from] MessagePushError),
}

/// Errors raised while publishing an event from the write path
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("invalid room: {0}")]
    InvalidRoom(#[from] RoomIdError),

    #[error(transparent)]
    Relay(#[from] RelayError),
}

/// Errors raised while looking up a single room
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomDetailError {
    #[error("invalid room: {0}")]
    InvalidRoom(#[from] RoomIdError),

    #[error("room has no subscribers")]
    RoomNotFound,
}
