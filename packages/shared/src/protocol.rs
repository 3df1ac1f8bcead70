//! WebSocket message DTOs exchanged between the relay and its clients.
//!
//! Every frame is a JSON object tagged by its `type` field:
//!
//! ```text
//! client -> relay : {"type":"joinRoom","room":"tech"}
//! relay -> client : {"type":"roomJoined","room":"tech"}
//!                   {"type":"updateThreads","board":"tech","threads":[...]}
//!                   {"type":"newResponse","room":"tech_42","response":{...}}
//!                   {"type":"error","detail":"INVALID_FRAME","message":"..."}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::room::RoomId;

/// Summary of a thread as shown in a board's thread list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadSummary {
    /// Thread number, unique within its board
    pub id: u64,
    pub title: String,
    /// Number of responses in the thread
    pub count: u64,
    pub owner_shown_id: String,
    pub created_at: DateTime<Utc>,
}

/// Decorations attached to a response's author name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "cap_color")]
    pub cap_color: Option<String>,
}

/// A single response posted to a thread
///
/// The board API serves responses with snake_case keys, so those are
/// accepted on input as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    /// Stable identifier assigned by the write path, when it provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub attributes: ResponseAttributes,
    pub content: String,
    #[serde(alias = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(alias = "shown_id")]
    pub shown_id: String,
}

/// Messages sent from a client to the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    /// Subscribe to a room, replacing any previous subscription
    JoinRoom { room: RoomId },
}

/// Messages pushed from the relay to a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    /// Acknowledges a `joinRoom` request
    RoomJoined { room: RoomId },
    /// The complete, updated thread list of a board
    UpdateThreads {
        board: RoomId,
        threads: Vec<ThreadSummary>,
    },
    /// A new response appended to a thread
    NewResponse {
        room: RoomId,
        response: ResponseRecord,
    },
    /// An inbound frame was rejected
    Error { detail: String, message: String },
}

impl ServerMessage {
    /// Room this message is scoped to, if any
    pub fn room(&self) -> Option<&RoomId> {
        match self {
            Self::RoomJoined { room } | Self::NewResponse { room, .. } => Some(room),
            Self::UpdateThreads { board, .. } => Some(board),
            Self::Error { .. } => None,
        }
    }
}
