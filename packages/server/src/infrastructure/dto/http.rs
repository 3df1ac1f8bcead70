//! HTTP API request / response DTOs.

use bbs_relay_shared::ThreadSummary;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/relay/boards/{board}/threads`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublishThreadsRequest {
    pub threads: Vec<ThreadSummary>,
}

/// Result of a publish: how many connections the event was handed to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PublishedDto {
    pub room: String,
    pub delivered: usize,
}

/// Entry of `GET /api/rooms`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoomSummaryDto {
    pub id: String,
    pub board: String,
    /// Set for thread rooms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<u64>,
    pub members: usize,
}

/// Member entry of `GET /api/rooms/{room_id}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MemberDetailDto {
    pub connection_id: String,
    pub joined_at: String,
}

/// Body of `GET /api/rooms/{room_id}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoomDetailDto {
    pub id: String,
    pub members: Vec<MemberDetailDto>,
}

/// Structured error body.
///
/// `detail` is a machine-readable discriminator (e.g. `INVALID_ROOM`),
/// the same shape the board API uses for its error responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorDto {
    pub detail: String,
    pub message: String,
}
