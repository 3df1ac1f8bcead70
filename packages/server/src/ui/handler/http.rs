//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bbs_relay_shared::ResponseRecord;

use crate::{
    domain::RoomId,
    infrastructure::dto::http::{
        ErrorDto, PublishThreadsRequest, PublishedDto, RoomDetailDto, RoomSummaryDto,
    },
    ui::state::AppState,
    usecase::{GetRoomDetailError, PublishError},
};

/// Error returned by the HTTP handlers
#[derive(Debug)]
pub enum HttpError {
    InvalidRoom(String),
    RoomNotFound(String),
    RelayFailed(String),
}

impl From<PublishError> for HttpError {
    fn from(e: PublishError) -> Self {
        match e {
            PublishError::InvalidRoom(e) => Self::InvalidRoom(e.to_string()),
            PublishError::Relay(e) => Self::RelayFailed(e.to_string()),
        }
    }
}

impl From<GetRoomDetailError> for HttpError {
    fn from(e: GetRoomDetailError) -> Self {
        match e {
            GetRoomDetailError::InvalidRoom(e) => Self::InvalidRoom(e.to_string()),
            GetRoomDetailError::RoomNotFound => {
                Self::RoomNotFound("room has no subscribers".to_string())
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, detail, message) = match self {
            Self::InvalidRoom(message) => (StatusCode::BAD_REQUEST, "INVALID_ROOM", message),
            Self::RoomNotFound(message) => (StatusCode::NOT_FOUND, "ROOM_NOT_FOUND", message),
            Self::RelayFailed(message) => {
                tracing::error!("Relay failed: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, "RELAY_FAILED", message)
            }
        };
        let body = ErrorDto {
            detail: detail.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

fn published(room: RoomId, delivered: usize) -> (StatusCode, Json<PublishedDto>) {
    (
        StatusCode::ACCEPTED,
        Json(PublishedDto {
            room: room.into_string(),
            delivered,
        }),
    )
}

/// Publish the updated thread list of a board
pub async fn publish_threads_changed(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Json(request): Json<PublishThreadsRequest>,
) -> Result<(StatusCode, Json<PublishedDto>), HttpError> {
    let (room, delivered) = state
        .publish_event_usecase
        .threads_changed(&board, request.threads)
        .await?;
    Ok(published(room, delivered))
}

/// Publish a response appended to a thread
pub async fn publish_response_created(
    State(state): State<Arc<AppState>>,
    Path((board, thread_id)): Path<(String, u64)>,
    Json(response): Json<ResponseRecord>,
) -> Result<(StatusCode, Json<PublishedDto>), HttpError> {
    let (room, delivered) = state
        .publish_event_usecase
        .response_created(&board, thread_id, response)
        .await?;
    Ok(published(room, delivered))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of rooms with at least one subscriber
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.get_rooms_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(rooms.iter().map(RoomSummaryDto::from).collect())
}

/// Get room detail by ID
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, HttpError> {
    let room = state.get_room_detail_usecase.execute(room_id).await?;
    Ok(Json(room.into()))
}
