//! WebSocket connection handlers.
//!
//! One socket is one Connection Session: it is registered on upgrade, may
//! switch rooms any number of times via `joinRoom`, and is removed from the
//! registry exactly once when either direction of the socket ends.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use bbs_relay_shared::{ClientMessage, ServerMessage};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{domain::ConnectionId, ui::state::AppState};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// Both relay broadcasts and direct replies go through this channel, so the
/// client observes them in the order they were queued.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    // Create a channel for this connection to receive messages
    let (tx, rx) = mpsc::unbounded_channel();
    let connection = state.connect_session_usecase.execute(tx).await;
    tracing::info!("Connection '{}' opened", connection);

    let (sender, mut receiver) = socket.split();

    let state_clone = state.clone();

    // Spawn a task to receive frames from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_text_frame(&state_clone, connection, text.as_str()).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping from '{}'", connection);
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to forward relayed events to this client
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, stop the other
    let pending = tokio::select! {
        _ = &mut recv_task => send_task,
        _ = &mut send_task => recv_task,
    };

    end_session(&state, connection, pending).await;
}

/// Stop the remaining socket task, then remove the connection from the registry.
///
/// The task is awaited after `abort()` so a `joinRoom` it is still applying
/// lands before `leave` runs.
async fn end_session(state: &AppState, connection: ConnectionId, pending: JoinHandle<()>) {
    pending.abort();
    if let Err(e) = pending.await
        && !e.is_cancelled()
    {
        tracing::warn!("Socket task of '{}' failed: {}", connection, e);
    }

    match state.disconnect_session_usecase.execute(&connection).await {
        Some(room) => tracing::info!("Connection '{}' closed, left room '{}'", connection, room),
        None => tracing::info!("Connection '{}' closed without joining a room", connection),
    }
}

async fn handle_text_frame(state: &AppState, connection: ConnectionId, text: &str) {
    let room = match serde_json::from_str::<ClientMessage>(text) {
        Ok(ClientMessage::JoinRoom { room }) => room,
        Err(e) => {
            tracing::warn!("Rejected frame from '{}': {}", connection, e);
            let error = ServerMessage::Error {
                detail: "INVALID_FRAME".to_string(),
                message: e.to_string(),
            };
            if let Err(e) = state
                .connect_session_usecase
                .reply(&connection, &error)
                .await
            {
                tracing::warn!("Failed to reply to '{}': {}", connection, e);
            }
            return;
        }
    };

    match state
        .join_room_usecase
        .execute(connection, room.clone())
        .await
    {
        Ok(Some(previous)) => {
            tracing::info!(
                "Connection '{}' moved from '{}' to '{}'",
                connection,
                previous,
                room
            );
        }
        Ok(None) => tracing::info!("Connection '{}' joined '{}'", connection, room),
        Err(e) => tracing::warn!("Failed to acknowledge join of '{}': {}", connection, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::{
        domain::{EventRelay, MessagePusher, RoomId, RoomRegistry, RoomSnapshot},
        infrastructure::{
            message_pusher::WebSocketMessagePusher, registry::InMemoryRoomRegistry,
            relay::InProcessEventRelay,
        },
    };

    /// Registry whose `join` blocks its worker thread before inserting
    struct BlockingJoinRegistry {
        inner: InMemoryRoomRegistry,
        delay: Duration,
    }

    #[async_trait]
    impl RoomRegistry for BlockingJoinRegistry {
        async fn join(&self, connection: ConnectionId, room: RoomId) -> Option<RoomId> {
            std::thread::sleep(self.delay);
            self.inner.join(connection, room).await
        }

        async fn leave(&self, connection: &ConnectionId) -> Option<RoomId> {
            self.inner.leave(connection).await
        }

        async fn members_of(&self, room: &RoomId) -> Vec<ConnectionId> {
            self.inner.members_of(room).await
        }

        async fn current_room(&self, connection: &ConnectionId) -> Option<RoomId> {
            self.inner.current_room(connection).await
        }

        async fn rooms(&self) -> Vec<RoomSnapshot> {
            self.inner.rooms().await
        }
    }

    fn state_with(registry: Arc<dyn RoomRegistry>) -> AppState {
        let message_pusher: Arc<dyn MessagePusher> = Arc::new(WebSocketMessagePusher::default());
        let relay: Arc<dyn EventRelay> = Arc::new(InProcessEventRelay::new(
            registry.clone(),
            message_pusher.clone(),
        ));
        AppState::with_backend(registry, message_pusher, relay)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_disconnect_during_join_leaves_no_membership() {
        // テスト項目: joinRoom の処理中に切断しても、ルームに接続が残らない
        // given (前提条件):
        let registry = Arc::new(BlockingJoinRegistry {
            inner: InMemoryRoomRegistry::new(),
            delay: Duration::from_millis(200),
        });
        let state = Arc::new(state_with(registry.clone()));
        let (tx, _rx) = mpsc::unbounded_channel();
        let connection = state.connect_session_usecase.execute(tx).await;

        let worker_state = state.clone();
        let joining = tokio::spawn(async move {
            handle_text_frame(
                &worker_state,
                connection,
                r#"{"type":"joinRoom","room":"tech"}"#,
            )
            .await;
        });
        tokio::time::sleep(Duration::from_millis(50)).await;

        // when (操作):
        end_session(&state, connection, joining).await;

        // then (期待する結果):
        let room = RoomId::board("tech").unwrap();
        assert!(registry.members_of(&room).await.is_empty());
        assert_eq!(registry.current_room(&connection).await, None);
    }

    #[tokio::test]
    async fn test_invalid_frame_gets_error_reply() {
        // テスト項目: 不正なフレームには INVALID_FRAME のエラーが返り、ルームには参加しない
        // given (前提条件):
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let state = state_with(registry.clone());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let connection = state.connect_session_usecase.execute(tx).await;

        // when (操作):
        handle_text_frame(&state, connection, r#"{"type":"joinRoom","room":""}"#).await;

        // then (期待する結果):
        let reply: ServerMessage = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
        assert!(matches!(reply, ServerMessage::Error { ref detail, .. } if detail == "INVALID_FRAME"));
        assert_eq!(registry.current_room(&connection).await, None);
    }
}
