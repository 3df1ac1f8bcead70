//! Server execution logic.

use std::{future::Future, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    domain::{EventRelay, MessagePusher, RoomRegistry},
    infrastructure::{
        message_pusher::WebSocketMessagePusher, registry::InMemoryRoomRegistry,
        relay::InProcessEventRelay,
    },
};

use super::{
    handler::{
        get_room_detail, get_rooms, health_check, publish_response_created,
        publish_threads_changed, websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Realtime relay server
///
/// This struct encapsulates the use cases and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::in_memory();
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
}

impl Server {
    /// Wire every use case to the given backend implementations
    pub fn with_backend(
        registry: Arc<dyn RoomRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
        relay: Arc<dyn EventRelay>,
    ) -> Self {
        Self {
            state: Arc::new(AppState::with_backend(registry, message_pusher, relay)),
        }
    }

    /// Single-process server: in-memory registry, WebSocket pusher, in-process relay
    pub fn in_memory() -> Self {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let message_pusher = Arc::new(WebSocketMessagePusher::default());
        let relay = Arc::new(InProcessEventRelay::new(
            registry.clone(),
            message_pusher.clone(),
        ));
        Self::with_backend(registry, message_pusher, relay)
    }

    /// Build the axum router
    pub fn router(&self) -> Router {
        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // 書き込み側からの publish
            .route(
                "/api/relay/boards/{board}/threads",
                post(publish_threads_changed),
            )
            .route(
                "/api/relay/boards/{board}/threads/{thread_id}/responses",
                post(publish_response_created),
            )
            // 参照系
            .route("/api/health", get(health_check))
            .route("/api/rooms", get(get_rooms))
            .route("/api/rooms/{room_id}", get(get_room_detail))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Run the relay server until Ctrl+C / SIGTERM
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Relay server listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
    }
}
