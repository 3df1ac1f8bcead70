//! One relay connection for one page load.

use std::{future::Future, pin::Pin};

use bbs_relay_shared::ClientMessage;
use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use crate::{
    api::{BoardApi, fetch_snapshot},
    error::{ApiError, ClientError},
    reconciler::{Notifier, Outcome, PageSnapshot, Reconciler, View},
};

type SnapshotFuture<'a> = Pin<Box<dyn Future<Output = Result<PageSnapshot, ApiError>> + Send + 'a>>;

/// Run a page session until the relay connection ends
///
/// Subscribes to the page's room, then starts the initial fetch once the
/// relay has acknowledged the subscription. Events that arrive before the
/// fetch completes are buffered by the reconciler.
///
/// # Errors
///
/// Returns `ConnectionError` if the relay cannot be reached and
/// `ConnectionLost` when an established connection ends.
pub async fn run_page_session<A, V, N>(
    relay_url: &str,
    api: &A,
    reconciler: &mut Reconciler<V, N>,
) -> Result<(), ClientError>
where
    A: BoardApi + ?Sized,
    V: View,
    N: Notifier,
{
    let (ws_stream, _) = connect_async(relay_url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;
    tracing::info!("Connected to relay at {}", relay_url);

    let (mut write, mut read) = ws_stream.split();

    reconciler.begin_loading();
    let join = serde_json::to_string(&ClientMessage::JoinRoom {
        room: reconciler.room().clone(),
    })?;
    if let Err(e) = write.send(Message::Text(join.into())).await {
        tracing::warn!("Failed to send joinRoom: {}", e);
        return Err(ClientError::ConnectionLost);
    }

    let mut fetch: SnapshotFuture<'_> = Box::pin(std::future::pending());
    let mut fetching = false;
    let mut fetch_started = false;

    loop {
        tokio::select! {
            frame = read.next() => match frame {
                Some(Ok(Message::Text(text))) => match reconciler.handle_frame(text.as_str()) {
                    Ok(Outcome::Joined) if !fetch_started => {
                        let page = reconciler.page().clone();
                        fetch = Box::pin(async move { fetch_snapshot(api, &page).await });
                        fetching = true;
                        fetch_started = true;
                    }
                    Ok(_) => {}
                    Err(e) => tracing::debug!("Frame skipped: {}", e),
                },
                Some(Ok(Message::Close(_))) => {
                    tracing::info!("Relay closed the connection");
                    return Err(ClientError::ConnectionLost);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    return Err(ClientError::ConnectionLost);
                }
                None => return Err(ClientError::ConnectionLost),
            },
            result = &mut fetch, if fetching => {
                fetching = false;
                fetch = Box::pin(std::future::pending());
                match result {
                    Ok(snapshot) => {
                        if let Err(e) = reconciler.apply_snapshot(snapshot) {
                            reconciler.fail_loading(&e.to_string());
                        }
                    }
                    Err(e) => reconciler.fail_loading(&e.user_message()),
                }
            }
        }
    }
}
