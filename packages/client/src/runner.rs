//! Client execution logic with reconnection support.

use std::time::Duration;

use crate::{
    api::HttpBoardApi,
    error::ClientError,
    reconciler::{Page, Reconciler},
    session::run_page_session,
    terminal::{TerminalBell, TerminalView},
};

const MAX_RECONNECT_ATTEMPTS: u32 = 5;
const RECONNECT_INTERVAL_SECS: u64 = 5;

/// Where to connect and which page to show
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// WebSocket URL of the relay, e.g. `ws://127.0.0.1:8080/ws`
    pub relay_url: String,
    /// Origin of the board API, e.g. `http://127.0.0.1:8000`
    pub api_url: String,
    pub page: Page,
}

/// Check if the client should attempt to reconnect.
///
/// Configuration errors never heal on retry; everything else is retried
/// until `max_attempts` is reached.
pub fn should_attempt_reconnect(
    error: &ClientError,
    current_attempt: u32,
    max_attempts: u32,
) -> bool {
    if matches!(error, ClientError::InvalidPage(_) | ClientError::Encode(_)) {
        return false;
    }
    current_attempt < max_attempts
}

/// Run the page with reconnection logic until Ctrl+C
///
/// Every attempt is a fresh page load: a new reconciler, a new subscription
/// and a new initial fetch.
pub async fn run_client(config: ClientConfig) -> Result<(), ClientError> {
    let api = HttpBoardApi::new(config.api_url.clone());
    let mut reconnect_count = 0;

    loop {
        tracing::info!(
            "Opening {} via {} (attempt {}/{})",
            config.page,
            config.relay_url,
            reconnect_count + 1,
            MAX_RECONNECT_ATTEMPTS
        );

        let mut reconciler = Reconciler::new(
            config.page.clone(),
            TerminalView::stdout(),
            TerminalBell::stdout(),
        )?;

        let result = tokio::select! {
            result = run_page_session(&config.relay_url, &api, &mut reconciler) => result,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                return Ok(());
            }
        };

        let Err(e) = result else {
            tracing::info!("Client session ended normally");
            return Ok(());
        };

        tracing::warn!("Connection lost: {}", e);
        reconnect_count += 1;

        if !should_attempt_reconnect(&e, reconnect_count, MAX_RECONNECT_ATTEMPTS) {
            if reconnect_count < MAX_RECONNECT_ATTEMPTS {
                return Err(e);
            }
            tracing::error!(
                "Failed to reconnect after {} attempts. Exiting.",
                MAX_RECONNECT_ATTEMPTS
            );
            return Err(ClientError::ReconnectExhausted(MAX_RECONNECT_ATTEMPTS));
        }

        tracing::info!(
            "Reconnecting in {} seconds... (attempt {}/{})",
            RECONNECT_INTERVAL_SECS,
            reconnect_count + 1,
            MAX_RECONNECT_ATTEMPTS
        );

        tokio::time::sleep(Duration::from_secs(RECONNECT_INTERVAL_SECS)).await;
    }
}
