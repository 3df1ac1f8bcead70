//! Logging setup utilities for the relay binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// The filter covers every crate of the workspace plus the binary itself.
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "bbs-relay-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use bbs_relay_shared::logger::setup_logger;
///
/// setup_logger("bbs-relay-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn default_filter(binary_name: &str, level: &str) -> String {
    let binary = binary_name.replace('-', "_");
    format!(
        "bbs_relay_shared={level},bbs_relay_server={level},bbs_relay_client={level},{binary}={level},tower_http={level}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_workspace_crates() {
        // テスト項目: デフォルトのフィルタがワークスペースの全クレートとバイナリを含む
        // given (前提条件):
        let binary = "bbs-relay-server";

        // when (操作):
        let filter = default_filter(binary, "info");

        // then (期待する結果):
        assert!(filter.contains("bbs_relay_shared=info"));
        assert!(filter.contains("bbs_relay_server=info"));
        assert!(filter.contains("bbs_relay_client=info"));
        assert!(filter.contains("tower_http=info"));
    }
}
