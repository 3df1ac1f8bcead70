//! Realtime update relay server.
//!
//! Accepts WebSocket subscribers on `/ws` and fans out events that the
//! board's write path publishes over HTTP.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin bbs-relay-server
//! cargo run --bin bbs-relay-server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use bbs_relay_server::{
    infrastructure::{
        message_pusher::WebSocketMessagePusher, registry::InMemoryRoomRegistry,
        relay::InProcessEventRelay,
    },
    ui::Server,
};
use bbs_relay_shared::logger::setup_logger;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bbs-relay-server")]
#[command(about = "Realtime update relay for board and thread pages", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Default log level when RUST_LOG is not set
    #[arg(short = 'l', long, default_value = "debug")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Initialize dependencies in order:
    // 1. Registry
    // 2. MessagePusher
    // 3. EventRelay
    // 4. Server (UseCases + AppState)

    // 1. Create Registry (in-memory)
    let registry = Arc::new(InMemoryRoomRegistry::new());

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::default());

    // 3. Create EventRelay (single process)
    let relay = Arc::new(InProcessEventRelay::new(
        registry.clone(),
        message_pusher.clone(),
    ));

    // 4. Create and run the server
    let server = Server::with_backend(registry, message_pusher, relay);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
