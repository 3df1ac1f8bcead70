//! Terminal client that keeps a board or thread page up to date.
//!
//! Loads the page from the board API, subscribes to its room on the relay and
//! prints new threads and responses as they are relayed. Reconnects on
//! disconnection (max 5 attempts with 5 second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin bbs-relay-client -- --board tech
//! cargo run --bin bbs-relay-client -- -b tech -t 42
//! ```

use bbs_relay_client::{ClientConfig, reconciler::Page, run_client};
use bbs_relay_shared::logger::setup_logger;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bbs-relay-client")]
#[command(about = "Follow a board or thread through the realtime relay", long_about = None)]
struct Args {
    /// Board slug
    #[arg(short = 'b', long)]
    board: String,

    /// Thread number; omit to follow the board's thread list
    #[arg(short = 't', long)]
    thread: Option<u64>,

    /// WebSocket URL of the relay
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8080/ws")]
    relay_url: String,

    /// Origin of the board API
    #[arg(short = 'a', long, default_value = "http://127.0.0.1:8000")]
    api_url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    let page = match args.thread {
        Some(thread_id) => Page::thread(args.board, thread_id),
        None => Page::board(args.board),
    };
    let config = ClientConfig {
        relay_url: args.relay_url,
        api_url: args.api_url,
        page,
    };

    // Run the client
    if let Err(e) = run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
