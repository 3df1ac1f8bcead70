//! Relay server UI layer: axum router, WebSocket sessions and HTTP endpoints.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
