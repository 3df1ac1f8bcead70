//! Client side of the board relay.
//!
//! - `reconciler`: page state machine that merges relayed events into what is shown
//! - `api`: authoritative read API of the board
//! - `session`, `runner`: one relay connection per page load, with reconnection
//! - `terminal`: renders a page to a terminal

pub mod api;
pub mod error;
pub mod reconciler;
pub mod runner;
pub mod session;
pub mod terminal;

pub use error::{ApiError, ClientError, ReconcileError};
pub use runner::{ClientConfig, run_client};
