//! Types and utilities shared by the relay server and its clients.
//!
//! - `protocol`: JSON messages exchanged over the relay WebSocket
//! - `room`: the `RoomId` partition key
//! - `logger`, `time`: ambient helpers used by both binaries

pub mod logger;
pub mod protocol;
pub mod room;
pub mod time;

pub use protocol::{
    ClientMessage, ResponseAttributes, ResponseRecord, ServerMessage, ThreadSummary,
};
pub use room::{RoomId, RoomIdError};
