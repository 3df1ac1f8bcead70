//! Data Transfer Objects (DTOs) for the relay's HTTP surface.
//!
//! WebSocket frames live in `bbs_relay_shared::protocol`, since clients
//! need them too.

pub mod conversion;
pub mod http;
