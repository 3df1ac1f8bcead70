//! HTTP and WebSocket handlers.

mod http;
mod websocket;

pub use http::{
    get_room_detail, get_rooms, health_check, publish_response_created, publish_threads_changed,
};
pub use websocket::websocket_handler;
