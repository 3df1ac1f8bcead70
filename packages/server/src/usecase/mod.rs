//! UseCase layer: application operations of the relay.
//!
//! Each use case depends only on the domain traits; the UI layer wires them
//! to WebSocket sessions and HTTP endpoints.

mod connect_session;
mod disconnect_session;
mod error;
mod get_rooms;
mod join_room;
mod publish_event;

pub use connect_session::ConnectSessionUseCase;
pub use disconnect_session::DisconnectSessionUseCase;
pub use error::{GetRoomDetailError, PublishError, ReplyError};
pub use get_rooms::{GetRoomDetailUseCase, GetRoomsUseCase};
pub use join_room::JoinRoomUseCase;
pub use publish_event::PublishEventUseCase;
