//! Domain layer: connection/room bookkeeping and the relay seams.
//!
//! The traits defined here are implemented by the infrastructure layer
//! (dependency inversion); use cases only depend on this module.

pub mod entity;
pub mod error;
pub mod event;
pub mod pusher;
pub mod registry;
pub mod relay;
pub mod value_object;

pub use bbs_relay_shared::{ResponseRecord, RoomId, ThreadSummary};
pub use entity::{Membership, RoomSnapshot};
pub use error::{MessagePushError, RelayError};
pub use event::RelayEvent;
pub use pusher::{MessagePusher, PusherChannel};
pub use registry::RoomRegistry;
pub use relay::EventRelay;
pub use value_object::ConnectionId;
