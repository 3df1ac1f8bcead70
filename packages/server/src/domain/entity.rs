//! Read-only snapshots of registry state.

use chrono::{DateTime, Utc};

use super::{ConnectionId, RoomId};

/// A connection's membership in a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub connection: ConnectionId,
    pub joined_at: DateTime<Utc>,
}

/// A room and its current subscribers, ordered by connection id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSnapshot {
    pub id: RoomId,
    pub members: Vec<Membership>,
}
