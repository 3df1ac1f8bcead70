//! InMemory Room Registry 実装
//!
//! ドメイン層が定義する RoomRegistry trait の具体的な実装。
//! ルーム → メンバー集合と、接続 → 所属ルームの 2 つの索引を
//! 1 つの Mutex で保護し、両者が食い違わないようにしています。

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use async_trait::async_trait;
use bbs_relay_shared::time::{Clock, SystemClock};
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, Membership, RoomId, RoomRegistry, RoomSnapshot};

#[derive(Default)]
struct Rooms {
    /// Key: room, Value: members with their join time
    members: HashMap<RoomId, BTreeMap<ConnectionId, DateTime<Utc>>>,
    /// Key: connection, Value: the single room it belongs to
    memberships: HashMap<ConnectionId, RoomId>,
}

impl Rooms {
    fn remove(&mut self, connection: &ConnectionId) -> Option<RoomId> {
        let room = self.memberships.remove(connection)?;
        if let Some(members) = self.members.get_mut(&room) {
            members.remove(connection);
            if members.is_empty() {
                self.members.remove(&room);
            }
        }
        Some(room)
    }
}

/// インメモリ Room Registry 実装
pub struct InMemoryRoomRegistry {
    rooms: Mutex<Rooms>,
    clock: Arc<dyn Clock>,
}

impl InMemoryRoomRegistry {
    /// システム時計を使う InMemoryRoomRegistry を作成
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// 参加時刻の記録に使う時計を指定して作成
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            rooms: Mutex::new(Rooms::default()),
            clock,
        }
    }
}

impl Default for InMemoryRoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomRegistry for InMemoryRoomRegistry {
    async fn join(&self, connection: ConnectionId, room: RoomId) -> Option<RoomId> {
        let mut rooms = self.rooms.lock().await;

        if rooms.memberships.get(&connection) == Some(&room) {
            tracing::debug!("Connection '{}' already in room '{}'", connection, room);
            return None;
        }

        let previous = rooms.remove(&connection);
        let joined_at = self.clock.now();
        rooms
            .members
            .entry(room.clone())
            .or_default()
            .insert(connection, joined_at);
        rooms.memberships.insert(connection, room.clone());

        match &previous {
            Some(prev) => tracing::debug!(
                "Connection '{}' moved from room '{}' to '{}'",
                connection,
                prev,
                room
            ),
            None => tracing::debug!("Connection '{}' joined room '{}'", connection, room),
        }

        previous
    }

    async fn leave(&self, connection: &ConnectionId) -> Option<RoomId> {
        let mut rooms = self.rooms.lock().await;
        let left = rooms.remove(connection);
        if let Some(room) = &left {
            tracing::debug!("Connection '{}' left room '{}'", connection, room);
        }
        left
    }

    async fn members_of(&self, room: &RoomId) -> Vec<ConnectionId> {
        let rooms = self.rooms.lock().await;
        rooms
            .members
            .get(room)
            .map(|members| members.keys().copied().collect())
            .unwrap_or_default()
    }

    async fn current_room(&self, connection: &ConnectionId) -> Option<RoomId> {
        let rooms = self.rooms.lock().await;
        rooms.memberships.get(connection).cloned()
    }

    async fn rooms(&self) -> Vec<RoomSnapshot> {
        let rooms = self.rooms.lock().await;
        let mut snapshots: Vec<RoomSnapshot> = rooms
            .members
            .iter()
            .map(|(id, members)| RoomSnapshot {
                id: id.clone(),
                members: members
                    .iter()
                    .map(|(connection, joined_at)| Membership {
                        connection: *connection,
                        joined_at: *joined_at,
                    })
                    .collect(),
            })
            .collect();

        // Sort by room id for consistent ordering
        snapshots.sort_by(|a, b| a.id.cmp(&b.id));

        snapshots
    }
}
