//! 単一プロセス用 EventRelay 実装
//!
//! publish ごとに「購読者のスナップショット取得 → 各接続への送信」を
//! publish ロックの内側で行います。これにより
//!
//! - 同じルームへのイベントは publish された順に各購読者へ届く
//! - スナップショット取得後に join した接続にはそのイベントは届かない
//!
//! 送信はチャンネルへの非ブロッキングな投入だけなので、ロック区間は短く保たれます。

use std::sync::Arc;

use async_trait::async_trait;
use bbs_relay_shared::ServerMessage;
use tokio::sync::Mutex;

use crate::domain::{
    EventRelay, MessagePusher, RelayError, RelayEvent, ResponseRecord, RoomId, RoomRegistry,
    ThreadSummary,
};

/// Registry と MessagePusher を組み合わせたプロセス内 EventRelay
pub struct InProcessEventRelay {
    registry: Arc<dyn RoomRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
    publish_lock: Mutex<()>,
}

impl InProcessEventRelay {
    /// 新しい InProcessEventRelay を作成
    pub fn new(registry: Arc<dyn RoomRegistry>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            registry,
            message_pusher,
            publish_lock: Mutex::new(()),
        }
    }

    async fn publish(&self, event: RelayEvent) -> Result<usize, RelayError> {
        let room = event.room().clone();
        let kind = event.kind();
        let json = serde_json::to_string(&ServerMessage::from(event))?;

        let _guard = self.publish_lock.lock().await;
        let members = self.registry.members_of(&room).await;
        let delivered = self.message_pusher.broadcast(&members, &json).await;

        tracing::debug!(
            "Published '{}' to room '{}' ({}/{} connections)",
            kind,
            room,
            delivered,
            members.len()
        );

        Ok(delivered)
    }
}

#[async_trait]
impl EventRelay for InProcessEventRelay {
    async fn publish_threads_changed(
        &self,
        board: RoomId,
        threads: Vec<ThreadSummary>,
    ) -> Result<usize, RelayError> {
        self.publish(RelayEvent::ThreadsChanged { board, threads })
            .await
    }

    async fn publish_response_created(
        &self,
        room: RoomId,
        response: ResponseRecord,
    ) -> Result<usize, RelayError> {
        self.publish(RelayEvent::ResponseCreated { room, response })
            .await
    }
}
