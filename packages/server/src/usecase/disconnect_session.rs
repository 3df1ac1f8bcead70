//! UseCase: 接続セッションの終了
//!
//! 切断時に Registry から所属を取り除き、送信チャンネルを登録解除します。
//! 何度呼ばれても安全ですが、UI 層は 1 接続につき 1 回だけ呼び出します。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomId, RoomRegistry};

/// 接続セッション終了のユースケース
pub struct DisconnectSessionUseCase {
    /// Registry（ルーム購読状況の抽象化）
    registry: Arc<dyn RoomRegistry>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectSessionUseCase {
    /// 新しい DisconnectSessionUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    /// 切断を実行し、離脱したルームを返す
    pub async fn execute(&self, connection: &ConnectionId) -> Option<RoomId> {
        // 1. Registry から取り除く（以降の publish の対象外になる）
        let left = self.registry.leave(connection).await;

        // 2. MessagePusher から登録解除
        self.message_pusher.unregister_client(connection).await;

        left
    }
}
