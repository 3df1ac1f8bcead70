//! UseCase: 接続セッションの開始
//!
//! WebSocket 接続ごとに ConnectionId を割り当て、送信チャンネルを
//! MessagePusher に登録します。ルームへの参加は `joinRoom` を受け取るまで行いません。

use std::sync::Arc;

use bbs_relay_shared::ServerMessage;

use crate::domain::{ConnectionId, MessagePusher, PusherChannel};

use super::error::ReplyError;

/// 接続セッション開始のユースケース
pub struct ConnectSessionUseCase {
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectSessionUseCase {
    /// 新しい ConnectSessionUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// 接続を登録し、割り当てた ConnectionId を返す
    pub async fn execute(&self, sender: PusherChannel) -> ConnectionId {
        let connection = ConnectionId::generate();
        self.message_pusher.register_client(connection, sender).await;
        connection
    }

    /// 接続 1 つだけにメッセージを返信
    ///
    /// ブロードキャストと同じチャンネルを通るので、配信順は保たれます。
    pub async fn reply(
        &self,
        connection: &ConnectionId,
        message: &ServerMessage,
    ) -> Result<(), ReplyError> {
        let json = serde_json::to_string(message)?;
        self.message_pusher.push_to(connection, &json).await?;
        Ok(())
    }
}
