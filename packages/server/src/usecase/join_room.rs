//! UseCase: ルームへの参加
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - Registry への join と、参加確認（roomJoined）の返信
//!
//! ### どのような状況を想定しているか
//! - 正常系：初めての join
//! - 正常系：別ルームへの再 join（前のルームから外れる）
//! - 異常系：返信先の接続が既に切断されている

use std::sync::Arc;

use bbs_relay_shared::ServerMessage;

use crate::domain::{ConnectionId, MessagePusher, RoomId, RoomRegistry};

use super::error::ReplyError;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// Registry（ルーム購読状況の抽象化）
    registry: Arc<dyn RoomRegistry>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    /// ルーム参加を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Some(RoomId))` - 置き換えられた以前のルーム
    /// * `Ok(None)` - 以前の所属なし（または同じルームへの再 join）
    /// * `Err(ReplyError)` - 参加確認を返信できなかった
    pub async fn execute(
        &self,
        connection: ConnectionId,
        room: RoomId,
    ) -> Result<Option<RoomId>, ReplyError> {
        // 1. Registry に参加（以前の所属は取り除かれる）
        let previous = self.registry.join(connection, room.clone()).await;

        // 2. 参加確認を返信
        let ack = serde_json::to_string(&ServerMessage::RoomJoined { room })?;
        self.message_pusher.push_to(&connection, &ack).await?;

        Ok(previous)
    }
}
