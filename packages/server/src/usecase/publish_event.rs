//! UseCase: 書き込み側からのイベント publish
//!
//! 板・スレッドの確定した変更を EventRelay に流します。
//! ここで行うのはルーム ID の組み立てと検証だけで、
//! イベントの中身の検証は書き込み側（このサービスの外）の責務です。

use std::sync::Arc;

use crate::domain::{EventRelay, ResponseRecord, RoomId, ThreadSummary};

use super::error::PublishError;

/// イベント publish のユースケース
pub struct PublishEventUseCase {
    /// EventRelay（配信バックエンドの抽象化）
    relay: Arc<dyn EventRelay>,
}

impl PublishEventUseCase {
    /// 新しい PublishEventUseCase を作成
    pub fn new(relay: Arc<dyn EventRelay>) -> Self {
        Self { relay }
    }

    /// 板のスレッド一覧の変更を publish
    ///
    /// # Returns
    ///
    /// 対象ルームと、イベントを渡せた接続数
    pub async fn threads_changed(
        &self,
        board: &str,
        threads: Vec<ThreadSummary>,
    ) -> Result<(RoomId, usize), PublishError> {
        let room = RoomId::board(board)?;
        let delivered = self
            .relay
            .publish_threads_changed(room.clone(), threads)
            .await?;
        tracing::info!("Relayed updateThreads to '{}' ({} connections)", room, delivered);
        Ok((room, delivered))
    }

    /// スレッドへのレス追加を publish
    pub async fn response_created(
        &self,
        board: &str,
        thread_id: u64,
        response: ResponseRecord,
    ) -> Result<(RoomId, usize), PublishError> {
        let room = RoomId::thread(board, thread_id)?;
        let delivered = self
            .relay
            .publish_response_created(room.clone(), response)
            .await?;
        tracing::info!("Relayed newResponse to '{}' ({} connections)", room, delivered);
        Ok((room, delivered))
    }
}
