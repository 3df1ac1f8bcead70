//! MessagePusher trait 定義
//!
//! 接続中のクライアントへフレームを送り届けるためのインターフェース。
//! WebSocket の sender の管理は Infrastructure 層が担当します。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError};

/// クライアントへの送信チャンネル（送信順がそのまま配送順になる）
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// MessagePusher trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続の送信チャンネルを登録
    async fn register_client(&self, connection: ConnectionId, sender: PusherChannel);

    /// 接続の送信チャンネルを登録解除
    async fn unregister_client(&self, connection: &ConnectionId);

    /// 特定の接続にメッセージを送信
    async fn push_to(&self, connection: &ConnectionId, content: &str)
    -> Result<(), MessagePushError>;

    /// 複数の接続にメッセージを送信
    ///
    /// 切断済みの接続への送信失敗は読み捨て、実際に渡せた接続数を返します。
    async fn broadcast(&self, targets: &[ConnectionId], content: &str) -> usize;
}
