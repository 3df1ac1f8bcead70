//! EventRelay trait 定義
//!
//! 書き込み側から受け取ったイベントを、対象ルームの購読者だけに転送する。
//! イベントの検証や変更は行わない純粋な転送層です。
//!
//! 単一プロセス実装（`InProcessEventRelay`）のほか、将来的に外部の
//! pub/sub バックプレーンを使う実装に差し替えられるよう trait にしています。

use async_trait::async_trait;

use super::{RelayError, ResponseRecord, RoomId, ThreadSummary};

/// Event Relay trait
///
/// 同じルームへの publish は、publish された順序で各購読者に届きます。
/// ルームをまたいだ順序は保証しません。配送は best-effort（高々 1 回）です。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRelay: Send + Sync {
    /// 板のスレッド一覧全体を購読者に配信し、渡せた接続数を返す
    async fn publish_threads_changed(
        &self,
        board: RoomId,
        threads: Vec<ThreadSummary>,
    ) -> Result<usize, RelayError>;

    /// スレッドに追加された 1 件のレスを購読者に配信し、渡せた接続数を返す
    async fn publish_response_created(
        &self,
        room: RoomId,
        response: ResponseRecord,
    ) -> Result<usize, RelayError>;
}
