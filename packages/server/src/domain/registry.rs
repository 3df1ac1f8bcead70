//! Room Registry trait 定義
//!
//! どの接続がどのルームを購読しているかを管理するインターフェース。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! ## 不変条件
//!
//! - 1 つの接続が所属するルームは高々 1 つ（後の join が前の所属を置き換える）
//! - ルームのメンバー集合に同じ接続が 2 回以上含まれることはない

use async_trait::async_trait;

use super::{ConnectionId, RoomId, RoomSnapshot};

/// Room Registry trait
///
/// 単一プロセス内のメモリ上のブックキーピングを想定しています。
/// 実装は `join` / `leave` / `members_of` を直列化しなければなりません。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRegistry: Send + Sync {
    /// 接続をルームに参加させる
    ///
    /// 既に別のルームに参加している場合はそこから取り除かれます。
    /// 置き換えられた以前のルームを返します（同じルームへの再 join では `None`）。
    async fn join(&self, connection: ConnectionId, room: RoomId) -> Option<RoomId>;

    /// 接続を現在のルームから取り除く
    ///
    /// どこにも参加していなければ何もしません。離脱したルームを返します。
    async fn leave(&self, connection: &ConnectionId) -> Option<RoomId>;

    /// ルームの現在の購読者を取得（未知のルームなら空）
    async fn members_of(&self, room: &RoomId) -> Vec<ConnectionId>;

    /// 接続が現在参加しているルームを取得
    async fn current_room(&self, connection: &ConnectionId) -> Option<RoomId>;

    /// 購読者のいる全ルームのスナップショットを取得
    async fn rooms(&self) -> Vec<RoomSnapshot>;
}
