//! EventRelay の実装
//!
//! - `in_process`: 単一プロセス内の Registry と MessagePusher を使う実装
//! - 複数インスタンス構成では外部の pub/sub を使う実装を追加する

pub mod in_process;

pub use in_process::InProcessEventRelay;
