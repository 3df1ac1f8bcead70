//! Room Registry の実装
//!
//! - `inmemory`: プロセス内の HashMap / BTreeMap を使った実装

pub mod inmemory;

pub use inmemory::InMemoryRoomRegistry;
