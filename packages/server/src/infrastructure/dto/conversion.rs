//! Conversion logic between domain snapshots and DTOs.

use bbs_relay_shared::time::to_jst_rfc3339;

use crate::domain::{Membership, RoomSnapshot};
use crate::infrastructure::dto::http as dto;

impl From<&RoomSnapshot> for dto::RoomSummaryDto {
    fn from(snapshot: &RoomSnapshot) -> Self {
        let (board, thread_id) = match snapshot.id.split_thread() {
            Some((board, thread_id)) => (board.to_string(), Some(thread_id)),
            None => (snapshot.id.as_str().to_string(), None),
        };
        Self {
            id: snapshot.id.as_str().to_string(),
            board,
            thread_id,
            members: snapshot.members.len(),
        }
    }
}

impl From<&Membership> for dto::MemberDetailDto {
    fn from(membership: &Membership) -> Self {
        Self {
            connection_id: membership.connection.to_string(),
            joined_at: to_jst_rfc3339(membership.joined_at),
        }
    }
}

impl From<RoomSnapshot> for dto::RoomDetailDto {
    fn from(snapshot: RoomSnapshot) -> Self {
        Self {
            id: snapshot.id.as_str().to_string(),
            members: snapshot.members.iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConnectionId, RoomId};
    use chrono::{TimeZone, Utc};

    fn snapshot() -> RoomSnapshot {
        RoomSnapshot {
            id: RoomId::thread("tech", 42).unwrap(),
            members: vec![Membership {
                connection: ConnectionId::generate(),
                joined_at: Utc.with_ymd_and_hms(2022, 12, 31, 15, 0, 0).unwrap(),
            }],
        }
    }

    #[test]
    fn test_snapshot_to_summary() {
        // テスト項目: スナップショットがメンバー数付きの概要 DTO に変換される
        // given (前提条件):
        let snapshot = snapshot();

        // when (操作):
        let summary = dto::RoomSummaryDto::from(&snapshot);

        // then (期待する結果):
        assert_eq!(summary.id, "tech_42");
        assert_eq!(summary.board, "tech");
        assert_eq!(summary.thread_id, Some(42));
        assert_eq!(summary.members, 1);
    }

    #[test]
    fn test_snapshot_to_detail_uses_jst_timestamps() {
        // テスト項目: 詳細 DTO の参加時刻が JST の RFC 3339 形式になる
        // given (前提条件):
        let snapshot = snapshot();
        let connection = snapshot.members[0].connection;

        // when (操作):
        let detail = dto::RoomDetailDto::from(snapshot);

        // then (期待する結果):
        assert_eq!(detail.members[0].connection_id, connection.to_string());
        assert!(detail.members[0].joined_at.starts_with("2023-01-01T00:00:00"));
    }
}
