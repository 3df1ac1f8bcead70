//! Room identifier value object.
//!
//! A room is the partition key of the relay: either a board slug (`"tech"`)
//! or a thread inside a board (`"tech_42"`). It carries no state of its own.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of a room identifier in bytes
pub const ROOM_ID_MAX_LEN: usize = 128;

/// Errors raised while validating a room identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomIdError {
    #[error("room id must not be empty")]
    Empty,

    #[error("room id is too long ({0} bytes, max {ROOM_ID_MAX_LEN})")]
    TooLong(usize),

    #[error("room id contains an invalid character: {0:?}")]
    InvalidCharacter(char),
}

/// Room identifier (board slug or `{board}_{threadId}`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomId(String);

impl RoomId {
    /// Validate and wrap a raw room identifier
    pub fn new(value: String) -> Result<Self, RoomIdError> {
        if value.is_empty() {
            return Err(RoomIdError::Empty);
        }
        if value.len() > ROOM_ID_MAX_LEN {
            return Err(RoomIdError::TooLong(value.len()));
        }
        if let Some(c) = value
            .chars()
            .find(|c| c.is_whitespace() || c.is_control() || *c == '/')
        {
            return Err(RoomIdError::InvalidCharacter(c));
        }
        Ok(Self(value))
    }

    /// Room of a whole board
    pub fn board(board: &str) -> Result<Self, RoomIdError> {
        Self::new(board.to_string())
    }

    /// Room of a single thread inside a board
    pub fn thread(board: &str, thread_id: u64) -> Result<Self, RoomIdError> {
        Self::new(format!("{board}_{thread_id}"))
    }

    /// Split a thread room into `(board, thread_id)`.
    ///
    /// Board slugs may contain `_`, so the split happens on the last one.
    /// Returns `None` for board rooms.
    pub fn split_thread(&self) -> Option<(&str, u64)> {
        let (board, thread_id) = self.0.rsplit_once('_')?;
        if board.is_empty() {
            return None;
        }
        thread_id.parse().ok().map(|id| (board, id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = RoomIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoomId> for String {
    fn from(room: RoomId) -> Self {
        room.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_room_is_valid() {
        // テスト項目: 板のスラッグがそのままルーム ID になる
        // given (前提条件):
        let board = "tech";

        // when (操作):
        let room = RoomId::board(board).unwrap();

        // then (期待する結果):
        assert_eq!(room.as_str(), "tech");
        assert_eq!(room.split_thread(), None);
    }

    #[test]
    fn test_thread_room_uses_composite_format() {
        // テスト項目: スレッドのルーム ID は "{board}_{threadId}" 形式になる
        // given (前提条件):
        let board = "tech";

        // when (操作):
        let room = RoomId::thread(board, 42).unwrap();

        // then (期待する結果):
        assert_eq!(room.as_str(), "tech_42");
        assert_eq!(room.split_thread(), Some(("tech", 42)));
    }

    #[test]
    fn test_split_thread_uses_last_underscore() {
        // テスト項目: 板のスラッグに "_" を含む場合は最後の "_" で分割される
        // given (前提条件):
        let room = RoomId::thread("news_plus", 7).unwrap();

        // when (操作):
        let split = room.split_thread();

        // then (期待する結果):
        assert_eq!(split, Some(("news_plus", 7)));
    }

    #[test]
    fn test_split_thread_with_non_numeric_suffix() {
        // テスト項目: 末尾が数値でない場合はスレッドとして扱わない
        // given (前提条件):
        let room = RoomId::board("news_plus").unwrap();

        // when (操作):
        let split = room.split_thread();

        // then (期待する結果):
        assert_eq!(split, None);
    }

    #[test]
    fn test_rejects_empty_and_invalid_rooms() {
        // テスト項目: 空文字・空白・スラッシュ・長すぎる ID は拒否される
        // given (前提条件):
        let too_long = "a".repeat(ROOM_ID_MAX_LEN + 1);

        // when (操作) / then (期待する結果):
        assert_eq!(RoomId::new(String::new()), Err(RoomIdError::Empty));
        assert_eq!(
            RoomId::new("te ch".to_string()),
            Err(RoomIdError::InvalidCharacter(' '))
        );
        assert_eq!(
            RoomId::new("tech/42".to_string()),
            Err(RoomIdError::InvalidCharacter('/'))
        );
        assert_eq!(
            RoomId::new(too_long),
            Err(RoomIdError::TooLong(ROOM_ID_MAX_LEN + 1))
        );
    }

    #[test]
    fn test_deserialize_validates_room() {
        // テスト項目: JSON からのデシリアライズ時にもバリデーションされる
        // given (前提条件):
        let valid = r#""tech_42""#;
        let invalid = r#""""#;

        // when (操作):
        let ok: Result<RoomId, _> = serde_json::from_str(valid);
        let err: Result<RoomId, _> = serde_json::from_str(invalid);

        // then (期待する結果):
        assert_eq!(ok.unwrap().as_str(), "tech_42");
        assert!(err.is_err());
    }
}
