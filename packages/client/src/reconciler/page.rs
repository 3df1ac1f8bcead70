//! The page a reader is looking at.

use std::fmt;

use bbs_relay_shared::{RoomId, RoomIdError};

/// A board's thread list or a single thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Board { board: String },
    Thread { board: String, thread_id: u64 },
}

impl Page {
    pub fn board(board: impl Into<String>) -> Self {
        Self::Board {
            board: board.into(),
        }
    }

    pub fn thread(board: impl Into<String>, thread_id: u64) -> Self {
        Self::Thread {
            board: board.into(),
            thread_id,
        }
    }

    /// Room whose events this page consumes
    pub fn room(&self) -> Result<RoomId, RoomIdError> {
        match self {
            Self::Board { board } => RoomId::board(board),
            Self::Thread { board, thread_id } => RoomId::thread(board, *thread_id),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Board { .. } => "board",
            Self::Thread { .. } => "thread",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board { board } => write!(f, "/{board}"),
            Self::Thread { board, thread_id } => write!(f, "/{board}/{thread_id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_room() {
        // テスト項目: 板ページは板のルーム、スレッドページは "{board}_{id}" のルームを購読する
        // given (前提条件):
        let board = Page::board("tech");
        let thread = Page::thread("tech", 42);

        // when (操作) / then (期待する結果):
        assert_eq!(board.room().unwrap().as_str(), "tech");
        assert_eq!(thread.room().unwrap().as_str(), "tech_42");
        assert_eq!(thread.to_string(), "/tech/42");
    }

    #[test]
    fn test_page_room_rejects_invalid_board() {
        // テスト項目: 不正な板名からはルームを作れない
        // given (前提条件):
        let page = Page::board("");

        // when (操作):
        let room = page.room();

        // then (期待する結果):
        assert_eq!(room, Err(RoomIdError::Empty));
    }
}
