//! Domain events forwarded by the relay.

use bbs_relay_shared::ServerMessage;

use super::{ResponseRecord, RoomId, ThreadSummary};

/// A change notification coming from the authoritative write path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayEvent {
    /// The thread list of a board changed; carries the whole list
    ThreadsChanged {
        board: RoomId,
        threads: Vec<ThreadSummary>,
    },
    /// A response was appended to a thread
    ResponseCreated {
        room: RoomId,
        response: ResponseRecord,
    },
}

impl RelayEvent {
    /// Room whose subscribers receive this event
    pub fn room(&self) -> &RoomId {
        match self {
            Self::ThreadsChanged { board, .. } => board,
            Self::ResponseCreated { room, .. } => room,
        }
    }

    /// Name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ThreadsChanged { .. } => "updateThreads",
            Self::ResponseCreated { .. } => "newResponse",
        }
    }
}

impl From<RelayEvent> for ServerMessage {
    fn from(event: RelayEvent) -> Self {
        match event {
            RelayEvent::ThreadsChanged { board, threads } => {
                ServerMessage::UpdateThreads { board, threads }
            }
            RelayEvent::ResponseCreated { room, response } => {
                ServerMessage::NewResponse { room, response }
            }
        }
    }
}
