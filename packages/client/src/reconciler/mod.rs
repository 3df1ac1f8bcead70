//! Client Reconciler: merges relayed events into the page being shown.
//!
//! A page starts in [`Phase::Loading`] while its initial contents are fetched
//! from the board API. Relay events that arrive in the meantime are buffered
//! and replayed on top of the fetched snapshot, skipping responses the
//! snapshot already contains. Once [`Phase::Ready`], events are applied as
//! they arrive: one notification per applied event, none for duplicates.

mod page;
mod response_log;
mod thread_list;
mod view;

use std::collections::VecDeque;

use bbs_relay_shared::{ResponseRecord, RoomId, RoomIdError, ServerMessage, ThreadSummary};

use crate::error::ReconcileError;

pub use page::Page;
pub use response_log::{NumberedResponse, ResponseLog};
pub use thread_list::{ThreadList, ThreadListPatch};
pub use view::{NEAR_BOTTOM_THRESHOLD_PX, Notifier, ScrollMetrics, View};

/// Maximum number of events buffered while the page is loading
pub const PENDING_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

/// Initial contents of a page, as served by the board API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSnapshot {
    Threads(Vec<ThreadSummary>),
    Responses(Vec<ResponseRecord>),
}

/// What the reconciler did with an inbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The relay acknowledged the subscription to this page's room
    Joined,
    Applied,
    /// Held until the initial fetch completes
    Buffered,
    /// Response already shown
    Duplicate,
    /// Not addressed to this page
    Ignored,
}

#[derive(Debug)]
enum PendingEvent {
    Threads(Vec<ThreadSummary>),
    Response(ResponseRecord),
}

/// Per-page reconciliation state
pub struct Reconciler<V, N> {
    page: Page,
    room: RoomId,
    phase: Phase,
    threads: ThreadList,
    responses: ResponseLog,
    pending: VecDeque<PendingEvent>,
    view: V,
    notifier: N,
}

impl<V: View, N: Notifier> Reconciler<V, N> {
    pub fn new(page: Page, view: V, notifier: N) -> Result<Self, RoomIdError> {
        let room = page.room()?;
        Ok(Self {
            page,
            room,
            phase: Phase::Loading,
            threads: ThreadList::default(),
            responses: ResponseLog::default(),
            pending: VecDeque::new(),
            view,
            notifier,
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn room(&self) -> &RoomId {
        &self.room
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn threads(&self) -> &[ThreadSummary] {
        self.threads.as_slice()
    }

    pub fn responses(&self) -> &[NumberedResponse] {
        self.responses.as_slice()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Show the loading indicator for the initial fetch
    pub fn begin_loading(&mut self) {
        self.view.set_loading(true);
    }

    /// Render the fetched snapshot, then replay buffered events on top of it
    pub fn apply_snapshot(&mut self, snapshot: PageSnapshot) -> Result<(), ReconcileError> {
        match (&self.page, snapshot) {
            (Page::Board { .. }, PageSnapshot::Threads(threads)) => {
                let patch = self.threads.replace(threads);
                self.view
                    .render_thread_list(self.threads.as_slice(), &patch);
            }
            (Page::Thread { .. }, PageSnapshot::Responses(responses)) => {
                for record in responses {
                    if self.responses.push(record).is_none() {
                        tracing::debug!("Snapshot contains a repeated response");
                    }
                }
                self.view.render_responses(self.responses.as_slice());
            }
            _ => return Err(ReconcileError::SnapshotMismatch(self.page.kind())),
        }

        self.view.set_loading(false);
        self.phase = Phase::Ready;
        tracing::info!("Page {} loaded", self.page);

        self.replay_pending();
        Ok(())
    }

    /// Surface a failed initial fetch. The page stays in `Loading`.
    pub fn fail_loading(&mut self, message: &str) {
        tracing::warn!("Failed to load page {}: {}", self.page, message);
        self.view.show_error(message);
        self.view.set_loading(false);
    }

    /// Parse and handle one text frame from the relay
    pub fn handle_frame(&mut self, text: &str) -> Result<Outcome, ReconcileError> {
        let message = match serde_json::from_str::<ServerMessage>(text) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!("Rejected malformed frame: {}", e);
                return Err(ReconcileError::Malformed(e));
            }
        };
        Ok(self.handle_message(message))
    }

    pub fn handle_message(&mut self, message: ServerMessage) -> Outcome {
        match message {
            ServerMessage::RoomJoined { room } if room == self.room => {
                tracing::debug!("Subscribed to room '{}'", room);
                Outcome::Joined
            }
            ServerMessage::UpdateThreads { board, threads }
                if board == self.room && matches!(self.page, Page::Board { .. }) =>
            {
                self.on_threads_changed(threads)
            }
            ServerMessage::NewResponse { room, response }
                if room == self.room && matches!(self.page, Page::Thread { .. }) =>
            {
                self.on_response_created(response)
            }
            ServerMessage::Error { detail, message } => {
                tracing::warn!("Relay rejected a frame: {} ({})", detail, message);
                Outcome::Ignored
            }
            other => {
                tracing::debug!(
                    "Ignoring message for room {:?} on page {}",
                    other.room().map(RoomId::as_str),
                    self.page
                );
                Outcome::Ignored
            }
        }
    }

    fn on_threads_changed(&mut self, threads: Vec<ThreadSummary>) -> Outcome {
        if self.phase == Phase::Loading {
            self.buffer(PendingEvent::Threads(threads));
            return Outcome::Buffered;
        }
        self.apply_threads(threads);
        Outcome::Applied
    }

    fn on_response_created(&mut self, response: ResponseRecord) -> Outcome {
        if self.phase == Phase::Loading {
            self.buffer(PendingEvent::Response(response));
            return Outcome::Buffered;
        }
        self.apply_response(response)
    }

    fn apply_threads(&mut self, threads: Vec<ThreadSummary>) {
        let patch = self.threads.replace(threads);
        self.view
            .render_thread_list(self.threads.as_slice(), &patch);
        self.notifier.notify();
    }

    fn apply_response(&mut self, response: ResponseRecord) -> Outcome {
        if self.responses.contains(&response) {
            tracing::debug!("Skipping duplicate response from '{}'", response.shown_id);
            return Outcome::Duplicate;
        }

        // 追加前にスクロール位置を確認する
        let follow = self
            .view
            .scroll_metrics()
            .is_near_bottom(NEAR_BOTTOM_THRESHOLD_PX);

        if let Some(entry) = self.responses.push(response) {
            self.view.append_response(entry);
        }
        if follow {
            self.view.scroll_to_bottom();
        }
        self.notifier.notify();
        Outcome::Applied
    }

    fn buffer(&mut self, event: PendingEvent) {
        if self.pending.len() >= PENDING_CAPACITY {
            self.pending.pop_front();
            tracing::warn!(
                "Pending buffer full ({} events), dropped the oldest",
                PENDING_CAPACITY
            );
        }
        self.pending.push_back(event);
    }

    fn replay_pending(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        if pending.is_empty() {
            return;
        }
        tracing::debug!("Replaying {} buffered events", pending.len());

        // 一覧は毎回全体が届くので、最後のものだけを反映する
        let mut latest_threads = None;
        for event in pending {
            match event {
                PendingEvent::Threads(threads) => latest_threads = Some(threads),
                PendingEvent::Response(response) => {
                    self.apply_response(response);
                }
            }
        }
        if let Some(threads) = latest_threads {
            self.apply_threads(threads);
        }
    }
}
