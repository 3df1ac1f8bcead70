//! Terminal rendering of board and thread pages.

use std::io::{self, Stdout, Write};

use bbs_relay_shared::{ThreadSummary, time::format_jst_display};

use crate::reconciler::{NumberedResponse, Notifier, ScrollMetrics, ThreadListPatch, View};

const RULE: &str = "============================================================";

/// Text formatting for page contents
pub struct PageFormatter;

impl PageFormatter {
    /// Format the whole thread list of a board
    ///
    /// Threads new since the previous draw are marked with `+`, threads whose
    /// summary changed with `*`.
    pub fn format_thread_list(threads: &[ThreadSummary], patch: &ThreadListPatch) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(RULE);
        output.push_str("\nThreads:\n");

        if threads.is_empty() {
            output.push_str("(No threads)\n");
        } else {
            for thread in threads {
                let marker = if patch.added.contains(&thread.id) {
                    "+"
                } else if patch.updated.contains(&thread.id) {
                    "*"
                } else {
                    " "
                };
                output.push_str(&format!(
                    "{} {} ({}) - {} [ID: {}]\n",
                    marker,
                    thread.title,
                    thread.count,
                    format_jst_display(thread.created_at),
                    thread.owner_shown_id
                ));
            }
        }

        output.push_str(RULE);
        output.push('\n');
        output
    }

    /// Format one response as `N : name : date ID: xxx` followed by its content
    pub fn format_response(response: &NumberedResponse) -> String {
        let record = &response.record;
        let cap = match &record.attributes.cap {
            Some(cap) => format!(" [{}]", cap),
            None => String::new(),
        };
        format!(
            "{} : {}{} : {} ID: {}\n{}\n\n",
            response.number,
            record.name,
            cap,
            format_jst_display(record.created_at),
            record.shown_id,
            record.content
        )
    }

    pub fn format_error(message: &str) -> String {
        format!("\n! {}\n", message)
    }
}

/// [`View`] that writes to a terminal (or any writer)
pub struct TerminalView<W: Write> {
    out: W,
}

impl TerminalView<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::debug!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> View for TerminalView<W> {
    fn set_loading(&mut self, loading: bool) {
        if loading {
            self.emit("Loading...\n");
        }
    }

    fn show_error(&mut self, message: &str) {
        self.emit(&PageFormatter::format_error(message));
    }

    fn render_thread_list(&mut self, threads: &[ThreadSummary], patch: &ThreadListPatch) {
        self.emit(&PageFormatter::format_thread_list(threads, patch));
    }

    fn render_responses(&mut self, responses: &[NumberedResponse]) {
        let mut output = String::from("\n");
        for response in responses {
            output.push_str(&PageFormatter::format_response(response));
        }
        self.emit(&output);
    }

    fn append_response(&mut self, response: &NumberedResponse) {
        self.emit(&PageFormatter::format_response(response));
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        // 端末は常に最新の行を表示している
        ScrollMetrics::at_bottom(0.0, 0.0)
    }

    fn scroll_to_bottom(&mut self) {}
}

/// [`Notifier`] that rings the terminal bell
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for TerminalBell<W> {
    fn notify(&mut self) {
        self.out.write_all(b"\x07").and_then(|_| self.out.flush()).ok();
    }
}
