//! Seams between the reconciler and whatever draws the page.

use bbs_relay_shared::ThreadSummary;

use super::{response_log::NumberedResponse, thread_list::ThreadListPatch};

/// Distance from the bottom, in pixels, within which the reader still
/// counts as following the thread.
pub const NEAR_BOTTOM_THRESHOLD_PX: f64 = 48.0;

/// Scroll position of the response container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

impl ScrollMetrics {
    /// Metrics of a container scrolled exactly to its bottom
    pub fn at_bottom(scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top: (scroll_height - client_height).max(0.0),
            client_height,
            scroll_height,
        }
    }

    pub fn distance_to_bottom(&self) -> f64 {
        (self.scroll_height - self.scroll_top - self.client_height).max(0.0)
    }

    pub fn is_near_bottom(&self, threshold: f64) -> bool {
        self.distance_to_bottom() <= threshold
    }
}

/// Rendering surface of a page
pub trait View {
    /// Show or hide the loading indicator
    fn set_loading(&mut self, loading: bool);

    fn show_error(&mut self, message: &str);

    /// Draw the whole thread list; `patch` describes what changed since the last draw
    fn render_thread_list(&mut self, threads: &[ThreadSummary], patch: &ThreadListPatch);

    /// Draw the whole response list of a thread
    fn render_responses(&mut self, responses: &[NumberedResponse]);

    fn append_response(&mut self, response: &NumberedResponse);

    fn scroll_metrics(&self) -> ScrollMetrics;

    fn scroll_to_bottom(&mut self);
}

/// Plays the notification sound
pub trait Notifier {
    fn notify(&mut self);
}
