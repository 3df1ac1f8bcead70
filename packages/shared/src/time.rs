//! Time-related utilities with clock abstraction for testability.
//!
//! Timestamps travel over the wire as UTC (`DateTime<Utc>`); boards are
//! displayed in JST, the same way the collaborating web frontend shows them.

use chrono::{DateTime, FixedOffset, Utc};

const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: DateTime<Utc>,
}

impl FixedClock {
    /// Create a new fixed clock with the given instant
    pub fn new(fixed_time: DateTime<Utc>) -> Self {
        Self { fixed_time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.fixed_time
    }
}

fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).expect("UTC+9 is a valid offset")
}

/// Convert a UTC instant to JST RFC 3339 format
pub fn to_jst_rfc3339(at: DateTime<Utc>) -> String {
    at.with_timezone(&jst()).to_rfc3339()
}

/// Format a UTC instant the way a board shows post times (`YYYY/MM/DD HH:MM:SS`, JST)
pub fn format_jst_display(at: DateTime<Utc>) -> String {
    at.with_timezone(&jst())
        .format("%Y/%m/%d %H:%M:%S")
        .to_string()
}
