//! Responses shown on a thread page, numbered in arrival order.

use std::collections::HashSet;

use bbs_relay_shared::ResponseRecord;
use chrono::{DateTime, Utc};

/// A response with its display number (`#N`, starting at 1)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedResponse {
    pub number: usize,
    pub record: ResponseRecord,
}

/// Identity of a response that has no id of its own
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Fingerprint {
    shown_id: String,
    created_at: DateTime<Utc>,
    content: String,
}

impl From<&ResponseRecord> for Fingerprint {
    fn from(record: &ResponseRecord) -> Self {
        Self {
            shown_id: record.shown_id.clone(),
            created_at: record.created_at,
            content: record.content.clone(),
        }
    }
}

/// Append-only response log with duplicate detection.
///
/// Two records are the same response when their ids match. When either
/// side has no id, they are compared by author id, timestamp and content.
#[derive(Debug, Default)]
pub struct ResponseLog {
    entries: Vec<NumberedResponse>,
    seen_ids: HashSet<String>,
    /// Fingerprints of every appended record
    fingerprints: HashSet<Fingerprint>,
    /// Fingerprints of appended records that had no id
    anonymous: HashSet<Fingerprint>,
}

impl ResponseLog {
    pub fn contains(&self, record: &ResponseRecord) -> bool {
        let fingerprint = Fingerprint::from(record);
        match &record.id {
            Some(id) => self.seen_ids.contains(id) || self.anonymous.contains(&fingerprint),
            None => self.fingerprints.contains(&fingerprint),
        }
    }

    /// Append a record unless it is already in the log
    pub fn push(&mut self, record: ResponseRecord) -> Option<&NumberedResponse> {
        if self.contains(&record) {
            return None;
        }

        let fingerprint = Fingerprint::from(&record);
        match &record.id {
            Some(id) => {
                self.seen_ids.insert(id.clone());
            }
            None => {
                self.anonymous.insert(fingerprint.clone());
            }
        }
        self.fingerprints.insert(fingerprint);

        let number = self.entries.len() + 1;
        self.entries.push(NumberedResponse { number, record });
        self.entries.last()
    }

    /// Number of responses shown so far
    pub fn counter(&self) -> usize {
        self.entries.len()
    }

    pub fn as_slice(&self) -> &[NumberedResponse] {
        &self.entries
    }
}
