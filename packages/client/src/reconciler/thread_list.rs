//! Board thread list: replaced wholesale, diffed by thread id.

use std::collections::HashMap;

use bbs_relay_shared::ThreadSummary;

/// Difference between two consecutive thread lists, keyed by thread id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadListPatch {
    /// Ids present only in the new list, in new-list order
    pub added: Vec<u64>,
    /// Ids present only in the old list, in old-list order
    pub removed: Vec<u64>,
    /// Ids present in both whose summary changed
    pub updated: Vec<u64>,
    /// Whether the relative order of surviving threads changed
    pub reordered: bool,
}

impl ThreadListPatch {
    pub fn between(old: &[ThreadSummary], new: &[ThreadSummary]) -> Self {
        let old_by_id: HashMap<u64, &ThreadSummary> = old.iter().map(|t| (t.id, t)).collect();
        let new_by_id: HashMap<u64, &ThreadSummary> = new.iter().map(|t| (t.id, t)).collect();

        let mut patch = Self::default();
        for thread in new {
            match old_by_id.get(&thread.id) {
                None => patch.added.push(thread.id),
                Some(previous) if *previous != thread => patch.updated.push(thread.id),
                Some(_) => {}
            }
        }
        patch.removed = old
            .iter()
            .filter(|t| !new_by_id.contains_key(&t.id))
            .map(|t| t.id)
            .collect();

        let surviving_old = old.iter().filter(|t| new_by_id.contains_key(&t.id));
        let surviving_new = new.iter().filter(|t| old_by_id.contains_key(&t.id));
        patch.reordered = !surviving_old.map(|t| t.id).eq(surviving_new.map(|t| t.id));

        patch
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty() && !self.reordered
    }
}

#[derive(Debug, Default)]
pub struct ThreadList {
    threads: Vec<ThreadSummary>,
}

impl ThreadList {
    /// Replace the list, returning what changed
    pub fn replace(&mut self, threads: Vec<ThreadSummary>) -> ThreadListPatch {
        let patch = ThreadListPatch::between(&self.threads, &threads);
        self.threads = threads;
        patch
    }

    pub fn as_slice(&self) -> &[ThreadSummary] {
        &self.threads
    }
}
