//! Per-course waitlist ring
//!
//! Students turned away by a full course are appended here in arrival order.
//! Entries are never promoted or removed while the registry is live; the ring
//! is a FIFO ledger of deferred demand that is only released at teardown.

use serde::Serialize;
use std::collections::VecDeque;

use crate::model::StudentId;

/// One deferred enrollment attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WaitlistEntry {
    /// Student who was turned away
    pub student_id: StudentId,
}

/// FIFO ring of waitlisted students for a single course
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WaitlistRing {
    entries: VecDeque<WaitlistEntry>,
}

impl WaitlistRing {
    /// Create an empty ring
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a student at the logical tail, returning their 1-based position
    pub fn push(&mut self, student_id: StudentId) -> usize {
        self.entries.push_back(WaitlistEntry { student_id });
        self.entries.len()
    }

    /// Student at the head of the ring
    pub fn next_in_line(&self) -> Option<StudentId> {
        self.entries.front().map(|e| e.student_id)
    }

    /// Whether the student appears anywhere in the ring
    pub fn contains(&self, student_id: StudentId) -> bool {
        self.entries.iter().any(|e| e.student_id == student_id)
    }

    /// Entries in arrival order
    pub fn iter(&self) -> impl Iterator<Item = &WaitlistEntry> + '_ {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ring is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Release every entry, returning how many were held
    pub(crate) fn clear(&mut self) -> usize {
        let released = self.entries.len();
        self.entries.clear();
        released
    }
}
