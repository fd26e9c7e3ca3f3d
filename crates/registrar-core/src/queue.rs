//! FIFO staging area for enrollment requests

use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;
use tracing::debug;

use crate::error::{RegistryError, RegistryResult};
use crate::model::StudentId;

/// A (student, course) pair waiting to be processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentRequest {
    /// Requesting student
    pub student_id: StudentId,
    /// Requested course
    pub course_id: String,
}

impl EnrollmentRequest {
    /// Create a new request
    pub fn new(student_id: StudentId, course_id: impl Into<String>) -> Self {
        Self {
            student_id,
            course_id: course_id.into(),
        }
    }
}

impl fmt::Display for EnrollmentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Student {} -> Course {}", self.student_id, self.course_id)
    }
}

/// Unbounded FIFO of pending requests
#[derive(Debug, Default)]
pub struct RequestQueue {
    pending: VecDeque<EnrollmentRequest>,
}

impl RequestQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request at the tail, returning the new queue length
    pub fn enqueue(&mut self, request: EnrollmentRequest) -> usize {
        self.pending.push_back(request);
        debug!(pending = self.pending.len(), "request enqueued");
        self.pending.len()
    }

    /// Remove the request at the head
    pub fn dequeue(&mut self) -> RegistryResult<EnrollmentRequest> {
        let request = self.pending.pop_front().ok_or(RegistryError::QueueEmpty)?;
        debug!(pending = self.pending.len(), "request dequeued");
        Ok(request)
    }

    /// Request at the head without removing it
    pub fn peek(&self) -> Option<&EnrollmentRequest> {
        self.pending.front()
    }

    /// Pending requests, head first
    pub fn iter(&self) -> impl Iterator<Item = &EnrollmentRequest> + '_ {
        self.pending.iter()
    }

    /// Number of pending requests
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no requests are pending
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub(crate) fn clear(&mut self) -> usize {
        let released = self.pending.len();
        self.pending.clear();
        released
    }
}
