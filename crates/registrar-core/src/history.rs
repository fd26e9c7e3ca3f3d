//! Undo history

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::error::{RegistryError, RegistryResult};
use crate::model::StudentId;

/// Kind of committed mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UndoKind {
    /// A student was admitted to a course
    Enroll,
    /// An enrollment was removed
    Drop,
    /// A grade was entered or overwritten
    Grade,
}

impl fmt::Display for UndoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndoKind::Enroll => write!(f, "Enroll"),
            UndoKind::Drop => write!(f, "Drop"),
            UndoKind::Grade => write!(f, "Grade"),
        }
    }
}

/// Whether a mutation pushes an undo record.
///
/// Undo replay always runs with [`UndoRecording::Suppress`] so that undoing
/// never produces another undoable action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UndoRecording {
    /// Push an undo record after the mutation commits
    Record,
    /// Commit without touching the history
    Suppress,
}

impl UndoRecording {
    /// Whether recording is on
    pub(crate) fn is_enabled(self) -> bool {
        matches!(self, UndoRecording::Record)
    }
}

/// The inverse information for one committed mutation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UndoAction {
    /// What was done
    pub kind: UndoKind,
    /// Student affected
    pub student_id: StudentId,
    /// Course affected
    pub course_id: String,
    /// Grade held just before a Drop or Grade; always `None` for Enroll
    pub prior_grade: Option<f64>,
    /// When the mutation committed
    pub recorded_at: DateTime<Utc>,
}

impl UndoAction {
    fn new(
        kind: UndoKind,
        student_id: StudentId,
        course_id: impl Into<String>,
        prior_grade: Option<f64>,
    ) -> Self {
        Self {
            kind,
            student_id,
            course_id: course_id.into(),
            prior_grade,
            recorded_at: Utc::now(),
        }
    }

    /// Record of an admission
    pub fn enroll(student_id: StudentId, course_id: impl Into<String>) -> Self {
        Self::new(UndoKind::Enroll, student_id, course_id, None)
    }

    /// Record of a drop, keeping the grade the enrollment carried
    pub fn drop(student_id: StudentId, course_id: impl Into<String>, prior_grade: Option<f64>) -> Self {
        Self::new(UndoKind::Drop, student_id, course_id, prior_grade)
    }

    /// Record of a grade change, keeping the grade it replaced
    pub fn grade(student_id: StudentId, course_id: impl Into<String>, prior_grade: Option<f64>) -> Self {
        Self::new(UndoKind::Grade, student_id, course_id, prior_grade)
    }
}

impl fmt::Display for UndoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - student {} / {}",
            self.recorded_at.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.student_id,
            self.course_id
        )?;
        match (self.kind, self.prior_grade) {
            (UndoKind::Enroll, _) => Ok(()),
            (_, Some(grade)) => write!(f, " (prior grade {})", grade),
            (_, None) => write!(f, " (prior grade N/A)"),
        }
    }
}

/// LIFO stack of undo records
#[derive(Debug, Default)]
pub struct UndoHistory {
    stack: Vec<UndoAction>,
}

impl UndoHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a record on top
    pub fn push(&mut self, action: UndoAction) {
        debug!(kind = %action.kind, depth = self.stack.len() + 1, "undo recorded");
        self.stack.push(action);
    }

    /// Pop the most recent record
    pub fn pop(&mut self) -> RegistryResult<UndoAction> {
        self.stack.pop().ok_or(RegistryError::NothingToUndo)
    }

    /// Most recent record
    pub fn peek(&self) -> Option<&UndoAction> {
        self.stack.last()
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Records, newest first
    pub fn iter(&self) -> impl Iterator<Item = &UndoAction> + '_ {
        self.stack.iter().rev()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether the history is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub(crate) fn clear(&mut self) -> usize {
        let released = self.stack.len();
        self.stack.clear();
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_lifo() {
        let mut history = UndoHistory::new();
        history.push(UndoAction::enroll(1, "CS101"));
        history.push(UndoAction::grade(1, "CS101", None));

        assert_eq!(history.len(), 2);
        assert_eq!(history.peek().map(|a| a.kind), Some(UndoKind::Grade));

        assert_eq!(history.pop().unwrap().kind, UndoKind::Grade);
        assert_eq!(history.pop().unwrap().kind, UndoKind::Enroll);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_history_empty_pop() {
        let mut history = UndoHistory::new();
        assert!(matches!(history.pop(), Err(RegistryError::NothingToUndo)));
    }

    #[test]
    fn test_history_iter_newest_first() {
        let mut history = UndoHistory::new();
        history.push(UndoAction::enroll(1, "A"));
        history.push(UndoAction::enroll(1, "B"));
        history.push(UndoAction::drop(1, "A", Some(3.0)));

        let courses: Vec<_> = history.iter().map(|a| a.course_id.as_str()).collect();
        assert_eq!(courses, vec!["A", "B", "A"]);
        assert_eq!(history.iter().next().unwrap().kind, UndoKind::Drop);
    }

    #[test]
    fn test_recording_flag() {
        assert!(UndoRecording::Record.is_enabled());
        assert!(!UndoRecording::Suppress.is_enabled());
    }

    #[test]
    fn test_action_display_mentions_prior_grade() {
        let action = UndoAction::grade(7, "CS102", Some(3.5));
        let text = action.to_string();
        assert!(text.contains("Grade - student 7 / CS102"));
        assert!(text.ends_with("(prior grade 3.5)"));

        let enroll = UndoAction::enroll(7, "CS102").to_string();
        assert!(!enroll.contains("prior grade"));
    }
}
