//! Enrollment engine
//!
//! [`Registry`] bundles the entity store, request queue and undo history into
//! one context object. Every admission, whether it comes from a direct call,
//! the request queue or undo replay, runs through the same internal path; only
//! whether an undo record is pushed differs. The suppressed paths stay inside
//! the crate, so callers can only mutate through operations that record.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::{CourseCatalog, CourseKey};
use crate::error::{RegistryError, RegistryResult};
use crate::history::{UndoAction, UndoHistory, UndoKind, UndoRecording};
use crate::model::{Course, Enrollment, NewCourse, Student, StudentId};
use crate::queue::{EnrollmentRequest, RequestQueue};
use crate::store::EntityStore;
use crate::transcript::{Gpa, StudentReport, Transcript};
use crate::waitlist::WaitlistRing;

/// Result of an enrollment attempt that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Admission {
    /// A seat was taken
    Enrolled,
    /// The course was full; the student was appended to its waitlist
    Waitlisted {
        /// 1-based position in the waitlist
        position: usize,
    },
}

/// A dequeued request together with what processing it did
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedRequest {
    /// The request, already removed from the queue
    pub request: EnrollmentRequest,
    /// Outcome of running it through admission
    pub outcome: RegistryResult<Admission>,
}

/// What replaying an undo record changed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Replay {
    /// An admission was reversed by dropping the enrollment
    Dropped,
    /// A drop was reversed by admitting the student again
    Readmitted {
        /// Outcome of the re-admission
        admission: Admission,
        /// Grade put back on the enrollment, if there was one to restore
        restored_grade: Option<f64>,
    },
    /// A grade change was reversed
    GradeRestored {
        /// Grade now on the enrollment
        grade: Option<f64>,
    },
}

/// A popped undo record and the outcome of replaying its inverse
#[derive(Debug, Clone, PartialEq)]
pub struct UndoReport {
    /// The record consumed from the history
    pub action: UndoAction,
    /// Outcome of the replay
    pub replay: RegistryResult<Replay>,
}

/// Counts released by [`Registry::clean_up`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeardownSummary {
    /// Students released
    pub students: usize,
    /// Enrollments released with them
    pub enrollments: usize,
    /// Courses released
    pub courses: usize,
    /// Waitlist entries released with them
    pub waitlist_entries: usize,
    /// Queued requests discarded
    pub requests: usize,
    /// Undo records discarded
    pub undo_actions: usize,
}

/// In-memory academic records registry
#[derive(Debug, Default)]
pub struct Registry {
    store: EntityStore,
    requests: RequestQueue,
    history: UndoHistory,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    // ---- entity store -------------------------------------------------

    /// Register a student
    pub fn add_student(&mut self, id: StudentId, name: impl Into<String>) -> RegistryResult<()> {
        self.store.add_student(id, name)
    }

    /// Append a course to the catalog
    pub fn add_course(&mut self, course: NewCourse) -> RegistryResult<CourseKey> {
        self.store.add_course(course)
    }

    /// Look up a student
    pub fn find_student(&self, id: StudentId) -> Option<&Student> {
        self.store.find_student(id)
    }

    /// Look up a course
    pub fn find_course(&self, course_id: &str) -> Option<&Course> {
        self.store.find_course(course_id)
    }

    /// Students in registration order
    pub fn students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.store.students()
    }

    /// The course catalog
    pub fn catalog(&self) -> &CourseCatalog {
        self.store.catalog()
    }

    /// Courses oldest first
    pub fn courses_forward(&self) -> impl Iterator<Item = &Course> + '_ {
        self.store.catalog().iter()
    }

    /// Courses newest first
    pub fn courses_backward(&self) -> impl Iterator<Item = &Course> + '_ {
        self.store.catalog().iter().rev()
    }

    /// Waitlist of a course
    pub fn waitlist(&self, course_id: &str) -> RegistryResult<&WaitlistRing> {
        self.find_course(course_id)
            .map(Course::waitlist)
            .ok_or_else(|| RegistryError::CourseNotFound(course_id.to_string()))
    }

    // ---- enrollment engine ----------------------------------------------

    /// Enroll a student, recording the admission for undo
    pub fn enroll(&mut self, student_id: StudentId, course_id: &str) -> RegistryResult<Admission> {
        self.enroll_internal(student_id, course_id, UndoRecording::Record)
    }

    /// Admission path shared by direct enrollment, queue processing and undo
    /// replay.
    pub(crate) fn enroll_internal(
        &mut self,
        student_id: StudentId,
        course_id: &str,
        recording: UndoRecording,
    ) -> RegistryResult<Admission> {
        let (student, course) = self.store.pair_mut(student_id, course_id);
        let (Some(student), Some(course)) = (student, course) else {
            return Err(RegistryError::invalid_reference(student_id, course_id));
        };

        if student.enrollment(course_id).is_some() {
            return Err(RegistryError::already_enrolled(student_id, course_id));
        }

        if course.is_full() {
            let position = course.waitlist.push(student_id);
            warn!(
                student_id,
                course_id,
                position,
                "course is full, student added to waitlist"
            );
            return Ok(Admission::Waitlisted { position });
        }

        student.enrollments.push(Enrollment::new(course_id));
        course.enrolled_count += 1;

        if recording.is_enabled() {
            self.history.push(UndoAction::enroll(student_id, course_id));
        }
        info!(student_id, course_id, "student enrolled");
        Ok(Admission::Enrolled)
    }

    /// Drop an enrollment, recording it for undo. Returns the grade the
    /// enrollment carried.
    pub fn drop_course(&mut self, student_id: StudentId, course_id: &str) -> RegistryResult<Option<f64>> {
        self.drop_internal(student_id, course_id, UndoRecording::Record)
    }

    /// Removal path shared by direct drops and undo replay.
    ///
    /// A course that no longer resolves is tolerated: the enrollment is still
    /// removed, there is just no seat count to give back. Dropping never
    /// promotes anyone from the waitlist.
    pub(crate) fn drop_internal(
        &mut self,
        student_id: StudentId,
        course_id: &str,
        recording: UndoRecording,
    ) -> RegistryResult<Option<f64>> {
        let (student, course) = self.store.pair_mut(student_id, course_id);
        let removed = student
            .and_then(|s| s.remove_enrollment(course_id))
            .ok_or_else(|| RegistryError::enrollment_not_found(student_id, course_id))?;

        match course {
            Some(course) => course.enrolled_count = course.enrolled_count.saturating_sub(1),
            None => warn!(student_id, course_id, "dropped enrollment for unknown course"),
        }

        if recording.is_enabled() {
            self.history
                .push(UndoAction::drop(student_id, course_id, removed.grade));
        }
        info!(student_id, course_id, "course dropped");
        Ok(removed.grade)
    }

    /// Enter or overwrite a grade, recording it for undo. Returns the grade
    /// it replaced.
    pub fn enter_grade(
        &mut self,
        student_id: StudentId,
        course_id: &str,
        grade: f64,
    ) -> RegistryResult<Option<f64>> {
        self.set_grade(student_id, course_id, Some(grade), UndoRecording::Record)
    }

    /// Grade path shared by grade entry and undo replay; `None` clears the
    /// grade back to ungraded.
    pub(crate) fn set_grade(
        &mut self,
        student_id: StudentId,
        course_id: &str,
        grade: Option<f64>,
        recording: UndoRecording,
    ) -> RegistryResult<Option<f64>> {
        let student = self
            .store
            .find_student_mut(student_id)
            .ok_or(RegistryError::StudentNotFound(student_id))?;
        let enrollment = student
            .enrollment_mut(course_id)
            .ok_or_else(|| RegistryError::not_enrolled(student_id, course_id))?;

        let prior = std::mem::replace(&mut enrollment.grade, grade);

        if recording.is_enabled() {
            self.history
                .push(UndoAction::grade(student_id, course_id, prior));
        }
        info!(student_id, course_id, ?grade, ?prior, "grade updated");
        Ok(prior)
    }

    /// Credit-weighted GPA over graded enrollments whose course still
    /// resolves.
    pub fn compute_gpa(&self, student_id: StudentId) -> RegistryResult<Gpa> {
        let student = self
            .find_student(student_id)
            .ok_or(RegistryError::StudentNotFound(student_id))?;
        let catalog = self.store.catalog();

        Ok(Gpa::from_graded(student.enrollments().iter().filter_map(
            |enrollment| {
                let grade = enrollment.grade()?;
                let course = catalog.get(enrollment.course_id())?;
                Some((grade, course.credits()))
            },
        )))
    }

    /// Transcript lines, oldest enrollment first
    pub fn transcript(&self, student_id: StudentId) -> RegistryResult<Transcript<'_>> {
        let student = self
            .find_student(student_id)
            .ok_or(RegistryError::StudentNotFound(student_id))?;
        Ok(Transcript::new(student, self.store.catalog()))
    }

    /// Transcript and GPA bundled for display
    pub fn student_report(&self, student_id: StudentId) -> RegistryResult<StudentReport<'_>> {
        let student = self
            .find_student(student_id)
            .ok_or(RegistryError::StudentNotFound(student_id))?;
        Ok(StudentReport {
            student,
            lines: self.transcript(student_id)?.collect(),
            gpa: self.compute_gpa(student_id)?,
        })
    }

    // ---- request queue --------------------------------------------------

    /// Stage a request for later processing. Returns the queue length.
    pub fn enqueue_request(&mut self, student_id: StudentId, course_id: impl Into<String>) -> usize {
        let request = EnrollmentRequest::new(student_id, course_id);
        info!(student_id, course_id = %request.course_id, "enrollment request queued");
        self.requests.enqueue(request)
    }

    /// Dequeue the oldest request and run it through admission with undo
    /// recording on. The request is consumed whatever the outcome.
    pub fn process_next_request(&mut self) -> RegistryResult<ProcessedRequest> {
        let request = self.requests.dequeue()?;
        debug!(%request, "processing request");
        let outcome = self.enroll_internal(
            request.student_id,
            &request.course_id,
            UndoRecording::Record,
        );
        if let Err(err) = &outcome {
            warn!(%request, error = %err, "queued request rejected");
        }
        Ok(ProcessedRequest { request, outcome })
    }

    /// Pending requests, head first
    pub fn pending_requests(&self) -> impl Iterator<Item = &EnrollmentRequest> + '_ {
        self.requests.iter()
    }

    // ---- undo -------------------------------------------------------------

    /// Pop the most recent undo record and replay its inverse
    pub fn undo_last_action(&mut self) -> RegistryResult<UndoReport> {
        let action = self.history.pop()?;
        info!(kind = %action.kind, student_id = action.student_id, course_id = %action.course_id, "undoing last action");
        let replay = self.apply_inverse(&action);
        if let Err(err) = &replay {
            warn!(kind = %action.kind, error = %err, "undo replay failed");
        }
        Ok(UndoReport { action, replay })
    }

    /// Replay the inverse of `action` without recording anything
    pub(crate) fn apply_inverse(&mut self, action: &UndoAction) -> RegistryResult<Replay> {
        let student_id = action.student_id;
        let course_id = action.course_id.as_str();

        match action.kind {
            UndoKind::Enroll => self
                .drop_internal(student_id, course_id, UndoRecording::Suppress)
                .map(|_| Replay::Dropped),
            UndoKind::Drop => {
                let admission =
                    self.enroll_internal(student_id, course_id, UndoRecording::Suppress)?;
                let restored_grade = match (admission, action.prior_grade) {
                    (Admission::Enrolled, Some(grade)) => {
                        self.set_grade(student_id, course_id, Some(grade), UndoRecording::Suppress)?;
                        Some(grade)
                    }
                    _ => None,
                };
                Ok(Replay::Readmitted {
                    admission,
                    restored_grade,
                })
            }
            UndoKind::Grade => self
                .set_grade(student_id, course_id, action.prior_grade, UndoRecording::Suppress)
                .map(|_| Replay::GradeRestored {
                    grade: action.prior_grade,
                }),
        }
    }

    /// Whether there is anything to undo
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Undo records, newest first
    pub fn undo_history(&self) -> impl Iterator<Item = &UndoAction> + '_ {
        self.history.iter()
    }

    // ---- teardown -------------------------------------------------------

    /// Release every owned structure, leaving an empty registry
    pub fn clean_up(&mut self) -> TeardownSummary {
        let released = self.store.clear();
        let summary = TeardownSummary {
            students: released.students,
            enrollments: released.enrollments,
            courses: released.courses,
            waitlist_entries: released.waitlist_entries,
            requests: self.requests.clear(),
            undo_actions: self.history.clear(),
        };
        info!(?summary, "registry cleaned up");
        summary
    }
}
