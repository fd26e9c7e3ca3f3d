//! Error types for the record engine

use thiserror::Error;

use crate::model::StudentId;

/// Errors reported by registry operations.
///
/// None of these are fatal: every variant is an expected outcome of ordinary
/// misuse and is handed back to the caller as data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// A student with this ID is already registered
    #[error("Student ID already exists: {0}")]
    DuplicateStudent(StudentId),

    /// A course with this ID is already in the catalog
    #[error("Course ID already exists: {0}")]
    DuplicateCourse(String),

    /// Enrollment named a student or course that does not resolve
    #[error("Invalid student or course reference: student {student_id}, course {course_id}")]
    InvalidReference {
        /// Student named by the request
        student_id: StudentId,
        /// Course named by the request
        course_id: String,
    },

    /// Student not found
    #[error("Student not found: {0}")]
    StudentNotFound(StudentId),

    /// Course not found
    #[error("Course not found: {0}")]
    CourseNotFound(String),

    /// The student already holds an enrollment for this course
    #[error("Student {student_id} is already enrolled in {course_id}")]
    AlreadyEnrolled {
        /// Student ID
        student_id: StudentId,
        /// Course ID
        course_id: String,
    },

    /// No enrollment exists to drop
    #[error("Enrollment not found: student {student_id}, course {course_id}")]
    EnrollmentNotFound {
        /// Student ID
        student_id: StudentId,
        /// Course ID
        course_id: String,
    },

    /// The student exists but is not enrolled in the course
    #[error("Student {student_id} is not enrolled in {course_id}")]
    NotEnrolled {
        /// Student ID
        student_id: StudentId,
        /// Course ID
        course_id: String,
    },

    /// No pending enrollment requests
    #[error("Request queue is empty")]
    QueueEmpty,

    /// Undo history is empty
    #[error("Nothing to undo")]
    NothingToUndo,
}

/// Broad class of a [`RegistryError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Duplicate identifier on creation
    IdentityConflict,
    /// An identifier that does not resolve
    Reference,
    /// Operation conflicts with the current enrollment state
    StateConflict,
    /// Queue or history has nothing to give
    Emptiness,
}

impl RegistryError {
    /// Create an InvalidReference error
    pub fn invalid_reference(student_id: StudentId, course_id: impl Into<String>) -> Self {
        Self::InvalidReference {
            student_id,
            course_id: course_id.into(),
        }
    }

    /// Create an AlreadyEnrolled error
    pub fn already_enrolled(student_id: StudentId, course_id: impl Into<String>) -> Self {
        Self::AlreadyEnrolled {
            student_id,
            course_id: course_id.into(),
        }
    }

    /// Create an EnrollmentNotFound error
    pub fn enrollment_not_found(student_id: StudentId, course_id: impl Into<String>) -> Self {
        Self::EnrollmentNotFound {
            student_id,
            course_id: course_id.into(),
        }
    }

    /// Create a NotEnrolled error
    pub fn not_enrolled(student_id: StudentId, course_id: impl Into<String>) -> Self {
        Self::NotEnrolled {
            student_id,
            course_id: course_id.into(),
        }
    }

    /// Taxonomy bucket this error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicateStudent(_) | Self::DuplicateCourse(_) => ErrorCategory::IdentityConflict,
            Self::InvalidReference { .. } | Self::StudentNotFound(_) | Self::CourseNotFound(_) => {
                ErrorCategory::Reference
            }
            Self::AlreadyEnrolled { .. }
            | Self::EnrollmentNotFound { .. }
            | Self::NotEnrolled { .. } => ErrorCategory::StateConflict,
            Self::QueueEmpty | Self::NothingToUndo => ErrorCategory::Emptiness,
        }
    }
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
