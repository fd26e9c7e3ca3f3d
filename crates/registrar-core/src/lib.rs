#![warn(missing_docs)]

//! Record engine for registrar
//!
//! Tracks students, courses and enrollments in memory, together with the
//! structures that manage them: an insertion-ordered course catalog, a FIFO
//! waitlist per course, a queue of pending enrollment requests and an undo
//! history. All state lives in a [`Registry`], so independent registries can
//! coexist.

pub mod catalog;
pub mod error;
pub mod history;
pub mod model;
pub mod queue;
pub mod registry;
pub mod store;
pub mod transcript;
pub mod waitlist;

// Re-export public API
pub use catalog::{CourseCatalog, CourseKey};
pub use error::{ErrorCategory, RegistryError, RegistryResult};
pub use history::{UndoAction, UndoHistory, UndoKind};
pub use model::{Course, Enrollment, NewCourse, Student, StudentId};
pub use queue::{EnrollmentRequest, RequestQueue};
pub use registry::{Admission, ProcessedRequest, Registry, Replay, TeardownSummary, UndoReport};
pub use store::EntityStore;
pub use transcript::{Gpa, StudentReport, Transcript, TranscriptLine};
pub use waitlist::{WaitlistEntry, WaitlistRing};
