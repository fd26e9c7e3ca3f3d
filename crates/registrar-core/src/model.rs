//! Entity model: students, courses and enrollments

use serde::Serialize;
use std::fmt;

use crate::waitlist::WaitlistRing;

/// Caller-supplied student identifier
pub type StudentId = i64;

/// A student's seat in one course.
///
/// The course is referenced by ID and resolved through the catalog on
/// demand, so an enrollment never holds on to the course itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enrollment {
    pub(crate) course_id: String,
    pub(crate) grade: Option<f64>,
}

impl Enrollment {
    pub(crate) fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            grade: None,
        }
    }

    /// ID of the enrolled course
    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    /// Current grade, `None` while ungraded
    pub fn grade(&self) -> Option<f64> {
        self.grade
    }

    /// Whether a grade has been assigned
    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }
}

/// A registered student and the enrollments they own
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub(crate) id: StudentId,
    pub(crate) name: String,
    /// Admission order: oldest first, most recent at the end
    pub(crate) enrollments: Vec<Enrollment>,
}

impl Student {
    pub(crate) fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            enrollments: Vec::new(),
        }
    }

    /// Student ID
    pub fn id(&self) -> StudentId {
        self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enrollments in admission order, oldest first
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Enrollment for the given course, if any
    pub fn enrollment(&self, course_id: &str) -> Option<&Enrollment> {
        self.enrollments.iter().find(|e| e.course_id == course_id)
    }

    pub(crate) fn enrollment_mut(&mut self, course_id: &str) -> Option<&mut Enrollment> {
        self.enrollments.iter_mut().find(|e| e.course_id == course_id)
    }

    pub(crate) fn remove_enrollment(&mut self, course_id: &str) -> Option<Enrollment> {
        let index = self
            .enrollments
            .iter()
            .position(|e| e.course_id == course_id)?;
        Some(self.enrollments.remove(index))
    }
}

/// Fields for a new catalog course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    /// Unique course ID, e.g. `CS101`
    pub id: String,
    /// Course title
    pub name: String,
    /// Credit weight used by GPA aggregation
    pub credits: u32,
    /// Seat limit
    pub capacity: u32,
}

impl NewCourse {
    /// Describe a new course
    pub fn new(id: impl Into<String>, name: impl Into<String>, credits: u32, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            credits,
            capacity,
        }
    }
}

/// A catalog course with its seat count and waitlist
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) credits: u32,
    pub(crate) capacity: u32,
    pub(crate) enrolled_count: u32,
    pub(crate) waitlist: WaitlistRing,
}

impl Course {
    pub(crate) fn from_new(course: NewCourse) -> Self {
        Self {
            id: course.id,
            name: course.name,
            credits: course.credits,
            capacity: course.capacity,
            enrolled_count: 0,
            waitlist: WaitlistRing::new(),
        }
    }

    /// Course ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Course title
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Credit weight
    pub fn credits(&self) -> u32 {
        self.credits
    }

    /// Seat limit
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Number of live enrollments referencing this course
    pub fn enrolled_count(&self) -> u32 {
        self.enrolled_count
    }

    /// Seats still open
    pub fn seats_remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.enrolled_count)
    }

    /// Whether every seat is taken
    pub fn is_full(&self) -> bool {
        self.enrolled_count >= self.capacity
    }

    /// Students deferred because the course was full
    pub fn waitlist(&self) -> &WaitlistRing {
        &self.waitlist
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (Cr: {}) Seats: {}/{}",
            self.id, self.name, self.credits, self.enrolled_count, self.capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_enrollment_lookup() {
        let mut student = Student::new(1, "Ali");
        student.enrollments.push(Enrollment::new("CS101"));
        student.enrollments.push(Enrollment::new("CS102"));

        assert!(student.enrollment("CS102").is_some());
        assert!(student.enrollment("MATH1").is_none());

        let removed = student.remove_enrollment("CS101").unwrap();
        assert_eq!(removed.course_id(), "CS101");
        assert_eq!(student.enrollments().len(), 1);
        assert!(student.remove_enrollment("CS101").is_none());
    }

    #[test]
    fn test_course_seats() {
        let mut course = Course::from_new(NewCourse::new("CS102", "Data Structures", 4, 1));
        assert!(!course.is_full());
        assert_eq!(course.seats_remaining(), 1);

        course.enrolled_count = 1;
        assert!(course.is_full());
        assert_eq!(course.seats_remaining(), 0);
        assert_eq!(course.to_string(), "[CS102] Data Structures (Cr: 4) Seats: 1/1");
    }

    #[test]
    fn test_new_enrollment_is_ungraded() {
        let enrollment = Enrollment::new("CS101");
        assert!(!enrollment.is_graded());
        assert_eq!(enrollment.grade(), None);
    }
}
