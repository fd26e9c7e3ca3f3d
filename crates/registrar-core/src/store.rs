//! Entity store: owns students and the course catalog

use std::collections::HashMap;
use tracing::{debug, info};

use crate::catalog::{CourseCatalog, CourseKey};
use crate::error::{RegistryError, RegistryResult};
use crate::model::{Course, NewCourse, Student, StudentId};

/// Owning container for every student and course in a registry
#[derive(Debug, Default)]
pub struct EntityStore {
    students: Vec<Student>,
    student_index: HashMap<StudentId, usize>,
    catalog: CourseCatalog,
}

impl EntityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a student
    pub fn add_student(&mut self, id: StudentId, name: impl Into<String>) -> RegistryResult<()> {
        if self.student_index.contains_key(&id) {
            return Err(RegistryError::DuplicateStudent(id));
        }

        let student = Student::new(id, name);
        info!(student_id = id, name = %student.name, "student added");
        self.student_index.insert(id, self.students.len());
        self.students.push(student);
        Ok(())
    }

    /// Append a course to the catalog
    pub fn add_course(&mut self, course: NewCourse) -> RegistryResult<CourseKey> {
        let course_id = course.id.clone();
        let key = self.catalog.push_back(course)?;
        info!(course_id = %course_id, "course added");
        Ok(key)
    }

    /// Look up a student
    pub fn find_student(&self, id: StudentId) -> Option<&Student> {
        let found = self.student_index.get(&id).map(|&slot| &self.students[slot]);
        debug!(student_id = id, found = found.is_some(), "student lookup");
        found
    }

    pub(crate) fn find_student_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        let slot = *self.student_index.get(&id)?;
        Some(&mut self.students[slot])
    }

    /// Look up a course
    pub fn find_course(&self, course_id: &str) -> Option<&Course> {
        let found = self.catalog.get(course_id);
        debug!(course_id, found = found.is_some(), "course lookup");
        found
    }

    /// Borrow a student and a course mutably at the same time
    pub(crate) fn pair_mut(
        &mut self,
        student_id: StudentId,
        course_id: &str,
    ) -> (Option<&mut Student>, Option<&mut Course>) {
        let student = match self.student_index.get(&student_id) {
            Some(&slot) => self.students.get_mut(slot),
            None => None,
        };
        (student, self.catalog.get_mut(course_id))
    }

    /// Students in registration order
    pub fn students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students.iter()
    }

    /// Number of registered students
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// The course catalog
    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    /// Release all students (with their enrollments) and all courses (with
    /// their waitlists).
    pub(crate) fn clear(&mut self) -> StoreRelease {
        let enrollments: usize = self.students.iter().map(|s| s.enrollments.len()).sum();
        let students = self.students.len();
        self.students.clear();
        self.student_index.clear();
        let (courses, waitlist_entries) = self.catalog.clear();

        StoreRelease {
            students,
            enrollments,
            courses,
            waitlist_entries,
        }
    }
}

/// Counts released by [`EntityStore::clear`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StoreRelease {
    pub students: usize,
    pub enrollments: usize,
    pub courses: usize,
    pub waitlist_entries: usize,
}
