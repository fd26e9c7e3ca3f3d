//! Insertion-ordered, doubly-linked course catalog
//!
//! Courses live in an arena and are threaded together by `prev`/`next`
//! handles. Appending is O(1) through the tracked tail, and traversal works
//! in both directions:
//!
//! ```
//! use registrar_core::{CourseCatalog, NewCourse};
//!
//! let mut catalog = CourseCatalog::new();
//! catalog.push_back(NewCourse::new("CS101", "Introduction to CS", 3, 5)).unwrap();
//! catalog.push_back(NewCourse::new("CS102", "Data Structures", 4, 1)).unwrap();
//!
//! let forward: Vec<_> = catalog.iter().map(|c| c.id()).collect();
//! let backward: Vec<_> = catalog.iter().rev().map(|c| c.id()).collect();
//! assert_eq!(forward, ["CS101", "CS102"]);
//! assert_eq!(backward, ["CS102", "CS101"]);
//! ```
//!
//! There is no removal: a course stays in the catalog until teardown.

use std::collections::HashMap;
use tracing::debug;

use crate::error::{RegistryError, RegistryResult};
use crate::model::{Course, NewCourse};

/// Stable handle to a course slot in the catalog arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CourseKey(usize);

#[derive(Debug)]
struct CatalogNode {
    course: Course,
    prev: Option<CourseKey>,
    next: Option<CourseKey>,
}

/// Doubly-linked sequence of courses in insertion order
#[derive(Debug, Default)]
pub struct CourseCatalog {
    nodes: Vec<CatalogNode>,
    index: HashMap<String, CourseKey>,
    head: Option<CourseKey>,
    tail: Option<CourseKey>,
}

impl CourseCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a course at the tail
    pub fn push_back(&mut self, course: NewCourse) -> RegistryResult<CourseKey> {
        if self.index.contains_key(&course.id) {
            return Err(RegistryError::DuplicateCourse(course.id));
        }

        let key = CourseKey(self.nodes.len());
        self.index.insert(course.id.clone(), key);
        self.nodes.push(CatalogNode {
            course: Course::from_new(course),
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => self.nodes[tail.0].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);

        debug!(courses = self.nodes.len(), "course linked at catalog tail");
        Ok(key)
    }

    /// Handle for a course ID
    pub fn key_of(&self, course_id: &str) -> Option<CourseKey> {
        self.index.get(course_id).copied()
    }

    /// Look up a course by ID
    pub fn get(&self, course_id: &str) -> Option<&Course> {
        self.key_of(course_id).map(|key| &self.nodes[key.0].course)
    }

    pub(crate) fn get_mut(&mut self, course_id: &str) -> Option<&mut Course> {
        let key = self.key_of(course_id)?;
        Some(&mut self.nodes[key.0].course)
    }

    /// Whether a course ID is present
    pub fn contains(&self, course_id: &str) -> bool {
        self.index.contains_key(course_id)
    }

    /// Oldest course
    pub fn first(&self) -> Option<&Course> {
        self.head.map(|key| &self.nodes[key.0].course)
    }

    /// Newest course
    pub fn last(&self) -> Option<&Course> {
        self.tail.map(|key| &self.nodes[key.0].course)
    }

    /// Walk the links; `.rev()` walks from the tail through `prev`
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.nodes.len(),
        }
    }

    /// Number of courses
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Unlink and release every course. Returns the courses released and the
    /// waitlist entries they held.
    pub(crate) fn clear(&mut self) -> (usize, usize) {
        let courses = self.nodes.len();
        let waitlisted: usize = self
            .nodes
            .iter_mut()
            .map(|node| node.course.waitlist.clear())
            .sum();
        self.nodes.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
        (courses, waitlisted)
    }
}

impl<'a> IntoIterator for &'a CourseCatalog {
    type Item = &'a Course;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Link-following iterator over the catalog
pub struct Iter<'a> {
    nodes: &'a [CatalogNode],
    front: Option<CourseKey>,
    back: Option<CourseKey>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.front?.0];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.course)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.back?.0];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.course)
    }
}

impl ExactSizeIterator for Iter<'_> {}
