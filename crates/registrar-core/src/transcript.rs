//! Transcript traversal and GPA aggregation

use serde::Serialize;
use std::fmt;

use crate::catalog::CourseCatalog;
use crate::model::{Enrollment, Student};

/// One line of a student's transcript
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptLine<'a> {
    /// Course ID held by the enrollment
    pub course_id: &'a str,
    /// Course title, `None` if the course no longer resolves
    pub course_name: Option<&'a str>,
    /// Credit weight, `None` if the course no longer resolves
    pub credits: Option<u32>,
    /// Grade, `None` while ungraded
    pub grade: Option<f64>,
}

/// Lazy walk over a student's enrollments, oldest first
pub struct Transcript<'a> {
    enrollments: std::slice::Iter<'a, Enrollment>,
    catalog: &'a CourseCatalog,
}

impl<'a> Transcript<'a> {
    pub(crate) fn new(student: &'a Student, catalog: &'a CourseCatalog) -> Self {
        Self {
            enrollments: student.enrollments().iter(),
            catalog,
        }
    }
}

impl<'a> Iterator for Transcript<'a> {
    type Item = TranscriptLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let enrollment = self.enrollments.next()?;
        let course = self.catalog.get(enrollment.course_id());
        Some(TranscriptLine {
            course_id: enrollment.course_id(),
            course_name: course.map(|c| c.name()),
            credits: course.map(|c| c.credits()),
            grade: enrollment.grade(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.enrollments.size_hint()
    }
}

/// Credit-weighted grade point average
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Gpa {
    /// At least one graded credit exists
    Graded {
        /// `total_points / total_credits`
        value: f64,
        /// Sum of `grade * credits`
        total_points: f64,
        /// Sum of credits over graded enrollments, widened so that no number
        /// of `u32` course weights can overflow it
        total_credits: u64,
    },
    /// Nothing graded yet, so there is nothing to divide
    NoGradedCredits,
}

impl Gpa {
    /// Aggregate (grade, credits) pairs. Pairs with zero credits contribute
    /// nothing.
    pub fn from_graded<I>(graded: I) -> Self
    where
        I: IntoIterator<Item = (f64, u32)>,
    {
        let (total_points, total_credits) = graded
            .into_iter()
            .fold((0.0_f64, 0_u64), |(points, credits), (grade, weight)| {
                (points + grade * f64::from(weight), credits + u64::from(weight))
            });

        if total_credits == 0 {
            Gpa::NoGradedCredits
        } else {
            Gpa::Graded {
                value: total_points / total_credits as f64,
                total_points,
                total_credits,
            }
        }
    }

    /// Numeric value, if any credits were graded
    pub fn value(&self) -> Option<f64> {
        match self {
            Gpa::Graded { value, .. } => Some(*value),
            Gpa::NoGradedCredits => None,
        }
    }
}

impl fmt::Display for Gpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gpa::Graded { value, .. } => write!(f, "{:.2}", value),
            Gpa::NoGradedCredits => write!(f, "0.00 (No graded credits)"),
        }
    }
}

/// Everything needed to print a student's record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentReport<'a> {
    /// The student
    pub student: &'a Student,
    /// Transcript, oldest enrollment first
    pub lines: Vec<TranscriptLine<'a>>,
    /// GPA over graded enrollments
    pub gpa: Gpa,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpa_weighted_by_credits() {
        let gpa = Gpa::from_graded([(4.0, 3), (2.0, 1)]);
        assert_eq!(
            gpa,
            Gpa::Graded {
                value: 3.5,
                total_points: 14.0,
                total_credits: 4
            }
        );
        assert_eq!(gpa.to_string(), "3.50");
    }

    #[test]
    fn test_gpa_without_credits() {
        let gpa = Gpa::from_graded(std::iter::empty());
        assert_eq!(gpa, Gpa::NoGradedCredits);
        assert_eq!(gpa.value(), None);
        assert_eq!(gpa.to_string(), "0.00 (No graded credits)");
    }

    #[test]
    fn test_gpa_large_credit_weights_do_not_overflow() {
        let gpa = Gpa::from_graded([(4.0, u32::MAX), (4.0, 2)]);
        match gpa {
            Gpa::Graded {
                value,
                total_credits,
                ..
            } => {
                assert_eq!(total_credits, u64::from(u32::MAX) + 2);
                assert!((value - 4.0).abs() < 1e-9);
            }
            Gpa::NoGradedCredits => panic!("expected a graded GPA"),
        }
        assert_eq!(gpa.to_string(), "4.00");
    }

    #[test]
    fn test_gpa_zero_credit_courses_do_not_divide_by_zero() {
        let gpa = Gpa::from_graded([(3.0, 0)]);
        assert_eq!(gpa, Gpa::NoGradedCredits);
    }
}
