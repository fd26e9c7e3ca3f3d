//! End-to-end workflows over the record engine

use registrar_core::{
    Admission, ErrorCategory, Gpa, NewCourse, Registry, RegistryError, Replay, UndoKind,
};

fn cs101_registry(capacity: u32) -> Registry {
    let mut registry = Registry::new();
    registry
        .add_course(NewCourse::new("CS101", "Introduction to CS", 3, capacity))
        .unwrap();
    registry.add_student(1, "A").unwrap();
    registry.add_student(2, "B").unwrap();
    registry
}

/// Capacity-1 course: second student is waitlisted, undo removes the first
/// student's seat and leaves the waitlist alone.
#[test]
fn test_waitlist_then_undo_workflow() {
    let mut registry = cs101_registry(1);

    assert_eq!(registry.enroll(1, "CS101").unwrap(), Admission::Enrolled);
    assert_eq!(registry.find_course("CS101").unwrap().enrolled_count(), 1);

    assert_eq!(
        registry.enroll(2, "CS101").unwrap(),
        Admission::Waitlisted { position: 1 }
    );
    assert_eq!(registry.find_course("CS101").unwrap().enrolled_count(), 1);

    let report = registry.undo_last_action().unwrap();
    assert_eq!(report.action.kind, UndoKind::Enroll);
    assert_eq!(report.action.student_id, 1);
    assert_eq!(report.replay, Ok(Replay::Dropped));

    let course = registry.find_course("CS101").unwrap();
    assert_eq!(course.enrolled_count(), 0);
    let waitlisted: Vec<_> = course.waitlist().iter().map(|e| e.student_id).collect();
    assert_eq!(waitlisted, vec![2]);
    assert!(registry.find_student(2).unwrap().enrollments().is_empty());
}

/// Grade then undo twice: the grade reverts to ungraded, then the enrollment
/// disappears.
#[test]
fn test_grade_undo_undo_workflow() {
    let mut registry = cs101_registry(5);
    registry.enroll(1, "CS101").unwrap();
    assert_eq!(registry.enter_grade(1, "CS101", 3.7).unwrap(), None);
    assert_eq!(registry.compute_gpa(1).unwrap().value(), Some(3.7));

    registry.undo_last_action().unwrap();
    let enrollment = registry
        .find_student(1)
        .unwrap()
        .enrollment("CS101")
        .unwrap();
    assert!(!enrollment.is_graded());
    assert_eq!(registry.compute_gpa(1).unwrap(), Gpa::NoGradedCredits);

    registry.undo_last_action().unwrap();
    assert!(registry.find_student(1).unwrap().enrollment("CS101").is_none());
    assert_eq!(registry.find_course("CS101").unwrap().enrolled_count(), 0);
}

/// Queue one request, process it, then process the empty queue.
#[test]
fn test_request_queue_workflow() {
    let mut registry = cs101_registry(5);
    registry.enqueue_request(1, "CS101");

    let processed = registry.process_next_request().unwrap();
    assert_eq!(processed.outcome, Ok(Admission::Enrolled));
    assert_eq!(registry.pending_requests().count(), 0);
    assert!(registry.find_student(1).unwrap().enrollment("CS101").is_some());

    let err = registry.process_next_request().unwrap_err();
    assert_eq!(err, RegistryError::QueueEmpty);
    assert_eq!(err.category(), ErrorCategory::Emptiness);
}

/// Queued admissions are undoable like direct ones.
#[test]
fn test_processed_request_is_undoable() {
    let mut registry = cs101_registry(5);
    registry.enqueue_request(2, "CS101");
    registry.process_next_request().unwrap();

    let report = registry.undo_last_action().unwrap();
    assert_eq!(report.action.kind, UndoKind::Enroll);
    assert!(registry.find_student(2).unwrap().enrollments().is_empty());
}

/// Queued requests against a full course waitlist rather than fail.
#[test]
fn test_processed_request_waitlists() {
    let mut registry = cs101_registry(1);
    registry.enroll(1, "CS101").unwrap();
    registry.enqueue_request(2, "CS101");

    let processed = registry.process_next_request().unwrap();
    assert_eq!(processed.outcome, Ok(Admission::Waitlisted { position: 1 }));
    assert_eq!(registry.undo_history().count(), 1);
}

#[test]
fn test_duplicate_identities_rejected() {
    let mut registry = cs101_registry(5);
    let err = registry.add_student(1, "Again").unwrap_err();
    assert_eq!(err, RegistryError::DuplicateStudent(1));
    assert_eq!(err.category(), ErrorCategory::IdentityConflict);

    let err = registry
        .add_course(NewCourse::new("CS101", "Again", 1, 1))
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateCourse("CS101".to_string()));
    assert_eq!(registry.catalog().len(), 1);
}

#[test]
fn test_catalog_forward_backward() {
    let mut registry = Registry::new();
    for (id, name) in [("CS101", "Intro"), ("CS102", "DS"), ("MATH1", "Calc")] {
        registry.add_course(NewCourse::new(id, name, 3, 5)).unwrap();
    }

    let forward: Vec<_> = registry.courses_forward().map(|c| c.id().to_string()).collect();
    let mut backward: Vec<_> = registry.courses_backward().map(|c| c.id().to_string()).collect();
    assert_eq!(forward, vec!["CS101", "CS102", "MATH1"]);
    backward.reverse();
    assert_eq!(forward, backward);
}

#[test]
fn test_student_report() {
    let mut registry = cs101_registry(5);
    registry
        .add_course(NewCourse::new("CS102", "Data Structures", 4, 1))
        .unwrap();
    registry.enroll(1, "CS101").unwrap();
    registry.enroll(1, "CS102").unwrap();
    registry.enter_grade(1, "CS102", 4.0).unwrap();

    let report = registry.student_report(1).unwrap();
    assert_eq!(report.student.name(), "A");
    let courses: Vec<_> = report.lines.iter().map(|l| l.course_id).collect();
    assert_eq!(courses, vec!["CS101", "CS102"]);
    assert_eq!(
        report.gpa,
        Gpa::Graded {
            value: 4.0,
            total_points: 16.0,
            total_credits: 4
        }
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["student"]["name"], "A");
    assert_eq!(json["lines"][1]["grade"], 4.0);
}

#[test]
fn test_regrade_undo_restores_previous_grade() {
    let mut registry = cs101_registry(5);
    registry.enroll(1, "CS101").unwrap();
    registry.enter_grade(1, "CS101", 2.0).unwrap();
    assert_eq!(registry.enter_grade(1, "CS101", 3.0).unwrap(), Some(2.0));

    let report = registry.undo_last_action().unwrap();
    assert_eq!(report.action.prior_grade, Some(2.0));
    assert_eq!(
        registry.find_student(1).unwrap().enrollment("CS101").unwrap().grade(),
        Some(2.0)
    );
}
