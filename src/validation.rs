//! Course catalog validation.
//!
//! Checks structural integrity of courses before they enter a term.
//! Detects:
//! - Duplicate course IDs
//! - Meetings outside the weekly grid
//! - The same meeting listed twice in one course
//! - Courses with no seats
//! - Courses worth no credits
//! - Courses with no meetings
//!
//! All problems are collected rather than stopping at the first.

use std::collections::HashSet;

use crate::models::Course;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two courses share the same ID.
    DuplicateId,
    /// A meeting's day or slot is out of range.
    InvalidMeeting,
    /// A course lists the same (day, slot) more than once.
    DuplicateMeeting,
    /// A course has zero capacity.
    ZeroCapacity,
    /// A course carries zero credits.
    ZeroCredits,
    /// A course has no meetings.
    EmptySchedule,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a single course.
///
/// Checks:
/// 1. At least one meeting
/// 2. Every meeting resolves to a valid day and slot
/// 3. No meeting is repeated
/// 4. Capacity is at least one
/// 5. Credits are at least one
pub fn validate_course(course: &Course) -> ValidationResult {
    let mut errors = Vec::new();
    collect_course_errors(course, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a whole catalog: every course, plus ID uniqueness.
pub fn validate_catalog(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for course in courses {
        if !ids.insert(course.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }
        collect_course_errors(course, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn collect_course_errors(course: &Course, errors: &mut Vec<ValidationError>) {
    if course.meetings.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySchedule,
            format!("Course '{}' has no meetings", course.id),
        ));
    }

    let mut seen = HashSet::new();
    for m in &course.meetings {
        if let Err(err) = m.resolve() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidMeeting,
                format!("Course '{}' meeting ({}, {}): {err}", course.id, m.day, m.slot),
            ));
        } else if !seen.insert(*m) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateMeeting,
                format!(
                    "Course '{}' lists meeting ({}, {}) more than once",
                    course.id, m.day, m.slot
                ),
            ));
        }
    }

    if course.capacity == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroCapacity,
            format!("Course '{}' has zero capacity", course.id),
        ));
    }

    if course.credits == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroCredits,
            format!("Course '{}' carries zero credits", course.id),
        ));
    }
}
