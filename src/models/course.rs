//! Course model.
//!
//! A course is registered once with its identity, credit weight, seat
//! capacity, and the weekly meetings it requires. Only the roster of
//! enrolled students changes afterwards, and only through enrollment.

use serde::{Deserialize, Serialize};

use super::time::Meeting;
use super::{CourseId, StudentId, TeacherId};

/// A course offered in the term.
///
/// Fields are fixed once built: grids and credit totals record the
/// course's label, meetings, and credits, so changing them afterwards
/// would strand those records. Use the builder methods before the course
/// is enrolled or assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub(crate) id: CourseId,
    pub(crate) name: String,
    pub(crate) major: String,
    pub(crate) teacher_id: Option<TeacherId>,
    pub(crate) credits: u32,
    pub(crate) capacity: u32,
    pub(crate) meetings: Vec<Meeting>,
    pub(crate) enrolled: Vec<StudentId>,
}

impl Course {
    /// Creates a course with no meetings, zero credits, and zero capacity.
    pub fn new(id: CourseId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            major: String::new(),
            teacher_id: None,
            credits: 0,
            capacity: 0,
            meetings: Vec::new(),
            enrolled: Vec::new(),
        }
    }

    /// Sets the major.
    pub fn with_major(mut self, major: impl Into<String>) -> Self {
        self.major = major.into();
        self
    }

    /// Sets the responsible teacher.
    pub fn with_teacher(mut self, teacher_id: TeacherId) -> Self {
        self.teacher_id = Some(teacher_id);
        self
    }

    /// Sets the credit weight.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Sets the seat capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Appends a weekly meeting.
    pub fn with_meeting(mut self, meeting: impl Into<Meeting>) -> Self {
        self.meetings.push(meeting.into());
        self
    }

    /// Replaces the weekly meetings.
    pub fn with_meetings(mut self, meetings: Vec<Meeting>) -> Self {
        self.meetings = meetings;
        self
    }

    /// Unique course identifier.
    pub fn id(&self) -> CourseId {
        self.id
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Label written into grid cells this course occupies.
    pub fn label(&self) -> &str {
        &self.name
    }

    /// Major the course belongs to; students must match it to enroll.
    pub fn major(&self) -> &str {
        &self.major
    }

    /// Teacher nominally responsible for the course.
    pub fn teacher_id(&self) -> Option<TeacherId> {
        self.teacher_id
    }

    /// Credit weight counted against a student's ceiling.
    pub fn credits(&self) -> u32 {
        self.credits
    }

    /// Maximum number of enrolled students.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Weekly meetings, in authoring order.
    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    /// Enrolled student ids, in enrollment order.
    pub fn enrolled_ids(&self) -> &[StudentId] {
        &self.enrolled
    }

    /// Number of enrolled students.
    pub fn enrolled_count(&self) -> usize {
        self.enrolled.len()
    }

    /// Whether a student is on the roster.
    pub fn is_enrolled(&self, student_id: StudentId) -> bool {
        self.enrolled.contains(&student_id)
    }

    /// Whether every seat is taken.
    pub fn is_full(&self) -> bool {
        self.enrolled.len() >= self.capacity as usize
    }

    /// Remaining seats.
    pub fn seats_left(&self) -> u32 {
        (self.capacity as usize).saturating_sub(self.enrolled.len()) as u32
    }

    /// Fraction of seats taken. Returns `None` for zero-capacity courses.
    pub fn fill_rate(&self) -> Option<f64> {
        if self.capacity == 0 {
            return None;
        }
        Some(self.enrolled.len() as f64 / self.capacity as f64)
    }
}
