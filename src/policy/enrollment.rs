//! Student enrollment.
//!
//! # Checks (in order, stopping at the first failure)
//!
//! 1. The student does not already hold the course.
//! 2. Student major equals course major.
//! 3. The roster is below capacity (a full course rejects).
//! 4. Current credits plus course credits stay at or below the ceiling.
//! 5. Every meeting is free on the student's grid.
//!
//! On success the grid cells, the course roster, the student's course
//! list, and the student's credit total all change together. On failure
//! none of them change.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::SchedulingConfig;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Course, Student};
use crate::reservation::Reservation;

/// Enrollment rules for students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentPolicy {
    max_credits: u32,
}

impl Default for EnrollmentPolicy {
    fn default() -> Self {
        Self::new(&SchedulingConfig::default())
    }
}

impl EnrollmentPolicy {
    /// Creates a policy from configuration.
    pub fn new(config: &SchedulingConfig) -> Self {
        Self {
            max_credits: config.max_credits,
        }
    }

    /// Overrides the credit ceiling.
    pub fn with_max_credits(mut self, max_credits: u32) -> Self {
        self.max_credits = max_credits;
        self
    }

    /// Inclusive credit ceiling.
    pub fn max_credits(&self) -> u32 {
        self.max_credits
    }

    /// Enrolls `student` in `course`.
    pub fn enroll(&self, student: &mut Student, course: &mut Course) -> ScheduleResult<()> {
        let total_credits = match self.admit(student, course) {
            Ok(total) => total,
            Err(err) => {
                warn!(student = %student.name, course = %course.name, %err, "enrollment rejected");
                return Err(err);
            }
        };

        student.courses.push(course.id);
        student.total_credits = total_credits;
        course.enrolled.push(student.id);

        info!(
            student = %student.name,
            course = %course.name,
            total_credits = student.total_credits,
            "student enrolled"
        );
        Ok(())
    }

    /// Checks every rule, then reserves the student's grid.
    ///
    /// Returns the student's credit total after enrollment.
    fn admit(&self, student: &mut Student, course: &Course) -> ScheduleResult<u32> {
        if student.courses.contains(&course.id) || course.is_enrolled(student.id) {
            return Err(ScheduleError::AlreadyScheduled {
                owner: student.name.clone(),
                course_id: course.id,
            });
        }

        if student.major != course.major {
            return Err(ScheduleError::MajorMismatch {
                student: student.name.clone(),
                student_major: student.major.clone(),
                course: course.name.clone(),
                course_major: course.major.clone(),
            });
        }

        if course.is_full() {
            return Err(ScheduleError::CapacityExceeded {
                course: course.name.clone(),
                student: student.name.clone(),
                capacity: course.capacity,
            });
        }

        let total = student
            .total_credits
            .checked_add(course.credits)
            .filter(|&t| t <= self.max_credits);
        let Some(total) = total else {
            return Err(ScheduleError::CreditLimitExceeded {
                student: student.name.clone(),
                requested: u64::from(student.total_credits) + u64::from(course.credits),
                max_credits: self.max_credits,
            });
        };

        Reservation::new(&student.name, course.label(), &course.meetings)
            .commit(&mut student.grid)?;
        Ok(total)
    }

    /// Withdraws `student` from `course`, freeing its cells and credits.
    pub fn withdraw(&self, student: &mut Student, course: &mut Course) -> ScheduleResult<()> {
        if !student.courses.contains(&course.id) {
            return Err(ScheduleError::NotHeld {
                owner: student.name.clone(),
                course_id: course.id,
            });
        }

        Reservation::new(&student.name, course.label(), &course.meetings)
            .release(&mut student.grid)?;

        student.courses.retain(|&id| id != course.id);
        student.total_credits = student.total_credits.saturating_sub(course.credits);
        course.enrolled.retain(|&id| id != student.id);

        info!(student = %student.name, course = %course.name, "student withdrew");
        Ok(())
    }
}
