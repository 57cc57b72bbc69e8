//! Teacher assignment.
//!
//! Only the teacher's grid is consulted: no major, capacity, or credit
//! rule applies, so any teacher may take any course whose meetings fit.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Course, Teacher};
use crate::reservation::Reservation;

/// Assignment rules for teachers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentPolicy;

impl AssignmentPolicy {
    /// Creates the policy.
    pub fn new() -> Self {
        Self
    }

    /// Binds `teacher` to `course` if every meeting is free.
    pub fn assign(&self, teacher: &mut Teacher, course: &Course) -> ScheduleResult<()> {
        let result = if teacher.courses.contains(&course.id) {
            Err(ScheduleError::AlreadyScheduled {
                owner: teacher.name.clone(),
                course_id: course.id,
            })
        } else {
            Reservation::new(&teacher.name, course.label(), &course.meetings)
                .commit(&mut teacher.grid)
        };

        if let Err(err) = result {
            warn!(teacher = %teacher.name, course = %course.name, %err, "assignment rejected");
            return Err(err);
        }

        teacher.courses.push(course.id);
        info!(teacher = %teacher.name, course = %course.name, "teacher assigned");
        Ok(())
    }

    /// Releases `teacher` from `course`.
    pub fn unassign(&self, teacher: &mut Teacher, course: &Course) -> ScheduleResult<()> {
        if !teacher.courses.contains(&course.id) {
            return Err(ScheduleError::NotHeld {
                owner: teacher.name.clone(),
                course_id: course.id,
            });
        }

        Reservation::new(&teacher.name, course.label(), &course.meetings)
            .release(&mut teacher.grid)?;
        teacher.courses.retain(|&id| id != course.id);

        info!(teacher = %teacher.name, course = %course.name, "teacher unassigned");
        Ok(())
    }
}
