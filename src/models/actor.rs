//! Students and teachers.
//!
//! Each actor owns its weekly grid outright. A course id sits in an
//! actor's course list iff every meeting of that course is marked on the
//! actor's grid, so grids and course lists are only changed together by
//! the policies in [`crate::policy`].

use serde::{Deserialize, Serialize};

use super::grid::WeeklyGrid;
use super::{CourseId, StudentId, TeacherId};

/// Read access shared by everything that keeps a weekly timetable.
pub trait Timetabled {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// The actor's weekly grid.
    fn grid(&self) -> &WeeklyGrid;

    /// Courses the actor is committed to, in commit order.
    fn course_ids(&self) -> &[CourseId];

    /// Whether the actor already holds the course.
    fn holds(&self, course_id: CourseId) -> bool {
        self.course_ids().contains(&course_id)
    }
}

/// A student taking courses in the term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: StudentId,
    /// Display name.
    pub name: String,
    /// Major; only courses of the same major can be taken.
    pub major: String,
    pub(crate) grid: WeeklyGrid,
    pub(crate) courses: Vec<CourseId>,
    pub(crate) total_credits: u32,
}

impl Student {
    /// Creates a student with an empty timetable.
    pub fn new(id: StudentId, name: impl Into<String>, major: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            major: major.into(),
            grid: WeeklyGrid::new(),
            courses: Vec::new(),
            total_credits: 0,
        }
    }

    /// Credits currently carried.
    pub fn total_credits(&self) -> u32 {
        self.total_credits
    }
}

impl Timetabled for Student {
    fn name(&self) -> &str {
        &self.name
    }

    fn grid(&self) -> &WeeklyGrid {
        &self.grid
    }

    fn course_ids(&self) -> &[CourseId] {
        &self.courses
    }
}

/// A teacher assigned to courses in the term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: TeacherId,
    /// Display name.
    pub name: String,
    /// Home major. Not checked on assignment.
    pub major: String,
    pub(crate) grid: WeeklyGrid,
    pub(crate) courses: Vec<CourseId>,
}

impl Teacher {
    /// Creates a teacher with an empty timetable.
    pub fn new(id: TeacherId, name: impl Into<String>, major: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            major: major.into(),
            grid: WeeklyGrid::new(),
            courses: Vec::new(),
        }
    }
}

impl Timetabled for Teacher {
    fn name(&self) -> &str {
        &self.name
    }

    fn grid(&self) -> &WeeklyGrid {
        &self.grid
    }

    fn course_ids(&self) -> &[CourseId] {
        &self.courses
    }
}
