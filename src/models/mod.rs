//! Timetabling domain models.
//!
//! Provides the weekly time model, the per-actor occupancy grid, and the
//! course, student, and teacher records the policies operate on.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | Training Center |
//! |-------------|------------|-----------------|
//! | Course | Course section | Workshop |
//! | Student | Student | Trainee |
//! | Teacher | Lecturer | Instructor |
//! | WeeklyGrid | Personal timetable | Room-free calendar |

mod actor;
mod course;
mod grid;
mod time;

pub use actor::{Student, Teacher, Timetabled};
pub use course::Course;
pub use grid::WeeklyGrid;
pub use time::{Day, Meeting, Slot, NUM_DAYS, NUM_SLOTS};

/// Course identifier.
pub type CourseId = u32;

/// Student identifier.
pub type StudentId = u32;

/// Teacher identifier.
pub type TeacherId = u32;
