//! Scheduling error types.
//!
//! Every failure is non-fatal: it is detected where it happens, turned
//! into a [`ScheduleError`], and handed back to the caller, which decides
//! whether to skip, retry, or halt. Nothing in this crate retries.
//!
//! # Taxonomy
//!
//! | Kind | Raised by | Variants |
//! |------|-----------|----------|
//! | InvalidIndex | grid | `InvalidDay`, `InvalidSlot` |
//! | Conflict | conflict checker | `Conflict`, `AlreadyScheduled` |
//! | PolicyViolation | enrollment | `MajorMismatch`, `CapacityExceeded`, `CreditLimitExceeded` |
//! | IntegrityFailure | reservation engine | `IntegrityFailure`, `NotReserved` |
//! | Registry | term catalog | `DuplicateId`, `Unknown*`, `NotHeld`, `InvalidCourse` |

use thiserror::Error;

use crate::models::{CourseId, Day, Slot};

/// Errors produced by grid, reservation, policy, and registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("invalid day index {0}")]
    InvalidDay(usize),

    #[error("invalid slot index {0}")]
    InvalidSlot(usize),

    /// A required cell is already taken on the actor's grid.
    #[error("{owner} is busy on {day} {slot} (held by '{occupant}') and cannot take '{course}'")]
    Conflict {
        owner: String,
        course: String,
        day: Day,
        slot: Slot,
        occupant: String,
    },

    #[error("{owner} already holds course {course_id}")]
    AlreadyScheduled { owner: String, course_id: CourseId },

    #[error("{student} ({student_major}) cannot take '{course}' ({course_major}): major mismatch")]
    MajorMismatch {
        student: String,
        student_major: String,
        course: String,
        course_major: String,
    },

    #[error("course '{course}' is full ({capacity} seats), {student} cannot enroll")]
    CapacityExceeded {
        course: String,
        student: String,
        capacity: u32,
    },

    #[error("{student} would carry {requested} credits, above the ceiling of {max_credits}")]
    CreditLimitExceeded {
        student: String,
        requested: u64,
        max_credits: u32,
    },

    /// A staged write failed after the availability check passed.
    #[error("integrity failure reserving {day} {slot} for '{course}' on {owner}'s grid")]
    IntegrityFailure {
        owner: String,
        course: String,
        day: Day,
        slot: Slot,
    },

    #[error("'{course}' does not hold {day} {slot} on {owner}'s grid")]
    NotReserved {
        owner: String,
        course: String,
        day: Day,
        slot: Slot,
    },

    /// Withdraw or unassign for a course the actor does not hold.
    #[error("{owner} does not hold course {course_id}")]
    NotHeld { owner: String, course_id: CourseId },

    #[error("duplicate {entity} id {id}")]
    DuplicateId { entity: &'static str, id: u32 },

    #[error("unknown course {0}")]
    UnknownCourse(CourseId),

    #[error("unknown student {0}")]
    UnknownStudent(u32),

    #[error("unknown teacher {0}")]
    UnknownTeacher(u32),

    #[error("invalid course {course_id}: {reason}")]
    InvalidCourse { course_id: CourseId, reason: String },
}

/// Coarse classification of a [`ScheduleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Day or slot outside the enumerated range.
    InvalidIndex,
    /// Target cell(s) already occupied.
    Conflict,
    /// Major, capacity, or credit rule rejected the request.
    PolicyViolation,
    /// Grid and roster state would have diverged.
    IntegrityFailure,
    /// Catalog lookup or registration problem.
    Registry,
}

impl ScheduleError {
    /// Returns the taxonomy bucket of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDay(_) | Self::InvalidSlot(_) => ErrorKind::InvalidIndex,
            Self::Conflict { .. } | Self::AlreadyScheduled { .. } => ErrorKind::Conflict,
            Self::MajorMismatch { .. }
            | Self::CapacityExceeded { .. }
            | Self::CreditLimitExceeded { .. } => ErrorKind::PolicyViolation,
            Self::IntegrityFailure { .. } | Self::NotReserved { .. } => {
                ErrorKind::IntegrityFailure
            }
            Self::NotHeld { .. }
            | Self::DuplicateId { .. }
            | Self::UnknownCourse(_)
            | Self::UnknownStudent(_)
            | Self::UnknownTeacher(_)
            | Self::InvalidCourse { .. } => ErrorKind::Registry,
        }
    }

    /// Whether this is a policy rejection (major, capacity, credits).
    pub fn is_policy_violation(&self) -> bool {
        self.kind() == ErrorKind::PolicyViolation
    }
}

/// Result alias used throughout the crate.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
