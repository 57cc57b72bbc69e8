//! Weekly time model: days, daily slots, and course meetings.
//!
//! The scheduling week has five days and four fixed daily intervals,
//! giving 20 cells per grid. Indices are what the grid stores; labels
//! exist only for rendering and diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ScheduleError, ScheduleResult};

/// Number of scheduling days in a week.
pub const NUM_DAYS: usize = 5;

/// Number of time slots per day.
pub const NUM_SLOTS: usize = 4;

/// A scheduling day, in week order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
}

/// A fixed daily teaching interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    /// 08:00 - 10:00
    S08To10,
    /// 10:00 - 12:00
    S10To12,
    /// 14:00 - 16:00
    S14To16,
    /// 16:00 - 18:00
    S16To18,
}

impl Day {
    /// All days in week order.
    pub const fn all() -> [Day; NUM_DAYS] {
        [
            Day::Saturday,
            Day::Sunday,
            Day::Monday,
            Day::Tuesday,
            Day::Wednesday,
        ]
    }

    /// Converts a raw index, rejecting anything outside `0..NUM_DAYS`.
    pub fn from_index(index: usize) -> ScheduleResult<Self> {
        Self::all()
            .get(index)
            .copied()
            .ok_or(ScheduleError::InvalidDay(index))
    }

    /// Position of this day within the week.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// English display name.
    pub fn label(self) -> &'static str {
        match self {
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
        }
    }
}

impl Slot {
    /// All slots in daily order.
    pub const fn all() -> [Slot; NUM_SLOTS] {
        [Slot::S08To10, Slot::S10To12, Slot::S14To16, Slot::S16To18]
    }

    /// Converts a raw index, rejecting anything outside `0..NUM_SLOTS`.
    pub fn from_index(index: usize) -> ScheduleResult<Self> {
        Self::all()
            .get(index)
            .copied()
            .ok_or(ScheduleError::InvalidSlot(index))
    }

    /// Position of this slot within the day.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Hour range, e.g. `"8-10"`.
    pub fn label(self) -> &'static str {
        match self {
            Slot::S08To10 => "8-10",
            Slot::S10To12 => "10-12",
            Slot::S14To16 => "14-16",
            Slot::S16To18 => "16-18",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One required (day, slot) entry of a course schedule.
///
/// Stores raw indices so that externally authored course data can be
/// represented as-is and flagged invalid later; use [`Meeting::new`] when
/// the day and slot are already known to be valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meeting {
    /// Day index (0 = Saturday).
    pub day: usize,
    /// Slot index (0 = 8-10).
    pub slot: usize,
}

impl Meeting {
    /// Creates a meeting from typed day and slot.
    pub fn new(day: Day, slot: Slot) -> Self {
        Self {
            day: day.index(),
            slot: slot.index(),
        }
    }

    /// Creates a meeting from unchecked indices.
    pub fn raw(day: usize, slot: usize) -> Self {
        Self { day, slot }
    }

    /// Resolves the indices, failing on the first out-of-range component.
    pub fn resolve(&self) -> ScheduleResult<(Day, Slot)> {
        Ok((Day::from_index(self.day)?, Slot::from_index(self.slot)?))
    }

    /// Whether both indices are in range.
    pub fn is_valid(&self) -> bool {
        self.resolve().is_ok()
    }
}

impl From<(Day, Slot)> for Meeting {
    fn from((day, slot): (Day, Slot)) -> Self {
        Self::new(day, slot)
    }
}
