//! Availability pre-check over a course's meetings.
//!
//! Evaluates every required (day, slot) against the target grid before
//! any cell is written. This is what makes a multi-cell reservation
//! behave as one transaction.

use tracing::debug;

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Meeting, WeeklyGrid};

/// Fails on the first meeting that is out of range or already occupied.
///
/// # Arguments
/// * `grid` - The actor's grid, read only.
/// * `owner` - Actor name, reported in the conflict.
/// * `course` - Label of the course being placed.
/// * `meetings` - Every cell the course needs.
pub fn check_available(
    grid: &WeeklyGrid,
    owner: &str,
    course: &str,
    meetings: &[Meeting],
) -> ScheduleResult<()> {
    for m in meetings {
        check_meeting(grid, owner, course, m)?;
    }
    debug!(owner, course, cells = meetings.len(), "all required cells free");
    Ok(())
}

/// Collects every blocking meeting instead of stopping at the first.
///
/// Returns an empty vector when the course fits.
pub fn find_conflicts(
    grid: &WeeklyGrid,
    owner: &str,
    course: &str,
    meetings: &[Meeting],
) -> Vec<ScheduleError> {
    meetings
        .iter()
        .filter_map(|m| check_meeting(grid, owner, course, m).err())
        .collect()
}

fn check_meeting(
    grid: &WeeklyGrid,
    owner: &str,
    course: &str,
    meeting: &Meeting,
) -> ScheduleResult<()> {
    let (day, slot) = meeting.resolve()?;
    match grid.occupant(meeting.day, meeting.slot) {
        None => Ok(()),
        Some(occupant) => Err(ScheduleError::Conflict {
            owner: owner.to_owned(),
            course: course.to_owned(),
            day,
            slot,
            occupant: occupant.to_owned(),
        }),
    }
}
