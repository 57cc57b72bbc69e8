//! Atomic multi-slot reservation.
//!
//! # Algorithm
//!
//! 1. Run the availability pre-check over every meeting. Any failure
//!    aborts with the grid untouched.
//! 2. Stage every write on a scratch copy of the grid.
//! 3. Swap the scratch copy in only if every staged write succeeded.
//!
//! A staged write can still fail after step 1 passed when a course lists
//! the same (day, slot) twice. That surfaces as
//! [`ScheduleError::IntegrityFailure`] and, thanks to staging, leaves the
//! live grid exactly as it was.

use tracing::{debug, error};

use super::conflict::check_available;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Meeting, WeeklyGrid};

/// One course's placement on one actor's grid.
#[derive(Debug, Clone, Copy)]
pub struct Reservation<'a> {
    owner: &'a str,
    label: &'a str,
    meetings: &'a [Meeting],
}

impl<'a> Reservation<'a> {
    /// Describes a placement of `label` at `meetings` on `owner`'s grid.
    pub fn new(owner: &'a str, label: &'a str, meetings: &'a [Meeting]) -> Self {
        Self {
            owner,
            label,
            meetings,
        }
    }

    /// Reserves every meeting, or none.
    pub fn commit(&self, grid: &mut WeeklyGrid) -> ScheduleResult<()> {
        check_available(grid, self.owner, self.label, self.meetings)?;

        let mut staged = grid.clone();
        for m in self.meetings {
            if !staged.reserve(m.day, m.slot, self.label) {
                return Err(self.integrity_failure(m));
            }
        }

        *grid = staged;
        debug!(owner = self.owner, course = self.label, "reservation committed");
        Ok(())
    }

    /// Clears every meeting, or none.
    ///
    /// Every meeting must currently be held by this reservation's label.
    pub fn release(&self, grid: &mut WeeklyGrid) -> ScheduleResult<()> {
        for m in self.meetings {
            let (day, slot) = m.resolve()?;
            if grid.occupant(m.day, m.slot) != Some(self.label) {
                return Err(ScheduleError::NotReserved {
                    owner: self.owner.to_owned(),
                    course: self.label.to_owned(),
                    day,
                    slot,
                });
            }
        }

        let mut staged = grid.clone();
        for m in self.meetings {
            if !staged.unreserve(m.day, m.slot) {
                return Err(self.integrity_failure(m));
            }
        }

        *grid = staged;
        debug!(owner = self.owner, course = self.label, "reservation released");
        Ok(())
    }

    fn integrity_failure(&self, meeting: &Meeting) -> ScheduleError {
        // Only reachable with an already-resolved meeting.
        let (day, slot) = match meeting.resolve() {
            Ok(pair) => pair,
            Err(err) => return err,
        };
        error!(
            owner = self.owner,
            course = self.label,
            %day,
            %slot,
            "staged write failed after pre-check; grid left unchanged"
        );
        ScheduleError::IntegrityFailure {
            owner: self.owner.to_owned(),
            course: self.label.to_owned(),
            day,
            slot,
        }
    }
}
