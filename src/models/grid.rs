//! Weekly occupancy grid.
//!
//! A fixed 5 x 4 matrix of cells owned by exactly one student or teacher.
//! Each cell is either free or holds the label of the course occupying it.
//!
//! # Invariant
//! A cell is occupied iff its owner is committed to attend or teach at
//! that day and slot. Out-of-range indices never touch the array: they
//! are validated first and the query fails closed.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use super::time::{Day, Meeting, Slot, NUM_DAYS, NUM_SLOTS};
use crate::error::ScheduleResult;

/// Occupancy of one student's or teacher's week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyGrid {
    cells: [[Option<String>; NUM_SLOTS]; NUM_DAYS],
}

impl WeeklyGrid {
    /// Creates a grid with every cell free.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates raw indices.
    pub fn locate(day: usize, slot: usize) -> ScheduleResult<(Day, Slot)> {
        Meeting::raw(day, slot).resolve()
    }

    /// Whether the cell is free.
    ///
    /// Fails closed: out-of-range indices return `false` and emit a
    /// warning event.
    pub fn is_available(&self, day: usize, slot: usize) -> bool {
        match Self::locate(day, slot) {
            Ok((d, s)) => self.cells[d.index()][s.index()].is_none(),
            Err(err) => {
                warn!(day, slot, %err, "availability query out of range");
                false
            }
        }
    }

    /// Label of the course occupying the cell, if any.
    pub fn occupant(&self, day: usize, slot: usize) -> Option<&str> {
        let (d, s) = Self::locate(day, slot).ok()?;
        self.cells[d.index()][s.index()].as_deref()
    }

    /// Marks a free cell as occupied by `label`.
    ///
    /// Returns `false` without mutation if the cell is occupied or the
    /// indices are out of range.
    pub fn reserve(&mut self, day: usize, slot: usize, label: &str) -> bool {
        if !self.is_available(day, slot) {
            return false;
        }
        self.cells[day][slot] = Some(label.to_owned());
        true
    }

    /// Clears an occupied cell.
    ///
    /// Returns `false` without mutation if the cell is already free or the
    /// indices are out of range.
    pub fn unreserve(&mut self, day: usize, slot: usize) -> bool {
        if self.occupant(day, slot).is_none() {
            return false;
        }
        self.cells[day][slot] = None;
        true
    }

    /// Iterates occupied cells in week order.
    pub fn occupied(&self) -> impl Iterator<Item = (Day, Slot, &str)> + '_ {
        Day::all().into_iter().flat_map(move |d| {
            Slot::all().into_iter().filter_map(move |s| {
                self.cells[d.index()][s.index()]
                    .as_deref()
                    .map(|label| (d, s, label))
            })
        })
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Fraction of the week that is occupied (0.0..1.0).
    pub fn utilization(&self) -> f64 {
        self.occupied_count() as f64 / (NUM_DAYS * NUM_SLOTS) as f64
    }

    /// Whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }
}

impl fmt::Display for WeeklyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in Day::all() {
            writeln!(f, "{day}:")?;
            for slot in Slot::all() {
                let status = self.cells[day.index()][slot.index()]
                    .as_deref()
                    .unwrap_or("free");
                writeln!(f, "  {:>5}: {status}", slot.label())?;
            }
        }
        Ok(())
    }
}
