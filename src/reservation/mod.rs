//! Conflict checking and atomic reservation on weekly grids.
//!
//! Shared by teacher assignment and student enrollment. The conflict
//! checker reads a grid; the reservation engine writes it, all cells of a
//! course or none.

mod conflict;
mod engine;

pub use conflict::{check_available, find_conflicts};
pub use engine::Reservation;
