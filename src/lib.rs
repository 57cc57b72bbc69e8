//! Weekly course timetabling for the U-Engine ecosystem.
//!
//! Assigns teachers to courses without time conflicts and enrolls students
//! subject to major, capacity, credit-load, and time-conflict rules. Every
//! multi-slot reservation is all-or-nothing.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, `Slot`, `Meeting`, `WeeklyGrid`,
//!   `Course`, `Student`, `Teacher`
//! - **`reservation`**: Conflict checking and the atomic reservation engine
//! - **`policy`**: `EnrollmentPolicy` (students) and `AssignmentPolicy` (teachers)
//! - **`registry`**: `Term` catalog and `TermKpi`
//! - **`validation`**: Course catalog integrity checks
//! - **`config`**: `SchedulingConfig` (credit ceiling), loadable from TOML
//!
//! # Architecture
//!
//! ```text
//! Term
//!   ├── AssignmentPolicy ──┐
//!   └── EnrollmentPolicy ──┴── Reservation (check, stage, swap)
//!                                 └── WeeklyGrid (5 days x 4 slots)
//! ```
//!
//! Single-threaded and synchronous. Each actor owns its grid; policies take
//! `&mut` to exactly the records they change.

pub mod config;
pub mod error;
pub mod models;
pub mod policy;
pub mod registry;
pub mod reservation;
pub mod validation;

pub use error::{ErrorKind, ScheduleError, ScheduleResult};
