//! Scheduling policies for students and teachers.
//!
//! Both policies sit on top of [`crate::reservation`]: they take exclusive
//! mutable access to exactly the records they change and return a
//! [`ScheduleResult`](crate::error::ScheduleResult). `Ok` means every
//! change was applied; `Err` means none was.
//!
//! | Rule | Enrollment | Assignment |
//! |------|------------|------------|
//! | Major match | yes | no |
//! | Capacity | yes | no |
//! | Credit ceiling | yes | no |
//! | Conflict-free grid | yes | yes |

mod assignment;
mod enrollment;

pub use assignment::AssignmentPolicy;
pub use enrollment::EnrollmentPolicy;
