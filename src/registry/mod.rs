//! Term catalog and term-level metrics.
//!
//! `Term` holds the records of one scheduling term and forwards
//! assignment and enrollment to the policies. `TermKpi` summarizes how
//! full and how staffed the term is.

mod kpi;
mod term;

pub use kpi::TermKpi;
pub use term::Term;
