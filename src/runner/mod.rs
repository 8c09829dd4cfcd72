//! Check orchestration.
//!
//! - [`checklist`] runs the checks in order
//! - [`summary`] aggregates their results and prints the verdict

pub mod checklist;
pub mod summary;

pub use checklist::{ChecklistResult, ChecklistRunner};
pub use summary::Summary;
