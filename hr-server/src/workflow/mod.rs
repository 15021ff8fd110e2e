//! Workflow History
//!
//! Merges an employee's onboarding, transfer, and request records into one
//! date-sorted timeline.

mod timeline;

pub use timeline::{WorkflowEntry, WorkflowKind, build_timeline};
