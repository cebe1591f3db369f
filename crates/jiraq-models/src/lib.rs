//! # jiraq-models
//!
//! Typed records for the remote ticket service's JSON payloads, plus each
//! record's declared queryable-field table (consumed by `jiraq-jql`'s
//! field registry).
//!
//! - `issue` - The `Issue` record, its field constants and capability table
//! - `values` - Named value objects (priority, status, users, versions, ...)
//! - `functions` - Standard zero-argument query-language function markers

pub mod functions;
pub mod issue;
pub mod values;

pub use issue::Issue;
pub use values::{Component, IssueUser, Priority, Resolution, Status, Version};
