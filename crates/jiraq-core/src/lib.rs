//! # jiraq-core
//!
//! Core types shared across the jiraq-rs crates:
//! - Remote/search error types (`SearchError`)
//! - Result type aliases
//! - Client configuration (`ClientConfig`)
//! - Paged search results (`SearchPage`)
//!
//! Everything in this crate sits on the *remote* side of the query layer:
//! it describes what the search collaborator accepts and returns, not how
//! queries are built or compiled (that lives in `jiraq-jql`).

pub mod config;
pub mod error;
pub mod page;

pub use config::ClientConfig;
pub use error::{SearchError, SearchResult};
pub use page::SearchPage;
