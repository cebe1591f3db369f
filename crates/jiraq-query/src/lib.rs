//! # jiraq-query
//!
//! The public query surface and its execution bridge.
//!
//! Callers compose filters, ordering and paging against a typed
//! [`JqlQuery`]; nothing executes until the query is fetched, at which
//! point the accumulated tree is compiled (`jiraq-jql`) and resolved
//! through a single remote paged-search call. Every fetch recompiles and
//! re-executes — there is no client-side caching, by design.
//!
//! ## Structure
//!
//! - `surface` - The composable, structurally-shared [`JqlQuery`]
//! - `searcher` - The paged-search collaborator trait
//! - `executor` - Compiled-query execution, paging defaults, decoding
//! - `dry_run` - A recording searcher for verifying compiler output
//! - `client` - Entry point handing out typed query surfaces
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use jiraq_core::ClientConfig;
//! use jiraq_models::issue::fields;
//! use jiraq_query::{DryRunSearcher, JiraClient};
//!
//! let searcher = Arc::new(DryRunSearcher::new());
//! let client = JiraClient::new(searcher, ClientConfig::default());
//!
//! let majors = client
//!     .issues()
//!     .filter(fields::PRIORITY.eq("Major"))
//!     .order_by(fields::CREATED)
//!     .take(50);
//!
//! // Nothing has executed yet; the compiled form is inspectable.
//! let compiled = majors.compile().unwrap();
//! assert_eq!(compiled.predicate, r#"priority = "Major""#);
//! assert_eq!(compiled.max_results, Some(50));
//! ```

pub mod client;
pub mod dry_run;
pub mod error;
pub mod executor;
pub mod searcher;
pub mod surface;

pub use client::JiraClient;
pub use dry_run::{DryRunSearcher, RecordedQuery};
pub use error::{QueryError, QueryResult};
pub use executor::SearchExecutor;
pub use searcher::IssueSearcher;
pub use surface::JqlQuery;
