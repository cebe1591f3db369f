//! Query execution errors
//!
//! The two disjoint error classes of the query layer, kept distinguishable
//! in the type: compile-time errors (`Compile`) are raised before any
//! network activity, remote errors (`Search`) are propagated unchanged
//! from the search collaborator.

use thiserror::Error;

use jiraq_core::SearchError;
use jiraq_jql::JqlError;

pub type QueryResult<T> = Result<T, QueryError>;

#[derive(Error, Debug)]
pub enum QueryError {
    /// The query could not be translated; nothing was sent
    #[error("Query compilation failed: {0}")]
    Compile(#[from] JqlError),

    /// The remote service or transport failed
    #[error("Remote search failed: {0}")]
    Search(#[from] SearchError),
}

impl QueryError {
    /// Whether the failure happened before any network call
    pub fn is_client_side(&self) -> bool {
        matches!(self, QueryError::Compile(_))
    }
}
