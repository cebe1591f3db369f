//! Remote error types
//!
//! Errors surfaced by the search collaborator. This layer never interprets
//! them beyond propagating them unchanged to the caller; compile-time query
//! errors are a separate type (`jiraq-jql`'s `JqlError`) and never reach
//! the network.

use thiserror::Error;

/// Standard Result type for remote search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors originating from the remote ticket service or the transport
#[derive(Error, Debug)]
pub enum SearchError {
    /// The service rejected the submitted query text
    #[error("Query rejected by service: {message}")]
    QueryRejected { message: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Not found: {entity} '{key}'")]
    NotFound { entity: &'static str, key: String },

    /// Transport-level failure (connection, timeout, malformed response)
    #[error("Transport error: {0}")]
    Transport(String),

    /// A returned record could not be decoded into the requested type
    #[error("Failed to decode search result: {0}")]
    Decode(String),
}

impl SearchError {
    pub fn query_rejected(message: impl Into<String>) -> Self {
        Self::QueryRejected {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Stable machine-readable code for logging and callers
    pub fn error_code(&self) -> &'static str {
        match self {
            SearchError::QueryRejected { .. } => "query_rejected",
            SearchError::Unauthorized { .. } => "unauthorized",
            SearchError::NotFound { .. } => "not_found",
            SearchError::Transport(_) => "transport_error",
            SearchError::Decode(_) => "decode_error",
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Decode(err.to_string())
    }
}
