//! Compile-time query errors
//!
//! Every variant here is raised on the client before any network activity.
//! A failed compilation aborts the whole query; no partial or best-effort
//! predicate is ever sent to the service. Remote errors are a separate
//! type (`jiraq-core`'s `SearchError`).

use thiserror::Error;

use crate::fields::Capability;

/// Result type for query compilation
pub type JqlResult<T> = Result<T, JqlError>;

/// Errors raised while translating an expression tree to query text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JqlError {
    /// The tree contains a construct the compiler cannot translate
    #[error("Unsupported expression for query construction: {construct}")]
    UnsupportedExpression { construct: String },

    /// A field was used with an operator its capability set does not allow
    #[error("Field '{field}' does not support {capability} (missing capability)")]
    MissingCapability { field: String, capability: Capability },

    /// `skip` or `take` was applied more than once on the same query
    #[error("'{clause}' may only be applied once per query")]
    DuplicatePaging { clause: &'static str },

    /// `in` / `not in` / `was in` was given no values
    #[error("Field '{field}': '{operator}' requires at least one value")]
    EmptyValueList {
        field: String,
        operator: &'static str,
    },

    /// A projection other than the identity was requested
    #[error("Unsupported projection '{projection}': only the whole record can be selected")]
    UnsupportedProjection { projection: String },
}

impl JqlError {
    pub fn unsupported(construct: impl Into<String>) -> Self {
        Self::UnsupportedExpression {
            construct: construct.into(),
        }
    }

    pub fn missing_capability(field: impl Into<String>, capability: Capability) -> Self {
        Self::MissingCapability {
            field: field.into(),
            capability,
        }
    }
}
