//! # jiraq-jql
//!
//! The query translation layer: a typed expression tree over declared
//! entity fields, compiled into the remote service's textual query
//! language (JQL).
//!
//! ## Structure
//!
//! - `fields` - Field capability metadata and the per-type descriptor registry
//! - `ops` - Comparison operator tokens and literal rendering/escaping
//! - `ast` - The immutable expression tree and query accumulator
//! - `compiler` - Tree-to-text compilation into a [`CompiledQuery`]
//! - `error` - Compile-time (client-side) error types
//!
//! ## Example
//!
//! ```
//! use jiraq_jql::ast::{Field, QuerySpec};
//! use jiraq_jql::fields::{Capability, FieldSpec, Queryable};
//! use jiraq_jql::compiler::compile;
//!
//! struct Ticket;
//!
//! const PRIORITY: Field = Field::new("priority");
//!
//! static TICKET_FIELDS: &[FieldSpec] = &[FieldSpec::new("priority", "priority")
//!     .with(&[Capability::Comparable, Capability::Sortable])];
//!
//! impl Queryable for Ticket {
//!     fn entity_name() -> &'static str { "ticket" }
//!     fn field_specs() -> &'static [FieldSpec] { TICKET_FIELDS }
//! }
//!
//! let spec = QuerySpec::new()
//!     .filtered(PRIORITY.eq("Major").or(PRIORITY.eq("Minor")))
//!     .ordered_by(PRIORITY, false);
//! let compiled = compile::<Ticket>(&spec).unwrap();
//! assert_eq!(compiled.predicate, r#"priority = "Major" OR priority = "Minor""#);
//! ```

pub mod ast;
pub mod compiler;
pub mod error;
pub mod fields;
pub mod ops;

// Re-exports for convenience
pub use ast::{Expr, Field, OrderStep, Projection, QuerySpec};
pub use compiler::{compile, CompiledQuery, OrderClause};
pub use error::{JqlError, JqlResult};
pub use fields::{Capability, FieldDescriptor, FieldRegistry, FieldSpec, FieldTable, Queryable};
pub use ops::{CompareOp, Literal};
