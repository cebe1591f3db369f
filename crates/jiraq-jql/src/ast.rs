//! Query expression tree
//!
//! [`Field`] is a symbolic reference to a queryable property: it carries no
//! data and is never evaluated locally, it only exists to be captured in an
//! [`Expr`] tree. Conditions are built through explicit combinators
//! (`eq`, `contains`, `in_list`, ...) rather than operator overloads, so a
//! condition that cannot be translated simply cannot be constructed or is
//! rejected at compile time by the compiler module.
//!
//! All nodes are immutable once built; combining expressions consumes the
//! parts and produces a new tree.

use crate::ops::{CompareOp, Literal};

/// Symbolic reference to a queryable property of an entity type
///
/// Declared as constants next to the entity (see `jiraq-models`). The
/// property name is the identity the field registry resolves descriptors
/// by; it is not read from or written to any record instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    property: &'static str,
}

impl Field {
    pub const fn new(property: &'static str) -> Self {
        Self { property }
    }

    /// The local property name (registry lookup key)
    pub fn property(&self) -> &'static str {
        self.property
    }

    // Comparison conditions

    pub fn eq(self, value: impl Into<Literal>) -> Expr {
        self.compare(CompareOp::Eq, value)
    }

    pub fn ne(self, value: impl Into<Literal>) -> Expr {
        self.compare(CompareOp::Ne, value)
    }

    pub fn gt(self, value: impl Into<Literal>) -> Expr {
        self.compare(CompareOp::Gt, value)
    }

    pub fn ge(self, value: impl Into<Literal>) -> Expr {
        self.compare(CompareOp::Ge, value)
    }

    pub fn lt(self, value: impl Into<Literal>) -> Expr {
        self.compare(CompareOp::Lt, value)
    }

    pub fn le(self, value: impl Into<Literal>) -> Expr {
        self.compare(CompareOp::Le, value)
    }

    fn compare(self, op: CompareOp, value: impl Into<Literal>) -> Expr {
        Expr::Compare {
            field: self,
            op,
            value: value.into(),
        }
    }

    // Membership conditions

    pub fn in_list<I, L>(self, values: I) -> Expr
    where
        I: IntoIterator<Item = L>,
        L: Into<Literal>,
    {
        Expr::In {
            field: self,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn not_in_list<I, L>(self, values: I) -> Expr
    where
        I: IntoIterator<Item = L>,
        L: Into<Literal>,
    {
        Expr::NotIn {
            field: self,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    // Text search

    pub fn contains(self, text: impl Into<String>) -> Expr {
        Expr::Contains {
            field: self,
            text: text.into(),
        }
    }

    // Null / empty checks (there is no `= null` form in the language)

    pub fn is_null(self) -> Expr {
        Expr::IsNull(self)
    }

    pub fn is_not_null(self) -> Expr {
        Expr::IsNotNull(self)
    }

    pub fn is_empty(self) -> Expr {
        Expr::IsEmpty(self)
    }

    pub fn is_not_empty(self) -> Expr {
        Expr::IsNotEmpty(self)
    }

    // Historical conditions

    pub fn was(self, value: impl Into<Literal>) -> Expr {
        Expr::Was {
            field: self,
            value: value.into(),
        }
    }

    pub fn was_in<I, L>(self, values: I) -> Expr
    where
        I: IntoIterator<Item = L>,
        L: Into<Literal>,
    {
        Expr::WasIn {
            field: self,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn changed(self) -> Expr {
        Expr::Changed(self)
    }
}

/// A node in the condition tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Compare {
        field: Field,
        op: CompareOp,
        value: Literal,
    },
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    In {
        field: Field,
        values: Vec<Literal>,
    },
    NotIn {
        field: Field,
        values: Vec<Literal>,
    },
    Contains {
        field: Field,
        text: String,
    },
    IsNull(Field),
    IsNotNull(Field),
    IsEmpty(Field),
    IsNotEmpty(Field),
    Was {
        field: Field,
        value: Literal,
    },
    WasIn {
        field: Field,
        values: Vec<Literal>,
    },
    Changed(Field),
}

impl Expr {
    pub fn and(self, other: Expr) -> Expr {
        Expr::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Expr) -> Expr {
        Expr::Or(Box::new(self), Box::new(other))
    }
}

/// Requested projection of the result records
///
/// Only the identity projection (the whole record) is executable; any
/// other request is kept in the tree and rejected by the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Projection {
    #[default]
    Identity,
    Named(String),
}

/// One ordering step, in encounter order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderStep {
    pub field: Field,
    pub descending: bool,
}

/// The accumulated, immutable description of one query
///
/// The query surface appends to a clone on every operation, so earlier
/// instances are never mutated. Paging steps are recorded as applied
/// (including duplicates); the compiler rejects double application,
/// keeping query composition itself infallible.
#[derive(Debug, Clone, Default)]
pub struct QuerySpec {
    pub filter: Option<Expr>,
    pub orders: Vec<OrderStep>,
    pub skips: Vec<u32>,
    pub takes: Vec<u32>,
    pub projection: Projection,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition; multiple conditions are AND-combined in
    /// encounter order
    pub fn filtered(mut self, expr: Expr) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => existing.and(expr),
            None => expr,
        });
        self
    }

    /// Append an ordering step
    pub fn ordered_by(mut self, field: Field, descending: bool) -> Self {
        self.orders.push(OrderStep { field, descending });
        self
    }

    /// Record a skip application
    pub fn skipped(mut self, count: u32) -> Self {
        self.skips.push(count);
        self
    }

    /// Record a take application
    pub fn taken(mut self, count: u32) -> Self {
        self.takes.push(count);
        self
    }

    /// Record a projection request
    pub fn projected(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }
}
