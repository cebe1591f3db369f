//! Operator and literal mapping
//!
//! Pure, stateless translation of abstract operators and typed literals
//! into the remote query language's textual tokens. No I/O and no tree
//! walking here; the compiler composes these into full clauses.
//!
//! Rendering is stable: the same value always produces byte-identical
//! text, which makes compiled predicates deterministic.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Binary comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl CompareOp {
    /// The token the remote query language uses for this operator
    pub fn as_jql(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
        }
    }
}

/// A typed literal value on the right-hand side of a clause
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Quoted, escaped text
    Text(String),
    /// Integer literal
    Int(i64),
    /// Decimal literal
    Float(f64),
    /// Date-only value, rendered `yyyy-MM-dd`
    Date(NaiveDate),
    /// Date-time value, rendered `yyyy-MM-dd HH:mm`
    DateTime(NaiveDateTime),
    /// Named/enumerated value, rendered by its declared name and only
    /// quoted when the name contains whitespace
    Name(String),
    /// Zero-argument function marker, rendered as a bare call token.
    /// Never invoked locally; the service interprets it.
    Function(&'static str),
}

impl Literal {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn name(value: impl Into<String>) -> Self {
        Self::Name(value.into())
    }

    pub const fn function(name: &'static str) -> Self {
        Self::Function(name)
    }

    /// Render the literal as query-language text
    pub fn render(&self) -> String {
        match self {
            Self::Text(s) => quote(s),
            Self::Int(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
            Self::DateTime(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            Self::Name(s) => {
                if s.chars().any(char::is_whitespace) {
                    quote(s)
                } else {
                    s.clone()
                }
            }
            Self::Function(name) => format!("{}()", name),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<NaiveDate> for Literal {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for Literal {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateTime<Utc>> for Literal {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value.naive_utc())
    }
}

/// Words the query language reserves; bare field names colliding with
/// these must be quoted
const RESERVED_WORDS: &[&str] = &[
    "and", "or", "not", "in", "is", "was", "changed", "empty", "null", "order", "by",
];

/// Render a field name, quoting it when it contains whitespace or is a
/// reserved word
pub fn render_field_name(name: &str) -> String {
    let reserved = RESERVED_WORDS
        .iter()
        .any(|w| name.eq_ignore_ascii_case(w));
    if reserved || name.chars().any(char::is_whitespace) {
        quote(name)
    } else {
        name.to_string()
    }
}

/// Double-quote a string, escaping backslashes and internal quotes
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
