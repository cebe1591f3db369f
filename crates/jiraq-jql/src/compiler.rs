//! Expression compiler
//!
//! Deterministic translation of a [`QuerySpec`] into a [`CompiledQuery`]:
//! the rendered predicate text, ordering clauses in encounter order, and
//! paging values. Consults the field registry for remote names and
//! capability checks; any violation aborts the whole compilation before
//! a network call can happen.

use std::sync::Arc;

use tracing::debug;

use crate::ast::{Expr, Field, Projection, QuerySpec};
use crate::error::{JqlError, JqlResult};
use crate::fields::{Capability, FieldRegistry, FieldTable, Queryable};
use crate::ops::{render_field_name, Literal};

/// One compiled ordering clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderClause {
    pub remote_name: String,
    pub descending: bool,
}

/// The fully-resolved output of one compilation
///
/// Produced fresh on every enumeration; never cached. `predicate` is the
/// rendered boolean expression, empty when no filter was applied
/// ("match all"). Paging values are `None` when the query never set
/// them, letting the execution bridge apply its defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub predicate: String,
    pub order_clauses: Vec<OrderClause>,
    pub start_at: Option<u32>,
    pub max_results: Option<u32>,
}

impl CompiledQuery {
    /// Render the full wire query: predicate plus `ORDER BY` suffix.
    ///
    /// The search collaborator carries ordering inside the query text,
    /// so this is what actually crosses the boundary.
    pub fn to_jql(&self) -> String {
        if self.order_clauses.is_empty() {
            return self.predicate.clone();
        }
        let order = self
            .order_clauses
            .iter()
            .map(|c| {
                format!(
                    "{} {}",
                    c.remote_name,
                    if c.descending { "DESC" } else { "ASC" }
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        if self.predicate.is_empty() {
            format!("ORDER BY {}", order)
        } else {
            format!("{} ORDER BY {}", self.predicate, order)
        }
    }
}

/// Compile an accumulated query description for entity type `T`
pub fn compile<T: Queryable + 'static>(spec: &QuerySpec) -> JqlResult<CompiledQuery> {
    let table = FieldRegistry::table_for::<T>();
    let compiler = Compiler { table };
    compiler.compile(spec)
}

struct Compiler {
    table: Arc<FieldTable>,
}

impl Compiler {
    fn compile(&self, spec: &QuerySpec) -> JqlResult<CompiledQuery> {
        if let Projection::Named(name) = &spec.projection {
            return Err(JqlError::UnsupportedProjection {
                projection: name.clone(),
            });
        }

        let predicate = match &spec.filter {
            Some(expr) => self.render_expr(expr)?,
            None => String::new(),
        };

        let order_clauses = spec
            .orders
            .iter()
            .map(|step| {
                Ok(OrderClause {
                    remote_name: self.resolve(step.field, Some(Capability::Sortable))?,
                    descending: step.descending,
                })
            })
            .collect::<JqlResult<Vec<_>>>()?;

        let start_at = Self::single_paging(&spec.skips, "skip")?;
        let max_results = Self::single_paging(&spec.takes, "take")?;

        debug!(
            entity = self.table.entity_name(),
            predicate = %predicate,
            orders = order_clauses.len(),
            "compiled query"
        );

        Ok(CompiledQuery {
            predicate,
            order_clauses,
            start_at,
            max_results,
        })
    }

    fn single_paging(applied: &[u32], clause: &'static str) -> JqlResult<Option<u32>> {
        match applied {
            [] => Ok(None),
            [value] => Ok(Some(*value)),
            _ => Err(JqlError::DuplicatePaging { clause }),
        }
    }

    /// Resolve a field to its remote name, enforcing `required` when the
    /// field has a declared descriptor. Unknown fields fall back to the
    /// raw property name (quoted if needed); the remote service is the
    /// only authority on their operators.
    fn resolve(&self, field: Field, required: Option<Capability>) -> JqlResult<String> {
        match self.table.descriptor(field.property()) {
            Some(descriptor) => {
                if let Some(capability) = required {
                    if !descriptor.has(capability) {
                        return Err(JqlError::missing_capability(field.property(), capability));
                    }
                }
                Ok(descriptor.remote_name.to_string())
            }
            None => Ok(render_field_name(field.property())),
        }
    }

    fn render_expr(&self, expr: &Expr) -> JqlResult<String> {
        match expr {
            Expr::Compare { field, op, value } => {
                let name = self.resolve(*field, Some(Capability::Comparable))?;
                Ok(format!(
                    "{} {} {}",
                    name,
                    op.as_jql(),
                    Self::render_literal(value)?
                ))
            }
            Expr::And(left, right) => Ok(format!(
                "{} AND {}",
                self.render_operand(left)?,
                self.render_operand(right)?
            )),
            Expr::Or(left, right) => Ok(format!(
                "{} OR {}",
                self.render_operand(left)?,
                self.render_operand(right)?
            )),
            Expr::In { field, values } => {
                let name = self.resolve(*field, Some(Capability::Include))?;
                Ok(format!(
                    "{} in ({})",
                    name,
                    Self::render_values(field, "in", values)?
                ))
            }
            Expr::NotIn { field, values } => {
                let name = self.resolve(*field, Some(Capability::Include))?;
                Ok(format!(
                    "{} not in ({})",
                    name,
                    Self::render_values(field, "not in", values)?
                ))
            }
            Expr::Contains { field, text } => {
                let name = self.resolve(*field, Some(Capability::Contains))?;
                Ok(format!("{} ~ {}", name, Literal::text(text.clone()).render()))
            }
            Expr::IsNull(field) => {
                let name = self.resolve(*field, None)?;
                Ok(format!("{} is null", name))
            }
            Expr::IsNotNull(field) => {
                let name = self.resolve(*field, None)?;
                Ok(format!("{} is not null", name))
            }
            Expr::IsEmpty(field) => {
                let name = self.resolve(*field, None)?;
                Ok(format!("{} is empty", name))
            }
            Expr::IsNotEmpty(field) => {
                let name = self.resolve(*field, None)?;
                Ok(format!("{} is not empty", name))
            }
            Expr::Was { field, value } => {
                let name = self.resolve(*field, Some(Capability::Was))?;
                Ok(format!("{} was {}", name, Self::render_literal(value)?))
            }
            Expr::WasIn { field, values } => {
                let name = self.resolve(*field, Some(Capability::WasInclude))?;
                Ok(format!(
                    "{} was in ({})",
                    name,
                    Self::render_values(field, "was in", values)?
                ))
            }
            Expr::Changed(field) => {
                let name = self.resolve(*field, Some(Capability::Changed))?;
                Ok(format!("{} changed", name))
            }
        }
    }

    /// Parenthesize logical children so the rendered text preserves the
    /// tree's precedence; leaves stay bare.
    fn render_operand(&self, expr: &Expr) -> JqlResult<String> {
        let rendered = self.render_expr(expr)?;
        match expr {
            Expr::And(_, _) | Expr::Or(_, _) => Ok(format!("({})", rendered)),
            _ => Ok(rendered),
        }
    }

    fn render_values(field: &Field, operator: &'static str, values: &[Literal]) -> JqlResult<String> {
        if values.is_empty() {
            return Err(JqlError::EmptyValueList {
                field: field.property().to_string(),
                operator,
            });
        }
        Ok(values
            .iter()
            .map(Self::render_literal)
            .collect::<JqlResult<Vec<_>>>()?
            .join(", "))
    }

    /// Render a literal, rejecting values the query language has no
    /// token for (NaN and infinities have no numeric literal form)
    fn render_literal(value: &Literal) -> JqlResult<String> {
        if let Literal::Float(f) = value {
            if !f.is_finite() {
                return Err(JqlError::unsupported(format!(
                    "non-finite numeric literal {}",
                    f
                )));
            }
        }
        Ok(value.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldSpec;

    struct Ticket;

    const PRIORITY: Field = Field::new("priority");
    const SUMMARY: Field = Field::new("summary");
    const FIX_VERSION: Field = Field::new("fix_version");
    const STATUS: Field = Field::new("status");
    const CUSTOM: Field = Field::new("story points");

    impl Queryable for Ticket {
        fn entity_name() -> &'static str {
            "ticket"
        }

        fn field_specs() -> &'static [FieldSpec] {
            static SPECS: &[FieldSpec] = &[
                FieldSpec::new("priority", "priority").with(&[
                    Capability::Comparable,
                    Capability::Sortable,
                    Capability::Include,
                ]),
                FieldSpec::new("summary", "summary").with(&[Capability::Contains]),
                FieldSpec::new("fix_version", "fixVersion")
                    .with(&[Capability::Sortable, Capability::Include]),
                FieldSpec::new("status", "status").with(&[
                    Capability::Comparable,
                    Capability::Was,
                    Capability::WasInclude,
                    Capability::Changed,
                ]),
            ];
            SPECS
        }
    }

    fn compile_filter(expr: Expr) -> JqlResult<CompiledQuery> {
        compile::<Ticket>(&QuerySpec::new().filtered(expr))
    }

    #[test]
    fn test_compare_clause() {
        let compiled = compile_filter(PRIORITY.eq("Major")).unwrap();
        assert_eq!(compiled.predicate, r#"priority = "Major""#);
    }

    #[test]
    fn test_or_keeps_leaves_bare() {
        let compiled = compile_filter(PRIORITY.eq("Major").or(PRIORITY.eq("Minor"))).unwrap();
        assert_eq!(
            compiled.predicate,
            r#"priority = "Major" OR priority = "Minor""#
        );
    }

    #[test]
    fn test_nested_logical_groups_are_parenthesized() {
        let expr = PRIORITY
            .eq("Major")
            .or(PRIORITY.eq("Minor"))
            .and(STATUS.eq("Open"));
        let compiled = compile_filter(expr).unwrap();
        assert_eq!(
            compiled.predicate,
            r#"(priority = "Major" OR priority = "Minor") AND status = "Open""#
        );
    }

    #[test]
    fn test_in_and_not_in() {
        let compiled = compile_filter(PRIORITY.in_list(["Major", "Minor"])).unwrap();
        assert_eq!(compiled.predicate, r#"priority in ("Major", "Minor")"#);

        let compiled = compile_filter(FIX_VERSION.not_in_list(["1.0"])).unwrap();
        assert_eq!(compiled.predicate, r#"fixVersion not in ("1.0")"#);
    }

    #[test]
    fn test_empty_in_list_is_rejected() {
        let err = compile_filter(PRIORITY.in_list(Vec::<i64>::new())).unwrap_err();
        assert_eq!(
            err,
            JqlError::EmptyValueList {
                field: "priority".to_string(),
                operator: "in",
            }
        );
    }

    #[test]
    fn test_function_marker_in_list() {
        let compiled =
            compile_filter(FIX_VERSION.in_list([Literal::function("unreleasedVersions")]))
                .unwrap();
        assert_eq!(compiled.predicate, "fixVersion in (unreleasedVersions())");
    }

    #[test]
    fn test_contains_requires_capability() {
        let compiled = compile_filter(SUMMARY.contains("crash")).unwrap();
        assert_eq!(compiled.predicate, r#"summary ~ "crash""#);

        let err = compile_filter(PRIORITY.contains("Major")).unwrap_err();
        assert_eq!(
            err,
            JqlError::missing_capability("priority", Capability::Contains)
        );
    }

    #[test]
    fn test_null_and_empty_forms() {
        assert_eq!(
            compile_filter(FIX_VERSION.is_null()).unwrap().predicate,
            "fixVersion is null"
        );
        assert_eq!(
            compile_filter(FIX_VERSION.is_not_null()).unwrap().predicate,
            "fixVersion is not null"
        );
        assert_eq!(
            compile_filter(FIX_VERSION.is_empty()).unwrap().predicate,
            "fixVersion is empty"
        );
        assert_eq!(
            compile_filter(FIX_VERSION.is_not_empty()).unwrap().predicate,
            "fixVersion is not empty"
        );
    }

    #[test]
    fn test_historical_operators() {
        assert_eq!(
            compile_filter(STATUS.was("Closed")).unwrap().predicate,
            r#"status was "Closed""#
        );
        assert_eq!(
            compile_filter(STATUS.was_in(["Open", "Closed"]))
                .unwrap()
                .predicate,
            r#"status was in ("Open", "Closed")"#
        );
        assert_eq!(
            compile_filter(STATUS.changed()).unwrap().predicate,
            "status changed"
        );

        // priority declares no historical capabilities
        let err = compile_filter(PRIORITY.was("Minor")).unwrap_err();
        assert_eq!(err, JqlError::missing_capability("priority", Capability::Was));
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        let err = compile_filter(PRIORITY.eq(f64::NAN)).unwrap_err();
        assert!(matches!(err, JqlError::UnsupportedExpression { .. }));

        let err = compile_filter(PRIORITY.in_list([f64::INFINITY])).unwrap_err();
        assert!(matches!(err, JqlError::UnsupportedExpression { .. }));
    }

    #[test]
    fn test_unknown_field_falls_back_to_raw_name() {
        let compiled = compile_filter(CUSTOM.eq(8)).unwrap();
        assert_eq!(compiled.predicate, r#""story points" = 8"#);
    }

    #[test]
    fn test_ordering_requires_sortable() {
        let spec = QuerySpec::new().ordered_by(SUMMARY, false);
        let err = compile::<Ticket>(&spec).unwrap_err();
        assert_eq!(
            err,
            JqlError::missing_capability("summary", Capability::Sortable)
        );
    }

    #[test]
    fn test_order_clauses_in_encounter_order() {
        let spec = QuerySpec::new()
            .ordered_by(PRIORITY, false)
            .ordered_by(FIX_VERSION, false)
            .ordered_by(PRIORITY, true);
        let compiled = compile::<Ticket>(&spec).unwrap();
        assert_eq!(
            compiled.order_clauses,
            vec![
                OrderClause {
                    remote_name: "priority".to_string(),
                    descending: false
                },
                OrderClause {
                    remote_name: "fixVersion".to_string(),
                    descending: false
                },
                OrderClause {
                    remote_name: "priority".to_string(),
                    descending: true
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_skip_or_take_is_rejected() {
        let spec = QuerySpec::new().skipped(5).skipped(10);
        assert_eq!(
            compile::<Ticket>(&spec).unwrap_err(),
            JqlError::DuplicatePaging { clause: "skip" }
        );

        let spec = QuerySpec::new().taken(5).taken(10);
        assert_eq!(
            compile::<Ticket>(&spec).unwrap_err(),
            JqlError::DuplicatePaging { clause: "take" }
        );
    }

    #[test]
    fn test_named_projection_is_rejected() {
        let spec = QuerySpec::new().projected(Projection::Named("summary".to_string()));
        assert_eq!(
            compile::<Ticket>(&spec).unwrap_err(),
            JqlError::UnsupportedProjection {
                projection: "summary".to_string()
            }
        );
    }

    #[test]
    fn test_empty_query_matches_all() {
        let compiled = compile::<Ticket>(&QuerySpec::new()).unwrap();
        assert_eq!(compiled.predicate, "");
        assert!(compiled.order_clauses.is_empty());
        assert_eq!(compiled.start_at, None);
        assert_eq!(compiled.max_results, None);
    }

    #[test]
    fn test_compilation_is_deterministic() {
        let spec = QuerySpec::new()
            .filtered(PRIORITY.eq("Major").or(STATUS.ne("Open")))
            .ordered_by(PRIORITY, true)
            .skipped(5)
            .taken(19);
        let first = compile::<Ticket>(&spec).unwrap();
        let second = compile::<Ticket>(&spec).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_to_jql_appends_order_by() {
        let spec = QuerySpec::new()
            .filtered(PRIORITY.eq("Major"))
            .ordered_by(FIX_VERSION, false)
            .ordered_by(PRIORITY, true);
        let compiled = compile::<Ticket>(&spec).unwrap();
        assert_eq!(
            compiled.to_jql(),
            r#"priority = "Major" ORDER BY fixVersion ASC, priority DESC"#
        );

        let order_only = compile::<Ticket>(&QuerySpec::new().ordered_by(PRIORITY, false)).unwrap();
        assert_eq!(order_only.to_jql(), "ORDER BY priority ASC");
    }

    #[test]
    fn test_end_to_end_compilation_scenario() {
        let spec = QuerySpec::new()
            .filtered(PRIORITY.eq("Major").or(PRIORITY.eq("Minor")))
            .ordered_by(FIX_VERSION, false)
            .skipped(5)
            .taken(19);
        let compiled = compile::<Ticket>(&spec).unwrap();
        assert_eq!(
            compiled.predicate,
            r#"priority = "Major" OR priority = "Minor""#
        );
        assert_eq!(
            compiled.order_clauses,
            vec![OrderClause {
                remote_name: "fixVersion".to_string(),
                descending: false
            }]
        );
        assert_eq!(compiled.start_at, Some(5));
        assert_eq!(compiled.max_results, Some(19));
    }
}
