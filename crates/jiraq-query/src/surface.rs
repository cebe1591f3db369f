//! The typed query surface
//!
//! [`JqlQuery`] looks like a composable collection but never executes
//! locally: every operation returns a new instance wrapping an extended
//! query description, leaving the original untouched. Fetching is the
//! only trigger for execution — the accumulated description is compiled
//! and resolved through one awaited remote call, and every fetch
//! recompiles and re-executes (no caching, by design).

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use jiraq_core::{ClientConfig, SearchPage};
use jiraq_jql::{compile, CompiledQuery, Expr, Field, JqlResult, Projection, Queryable, QuerySpec};

use crate::error::QueryResult;
use crate::executor::SearchExecutor;
use crate::searcher::IssueSearcher;

/// A deferred, typed search over entity type `T`
pub struct JqlQuery<T: Queryable> {
    executor: Arc<SearchExecutor>,
    spec: QuerySpec,
    fields_to_return: Option<Vec<String>>,
    expand: Option<Vec<String>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Queryable> Clone for JqlQuery<T> {
    fn clone(&self) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
            spec: self.spec.clone(),
            fields_to_return: self.fields_to_return.clone(),
            expand: self.expand.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Queryable + DeserializeOwned + 'static> JqlQuery<T> {
    pub fn new(searcher: Arc<dyn IssueSearcher>, config: ClientConfig) -> Self {
        Self::with_executor(Arc::new(SearchExecutor::new(searcher, config)))
    }

    pub(crate) fn with_executor(executor: Arc<SearchExecutor>) -> Self {
        Self {
            executor,
            spec: QuerySpec::new(),
            fields_to_return: None,
            expand: None,
            _marker: PhantomData,
        }
    }

    fn extend(&self, f: impl FnOnce(QuerySpec) -> QuerySpec) -> Self {
        let mut next = self.clone();
        next.spec = f(next.spec);
        next
    }

    /// Restrict results to records matching `expr`; successive filters
    /// are AND-combined
    pub fn filter(&self, expr: Expr) -> Self {
        self.extend(|spec| spec.filtered(expr))
    }

    /// Order by `field`, ascending
    pub fn order_by(&self, field: Field) -> Self {
        self.extend(|spec| spec.ordered_by(field, false))
    }

    /// Order by `field`, descending
    pub fn order_by_desc(&self, field: Field) -> Self {
        self.extend(|spec| spec.ordered_by(field, true))
    }

    /// Subordinate ordering; clauses keep their encounter order
    pub fn then_by(&self, field: Field) -> Self {
        self.order_by(field)
    }

    pub fn then_by_desc(&self, field: Field) -> Self {
        self.order_by_desc(field)
    }

    /// Skip the first `count` matching records (applies at most once;
    /// a second application fails at compile time)
    pub fn skip(&self, count: u32) -> Self {
        self.extend(|spec| spec.skipped(count))
    }

    /// Return at most `count` records (applies at most once)
    pub fn take(&self, count: u32) -> Self {
        self.extend(|spec| spec.taken(count))
    }

    /// Identity projection: select the whole record. Present for
    /// comprehension-style call sites; it changes nothing.
    pub fn select_record(&self) -> Self {
        self.extend(|spec| spec.projected(Projection::Identity))
    }

    /// Request a non-identity projection. Recorded verbatim and rejected
    /// when the query compiles — only whole records can be materialized.
    pub fn select_named(&self, projection: impl Into<String>) -> Self {
        self.extend(|spec| spec.projected(Projection::Named(projection.into())))
    }

    /// Restrict which record fields the service returns
    pub fn returning_fields<I, S>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        next.fields_to_return = Some(fields.into_iter().map(Into::into).collect());
        next
    }

    /// Request additional payload sections from the service
    pub fn expanding<I, S>(&self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        next.expand = Some(sections.into_iter().map(Into::into).collect());
        next
    }

    /// Compile the accumulated description without executing it
    pub fn compile(&self) -> JqlResult<CompiledQuery> {
        compile::<T>(&self.spec)
    }

    /// Execute the query and return the full result page.
    ///
    /// The single suspension point: compiles the tree, issues exactly one
    /// remote call, and returns only once the whole page is available.
    pub async fn fetch_page(&self) -> QueryResult<SearchPage<T>> {
        let compiled = self.compile()?;
        let page = self
            .executor
            .execute(
                &compiled,
                self.fields_to_return.as_deref(),
                self.expand.as_deref(),
            )
            .await?;
        Ok(page)
    }

    /// Execute the query and return the matching records.
    ///
    /// Anything chained onto the returned `Vec` is ordinary in-memory
    /// iteration and never triggers another remote call.
    pub async fn fetch(&self) -> QueryResult<Vec<T>> {
        Ok(self.fetch_page().await?.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dry_run::DryRunSearcher;
    use jiraq_jql::JqlError;
    use jiraq_models::issue::fields;
    use jiraq_models::Issue;

    fn query() -> JqlQuery<Issue> {
        JqlQuery::new(Arc::new(DryRunSearcher::new()), ClientConfig::default())
    }

    #[test]
    fn test_operations_do_not_mutate_the_original() {
        let base = query().filter(fields::PRIORITY.eq("Major"));
        let extended = base.order_by(fields::FIX_VERSIONS).skip(5).take(19);

        let base_compiled = base.compile().unwrap();
        assert!(base_compiled.order_clauses.is_empty());
        assert_eq!(base_compiled.start_at, None);

        let extended_compiled = extended.compile().unwrap();
        assert_eq!(extended_compiled.order_clauses.len(), 1);
        assert_eq!(extended_compiled.start_at, Some(5));
        assert_eq!(extended_compiled.max_results, Some(19));
    }

    #[test]
    fn test_skip_take_order_insensitive() {
        let skip_first = query().skip(5).take(19).compile().unwrap();
        let take_first = query().take(19).skip(5).compile().unwrap();
        assert_eq!(skip_first.start_at, Some(5));
        assert_eq!(skip_first.max_results, Some(19));
        assert_eq!(take_first.start_at, Some(5));
        assert_eq!(take_first.max_results, Some(19));
    }

    #[test]
    fn test_second_skip_fails_compilation() {
        let err = query().skip(5).skip(10).compile().unwrap_err();
        assert_eq!(err, JqlError::DuplicatePaging { clause: "skip" });
    }

    #[test]
    fn test_ordering_chain_keeps_encounter_order() {
        let compiled = query()
            .order_by(fields::PRIORITY)
            .then_by(fields::FIX_VERSIONS)
            .then_by_desc(fields::CREATED)
            .compile()
            .unwrap();
        let clauses: Vec<(&str, bool)> = compiled
            .order_clauses
            .iter()
            .map(|c| (c.remote_name.as_str(), c.descending))
            .collect();
        assert_eq!(
            clauses,
            vec![("priority", false), ("fixVersion", false), ("created", true)]
        );
    }

    #[test]
    fn test_identity_projection_is_accepted() {
        let compiled = query()
            .select_record()
            .filter(fields::STATUS.eq("Open"))
            .compile()
            .unwrap();
        assert_eq!(compiled.predicate, r#"status = "Open""#);
    }

    #[test]
    fn test_named_projection_fails_compilation() {
        let err = query().select_named("summary").compile().unwrap_err();
        assert_eq!(
            err,
            JqlError::UnsupportedProjection {
                projection: "summary".to_string()
            }
        );
    }
}
