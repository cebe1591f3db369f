//! Execution bridge
//!
//! Turns a [`CompiledQuery`] into a materialized page of typed records:
//! applies paging defaults, joins predicate and ordering into the wire
//! query text, delegates to the search collaborator, and decodes the
//! returned raw records. Remote errors pass through unchanged; no retries
//! happen at this layer.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use jiraq_core::{ClientConfig, SearchPage, SearchResult};
use jiraq_jql::CompiledQuery;

use crate::searcher::IssueSearcher;

/// Default start index when a query sets no `skip`
pub const DEFAULT_START_AT: u32 = 0;

/// Executes compiled queries against the search collaborator
pub struct SearchExecutor {
    searcher: Arc<dyn IssueSearcher>,
    config: ClientConfig,
}

impl SearchExecutor {
    pub fn new(searcher: Arc<dyn IssueSearcher>, config: ClientConfig) -> Self {
        Self { searcher, config }
    }

    /// Execute one compiled query and decode the resulting page.
    ///
    /// This is the query surface's single suspension point: one call, one
    /// page, no partial results observable before it returns.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        compiled: &CompiledQuery,
        fields: Option<&[String]>,
        expand: Option<&[String]>,
    ) -> SearchResult<SearchPage<T>> {
        let start_at = compiled.start_at.unwrap_or(DEFAULT_START_AT);
        let max_results = compiled
            .max_results
            .unwrap_or(self.config.default_max_results);
        let jql = compiled.to_jql();

        debug!(jql = %jql, start_at, max_results, "executing compiled query");
        let page = self
            .searcher
            .search(&jql, start_at, max_results, fields, expand)
            .await?;
        info!(
            total = page.total,
            returned = page.len(),
            "remote search completed"
        );

        let SearchPage {
            items,
            start_at,
            max_results,
            total,
        } = page;
        let items = items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;

        Ok(SearchPage {
            items,
            start_at,
            max_results,
            total,
        })
    }
}
