//! Dry-run searcher
//!
//! A recording implementation of [`IssueSearcher`]: it captures the
//! compiled query text and paging values it receives, performs no network
//! call, and returns an empty page. This is the seam that lets the whole
//! compiler be exercised end-to-end in tests without a live service.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use jiraq_core::{SearchPage, SearchResult};

use crate::searcher::IssueSearcher;

/// What the last dry-run execution would have sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedQuery {
    pub jql: String,
    pub start_at: u32,
    pub max_results: u32,
}

/// Recording, non-networking [`IssueSearcher`]
#[derive(Debug, Default)]
pub struct DryRunSearcher {
    recorded: Mutex<Option<RecordedQuery>>,
}

impl DryRunSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full query text of the last execution, if any
    pub fn compiled_predicate(&self) -> Option<String> {
        self.recorded.lock().as_ref().map(|r| r.jql.clone())
    }

    pub fn compiled_start_at(&self) -> Option<u32> {
        self.recorded.lock().as_ref().map(|r| r.start_at)
    }

    pub fn compiled_max_results(&self) -> Option<u32> {
        self.recorded.lock().as_ref().map(|r| r.max_results)
    }

    pub fn last_recorded(&self) -> Option<RecordedQuery> {
        self.recorded.lock().clone()
    }
}

#[async_trait]
impl IssueSearcher for DryRunSearcher {
    async fn search(
        &self,
        jql: &str,
        start_at: u32,
        max_results: u32,
        _fields: Option<&[String]>,
        _expand: Option<&[String]>,
    ) -> SearchResult<SearchPage<Value>> {
        *self.recorded.lock() = Some(RecordedQuery {
            jql: jql.to_string(),
            start_at,
            max_results,
        });
        Ok(SearchPage::empty(start_at, max_results))
    }
}
