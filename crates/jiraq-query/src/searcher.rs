//! The paged-search collaborator
//!
//! The single boundary between the query layer and the network. Transport,
//! authentication and retries all live behind this trait; the query layer
//! only hands over compiled query text and paging values, and propagates
//! whatever errors come back.

use async_trait::async_trait;
use serde_json::Value;

use jiraq_core::{SearchPage, SearchResult};

/// Remote paged-search operation
#[async_trait]
pub trait IssueSearcher: Send + Sync {
    /// Execute `jql` and return one page of raw records.
    ///
    /// `fields` restricts which record fields the service returns;
    /// `expand` requests additional payload sections. Both pass through
    /// untouched.
    async fn search(
        &self,
        jql: &str,
        start_at: u32,
        max_results: u32,
        fields: Option<&[String]>,
        expand: Option<&[String]>,
    ) -> SearchResult<SearchPage<Value>>;
}
