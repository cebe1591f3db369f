//! Paged search results
//!
//! The envelope returned by the remote paged-search operation. Field names
//! follow the service's JSON payload (camelCase).

use serde::{Deserialize, Serialize};

/// One page of search results
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage<T> {
    /// Records in this page
    pub items: Vec<T>,

    /// Zero-based index of the first returned record
    pub start_at: u32,

    /// Page size that was requested
    pub max_results: u32,

    /// Total number of records matching the query
    pub total: u32,
}

impl<T> SearchPage<T> {
    /// An empty page (used by dry-run execution)
    pub fn empty(start_at: u32, max_results: u32) -> Self {
        Self {
            items: vec![],
            start_at,
            max_results,
            total: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a subsequent page exists beyond this one
    pub fn has_more(&self) -> bool {
        self.start_at as u64 + (self.items.len() as u64) < self.total as u64
    }
}
