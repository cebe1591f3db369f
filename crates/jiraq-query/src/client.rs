//! Client entry point
//!
//! Holds the search collaborator and configuration, and hands out typed
//! query surfaces. When the configuration enables dry-run mode, queries
//! are compiled and recorded but never sent.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use jiraq_core::ClientConfig;
use jiraq_jql::Queryable;
use jiraq_models::Issue;

use crate::dry_run::DryRunSearcher;
use crate::executor::SearchExecutor;
use crate::searcher::IssueSearcher;
use crate::surface::JqlQuery;

/// Typed access to the remote search API
pub struct JiraClient {
    executor: Arc<SearchExecutor>,
    recorder: Option<Arc<DryRunSearcher>>,
}

impl JiraClient {
    /// Create a client over the given search collaborator.
    ///
    /// When the configuration enables dry-run mode the collaborator is
    /// ignored entirely: queries are compiled and recorded (see
    /// [`JiraClient::recorder`]) and nothing is ever sent.
    pub fn new(searcher: Arc<dyn IssueSearcher>, config: ClientConfig) -> Self {
        if config.dry_run {
            return Self::dry_run(config).0;
        }
        Self {
            executor: Arc::new(SearchExecutor::new(searcher, config)),
            recorder: None,
        }
    }

    /// A client whose queries are recorded instead of sent. Returns the
    /// recording searcher so compiled output can be inspected.
    pub fn dry_run(mut config: ClientConfig) -> (Self, Arc<DryRunSearcher>) {
        config.dry_run = true;
        let searcher = Arc::new(DryRunSearcher::new());
        let client = Self {
            executor: Arc::new(SearchExecutor::new(searcher.clone(), config)),
            recorder: Some(searcher.clone()),
        };
        (client, searcher)
    }

    /// The recording searcher, present when this client is in dry-run mode
    pub fn recorder(&self) -> Option<&DryRunSearcher> {
        self.recorder.as_deref()
    }

    /// A fresh query over issues
    pub fn issues(&self) -> JqlQuery<Issue> {
        self.query()
    }

    /// A fresh query over any queryable entity type
    pub fn query<T: Queryable + DeserializeOwned + 'static>(&self) -> JqlQuery<T> {
        JqlQuery::with_executor(Arc::clone(&self.executor))
    }
}
