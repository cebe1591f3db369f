//! Client configuration
//!
//! Settings that govern how compiled queries are executed against the
//! remote service. Kept deliberately small: authentication and transport
//! configuration belong to the collaborators that own those concerns.

use serde::{Deserialize, Serialize};

/// Default page size applied when a query sets no explicit `take`
pub const DEFAULT_MAX_RESULTS: u32 = 500;

/// Configuration for query execution
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL of the remote ticket service
    pub base_url: String,

    /// Page size used when a query does not specify `take`
    #[serde(default = "default_max_results")]
    pub default_max_results: u32,

    /// When set, queries are compiled and recorded but never sent
    #[serde(default)]
    pub dry_run: bool,
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            default_max_results: DEFAULT_MAX_RESULTS,
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.default_max_results, 500);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "https://tracker.example.com"}"#).unwrap();
        assert_eq!(config.base_url, "https://tracker.example.com");
        assert_eq!(config.default_max_results, 500);
        assert!(!config.dry_run);
    }
}
