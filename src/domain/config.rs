//! Runtime configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_RESULTS: u32 = 50;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Site host, e.g. `acme.atlassian.net`. Also used for browse links.
    pub domain: Option<String>,
    pub email: Option<String>,
    pub api_token: Option<String>,
    /// Overrides `https://{domain}` as the API root.
    pub base_url: Option<String>,
    /// Project used when a command does not name one.
    pub project_key: Option<String>,
    /// Page size sent with every search. Results past the first page are
    /// not fetched.
    pub max_results: u32,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: None,
            email: None,
            api_token: None,
            base_url: None,
            project_key: None,
            max_results: DEFAULT_MAX_RESULTS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
