//! Layer command-line (and environment) values over file config

use crate::domain::Config;

/// Values given on the command line or through `JIRA_*` variables. `None`
/// leaves the file value in place.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub domain: Option<String>,
    pub email: Option<String>,
    pub api_token: Option<String>,
    pub base_url: Option<String>,
    pub project_key: Option<String>,
    pub max_results: Option<u32>,
    pub timeout_secs: Option<u64>,
}

pub fn merge_cli_with_config(mut config: Config, overrides: CliOverrides) -> Config {
    fn set(slot: &mut Option<String>, value: Option<String>) {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            *slot = Some(value);
        }
    }

    set(&mut config.domain, overrides.domain);
    set(&mut config.email, overrides.email);
    set(&mut config.api_token, overrides.api_token);
    set(&mut config.base_url, overrides.base_url);
    set(&mut config.project_key, overrides.project_key);
    if let Some(max_results) = overrides.max_results {
        config.max_results = max_results;
    }
    if let Some(timeout_secs) = overrides.timeout_secs {
        config.timeout_secs = timeout_secs;
    }
    config
}
