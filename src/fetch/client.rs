//! Jira Cloud search over HTTP

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;

use super::jql::SearchQuery;
use super::links::api_base_url;
use super::IssueSource;
use crate::domain::{Config, SearchPage};
use crate::error::{SkillError, SkillResult};

const SEARCH_PATH: &str = "/rest/api/3/search";

struct Credentials {
    email: String,
    api_token: String,
}

/// Blocking client for `/rest/api/3/search`. One request per search; no
/// retries.
pub struct JiraClient {
    http: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl JiraClient {
    pub fn new(base_url: &str, timeout: Duration) -> SkillResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("jira-skills/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SkillError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, base_url: api_base_url(base_url), credentials: None })
    }

    /// Build a client from config. `base_url` wins over `domain`; basic
    /// auth is attached only when both email and token are present.
    pub fn from_config(config: &Config) -> SkillResult<Self> {
        let site = config
            .base_url
            .as_deref()
            .or(config.domain.as_deref())
            .filter(|s| !s.trim().is_empty())
            .ok_or(SkillError::MissingParameter("domain"))?;

        let client = Self::new(site, Duration::from_secs(config.timeout_secs))?;
        match (config.email.as_deref(), config.api_token.as_deref()) {
            (Some(email), Some(token)) => Ok(client.with_credentials(email, token)),
            (None, None) => {
                tracing::debug!("no Jira credentials configured; sending anonymous requests");
                Ok(client)
            }
            _ => Err(SkillError::Config(
                "email and api_token must be configured together".to_string(),
            )),
        }
    }

    pub fn with_credentials(mut self, email: &str, api_token: &str) -> Self {
        self.credentials =
            Some(Credentials { email: email.to_string(), api_token: api_token.to_string() });
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl IssueSource for JiraClient {
    fn search(&self, query: &SearchQuery) -> SkillResult<SearchPage> {
        let url = format!("{}{SEARCH_PATH}", self.base_url);
        let fields = query.fields_param();
        let max_results = query.max_results.to_string();
        let start_at = query.start_at.to_string();

        let mut request = self.http.get(&url).header(ACCEPT, "application/json").query(&[
            ("jql", query.jql.as_str()),
            ("fields", fields.as_str()),
            ("maxResults", max_results.as_str()),
            ("startAt", start_at.as_str()),
        ]);
        if let Some(creds) = &self.credentials {
            request = request.basic_auth(&creds.email, Some(&creds.api_token));
        }

        let response = request.send().map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SkillError::UpstreamFetch {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().map_err(transport_error)?;
        serde_json::from_str(&body).map_err(|e| SkillError::UpstreamParse(e.to_string()))
    }
}

fn transport_error(err: reqwest::Error) -> SkillError {
    if err.is_timeout() {
        SkillError::Transport(format!("timed out: {err}"))
    } else {
        SkillError::Transport(err.to_string())
    }
}
