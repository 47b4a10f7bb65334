//! Issue fetching from the tracker

use crate::domain::{Config, SearchPage};
use crate::error::SkillResult;

pub mod client;
pub mod jql;
pub mod links;

pub use client::JiraClient;
pub use jql::SearchQuery;

/// Anything that can answer a JQL search with one page of issues.
pub trait IssueSource {
    fn search(&self, query: &SearchQuery) -> SkillResult<SearchPage>;
}

pub fn build_source(config: &Config) -> SkillResult<Box<dyn IssueSource>> {
    Ok(Box::new(JiraClient::from_config(config)?))
}

/// Run one search, logging the query and any dropped remainder.
pub fn search(source: &dyn IssueSource, query: &SearchQuery) -> SkillResult<SearchPage> {
    tracing::debug!(jql = %query.jql, fields = %query.fields_param(), "searching issues");
    let page = source.search(query)?;
    if page.is_truncated() {
        tracing::warn!(
            jql = %query.jql,
            returned = page.issues.len(),
            total = page.total,
            "search matched more issues than one page holds; the rest are ignored"
        );
    }
    Ok(page)
}
