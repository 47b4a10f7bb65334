//! JQL construction for the searches each skill issues.
//!
//! Project keys and time ranges are validated before they are spliced into
//! a query; free-text values are always quoted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::config::DEFAULT_MAX_RESULTS;
use crate::error::{SkillError, SkillResult};

static PROJECT_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").unwrap());

/// Jira relative date offsets: `14d`, `2w`, `36h`, `90m`.
static TIME_RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+[wdhm]$").unwrap());

pub const DEFAULT_TIME_RANGE: &str = "14d";

pub const SUMMARY_FIELDS: &[&str] = &["summary"];
pub const ASSIGNEE_FIELDS: &[&str] = &["assignee"];
pub const STALE_FIELDS: &[&str] = &["summary", "status", "issuetype", "statuscategorychangedate"];
pub const COMPLETED_FIELDS: &[&str] = &["summary", "status", "assignee", "resolutiondate"];
pub const TICKET_FIELDS: &[&str] = &["summary", "status", "priority"];
pub const PRIORITY_FIELDS: &[&str] =
    &["summary", "duedate", "priority", "status", "timeoriginalestimate", "labels"];

/// A single search request: one page, never continued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub jql: String,
    pub fields: Vec<&'static str>,
    pub max_results: u32,
    pub start_at: u32,
}

impl SearchQuery {
    pub fn new(jql: impl Into<String>, fields: &[&'static str]) -> Self {
        Self {
            jql: jql.into(),
            fields: fields.to_vec(),
            max_results: DEFAULT_MAX_RESULTS,
            start_at: 0,
        }
    }

    pub fn page_size(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn fields_param(&self) -> String {
        self.fields.join(",")
    }
}

pub fn validate_project_key(key: &str) -> SkillResult<&str> {
    let key = key.trim();
    if key.is_empty() {
        return Err(SkillError::MissingParameter("projectKey"));
    }
    if !PROJECT_KEY.is_match(key) {
        return Err(SkillError::invalid(
            "projectKey",
            format!("'{key}' is not a Jira project key (letters, digits and underscores)"),
        ));
    }
    Ok(key)
}

pub fn validate_time_range(range: &str) -> SkillResult<&str> {
    let range = range.trim();
    if TIME_RANGE.is_match(range) {
        Ok(range)
    } else {
        Err(SkillError::invalid(
            "timeRange",
            format!("'{range}' is not a relative range such as 14d, 2w or 12h"),
        ))
    }
}

/// Double-quote a JQL string literal.
pub fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

pub fn recent_issues(project: &str) -> String {
    format!("project = {project} ORDER BY created DESC")
}

pub fn unfinished_issues(project: &str) -> String {
    format!("project = {project} AND statusCategory != Done ORDER BY updated ASC")
}

pub fn completed_within(project: &str, time_range: &str) -> String {
    format!(
        "project = {project} AND statusCategory = Done AND resolved >= -{time_range} ORDER BY resolved DESC"
    )
}

pub fn project_issues(project: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("project = {project} AND labels = {}", quote(label)),
        None => format!("project = {project}"),
    }
}

pub fn current_user_issues(project: &str) -> String {
    format!("project = {project} AND assignee = currentUser() ORDER BY updated DESC")
}

/// Open and finished tasks for one account, soonest due first.
pub fn assignee_tasks(account_id: &str, project: &str) -> String {
    format!(
        "assignee = {} AND project = {project} AND status in (\"To Do\", \"Done\") ORDER BY duedate ASC",
        quote(account_id)
    )
}
