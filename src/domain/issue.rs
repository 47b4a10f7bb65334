//! Tracker issue model, shaped after the Jira search response.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use super::time::{deserialize_date, deserialize_timestamp};

/// One page of a Jira search.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub start_at: u64,
    #[serde(default)]
    pub max_results: u64,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl SearchPage {
    /// True when the tracker reports more matches than this page holds.
    /// No continuation is ever requested, so the remainder is dropped.
    pub fn is_truncated(&self) -> bool {
        self.total > self.start_at + self.issues.len() as u64
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Issue {
    pub key: String,
    #[serde(default)]
    pub fields: IssueFields,
}

/// Every field is optional because searches restrict the `fields` they
/// ask for.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueFields {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub summary: String,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub issuetype: Option<IssueType>,
    #[serde(default)]
    pub assignee: Option<Assignee>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub labels: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub updated: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub resolutiondate: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "deserialize_date")]
    pub duedate: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub statuscategorychangedate: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub name: String,
    #[serde(default)]
    pub status_category: Option<StatusCategory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusCategory {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueType {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Priority {
    pub name: String,
}

/// A user an issue is assigned to. `account_id` is the stable identity;
/// display names are neither unique nor stable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignee {
    pub account_id: String,
    #[serde(default)]
    pub display_name: String,
}

impl Issue {
    pub fn summary(&self) -> &str {
        &self.fields.summary
    }

    pub fn status_name(&self) -> Option<&str> {
        self.fields.status.as_ref().map(|s| s.name.as_str())
    }

    pub fn issue_type_name(&self) -> Option<&str> {
        self.fields.issuetype.as_ref().map(|t| t.name.as_str())
    }

    pub fn priority_name(&self) -> Option<&str> {
        self.fields.priority.as_ref().map(|p| p.name.as_str())
    }

    pub fn is_epic(&self) -> bool {
        self.issue_type_name().is_some_and(|name| name.eq_ignore_ascii_case("Epic"))
    }

    /// Whether the status sits in the "Done" category. Jira's category key
    /// is `done` regardless of the site language; the name is a fallback.
    pub fn is_done(&self) -> bool {
        self.fields
            .status
            .as_ref()
            .and_then(|s| s.status_category.as_ref())
            .is_some_and(|c| c.key.eq_ignore_ascii_case("done") || c.name == "Done")
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
