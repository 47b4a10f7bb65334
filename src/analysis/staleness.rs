//! Stale issue detection

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::time::display_date;
use crate::domain::Issue;

/// Fourteen days, in milliseconds. Compared without any calendar or
/// timezone adjustment.
pub const STALE_WINDOW_MS: i64 = 14 * 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaleIssue {
    pub issue_key: String,
    pub title: String,
    pub last_status_changed_date: String,
}

/// An issue is stale when its status category last moved more than
/// [`STALE_WINDOW_MS`] before `now`. Epics, finished issues and issues with
/// no recorded transition never are.
pub fn is_stale(issue: &Issue, now: DateTime<Utc>) -> bool {
    if issue.is_epic() || issue.is_done() {
        return false;
    }
    match issue.fields.statuscategorychangedate {
        Some(changed) => now.timestamp_millis() > changed.timestamp_millis() + STALE_WINDOW_MS,
        None => false,
    }
}

pub fn stale_issues(issues: &[Issue], now: DateTime<Utc>) -> Vec<StaleIssue> {
    issues
        .iter()
        .filter(|issue| is_stale(issue, now))
        .filter_map(|issue| {
            let changed = issue.fields.statuscategorychangedate.as_ref()?;
            Some(StaleIssue {
                issue_key: issue.key.clone(),
                title: issue.summary().to_string(),
                last_status_changed_date: display_date(changed),
            })
        })
        .collect()
}
