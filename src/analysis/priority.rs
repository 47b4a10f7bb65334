//! Due-date annotation for task priority tables

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::time::{display_date, due_instant};
use crate::domain::Issue;
use crate::render::fixed;

pub const NOT_AVAILABLE: &str = "N/A";
pub const OVERDUE: &str = "Overdue";
pub const LABEL_SEPARATOR: &str = ", ";

const MS_PER_HOUR: f64 = 60.0 * 60.0 * 1000.0;

/// One table row; every field is already in display form except `overdue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityRow {
    pub key: String,
    pub summary: String,
    pub due_date: String,
    pub overdue: bool,
    pub priority: String,
    pub status: String,
    pub time_left: String,
    pub labels: String,
}

/// Annotate issues with time remaining. Input order is kept; sorting by
/// due date is the search query's job.
pub fn rank_by_due_date(issues: &[Issue], now: DateTime<Utc>) -> Vec<PriorityRow> {
    issues.iter().map(|issue| priority_row(issue, now)).collect()
}

fn priority_row(issue: &Issue, now: DateTime<Utc>) -> PriorityRow {
    let due = issue.fields.duedate.map(due_instant);
    let labels = if issue.fields.labels.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        issue.fields.labels.join(LABEL_SEPARATOR)
    };

    PriorityRow {
        key: issue.key.clone(),
        summary: issue.summary().to_string(),
        due_date: due.as_ref().map_or_else(|| NOT_AVAILABLE.to_string(), display_date),
        overdue: due.is_some_and(|d| d < now),
        priority: issue.priority_name().unwrap_or(NOT_AVAILABLE).to_string(),
        status: issue.status_name().unwrap_or(NOT_AVAILABLE).to_string(),
        time_left: due.map_or_else(|| NOT_AVAILABLE.to_string(), |d| time_left(d, now)),
        labels,
    }
}

/// `"Overdue"` once the due instant is reached, otherwise days (from 24h
/// up) or hours, to one decimal.
pub fn time_left(due: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = (due - now).num_milliseconds();
    if diff_ms <= 0 {
        return OVERDUE.to_string();
    }
    let hours = diff_ms as f64 / MS_PER_HOUR;
    if hours >= 24.0 {
        format!("{} days", fixed(hours / 24.0, 1))
    } else {
        format!("{} hrs", fixed(hours, 1))
    }
}
