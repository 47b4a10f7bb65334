//! Fuzzy assignee lookup over a result set

use std::collections::HashSet;

use crate::domain::{Assignee, Issue};

/// Outcome of resolving a partial name. Only `One` lets a caller continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssigneeMatch {
    None,
    One(Assignee),
    Many(Vec<Assignee>),
}

/// Distinct assignees in order of first appearance, keyed by account id.
pub fn unique_assignees(issues: &[Issue]) -> Vec<Assignee> {
    let mut seen = HashSet::new();
    issues
        .iter()
        .filter_map(|issue| issue.fields.assignee.as_ref())
        .filter(|assignee| seen.insert(assignee.account_id.clone()))
        .cloned()
        .collect()
}

/// Assignees whose display name contains `partial_name`, ignoring case.
pub fn match_assignees(issues: &[Issue], partial_name: &str) -> Vec<Assignee> {
    let needle = partial_name.to_lowercase();
    unique_assignees(issues)
        .into_iter()
        .filter(|assignee| assignee.display_name.to_lowercase().contains(&needle))
        .collect()
}

pub fn resolve_assignee(issues: &[Issue], partial_name: &str) -> AssigneeMatch {
    let mut matches = match_assignees(issues, partial_name);
    match matches.len() {
        0 => AssigneeMatch::None,
        1 => AssigneeMatch::One(matches.remove(0)),
        _ => AssigneeMatch::Many(matches),
    }
}
