//! Plain issue listing

use serde::Serialize;

use super::{SkillContext, SkillOutput};
use crate::error::SkillResult;
use crate::fetch::jql::{self, validate_project_key};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueSummary {
    pub key: String,
    pub summary: String,
}

pub fn get_issues(
    ctx: &SkillContext<'_>,
    project: &str,
    label: Option<&str>,
) -> SkillResult<SkillOutput> {
    let project = validate_project_key(project)?;
    let page = ctx.search(jql::project_issues(project, label), jql::SUMMARY_FIELDS)?;
    let issues: Vec<IssueSummary> = page
        .issues
        .iter()
        .map(|issue| IssueSummary { key: issue.key.clone(), summary: issue.summary().to_string() })
        .collect();
    SkillOutput::json(&issues)
}
