//! Recently completed task listing

use serde::Serialize;
use std::collections::BTreeMap;

use super::{SkillContext, SkillOutput};
use crate::domain::time::display_date;
use crate::domain::Issue;
use crate::error::SkillResult;
use crate::fetch::jql::{self, validate_project_key, validate_time_range};
use crate::fetch::links::issue_url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedTask {
    pub key: String,
    pub summary: String,
    pub status: Option<String>,
    pub assignee: Option<String>,
    pub resolved: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedTasks {
    pub issues: Vec<CompletedTask>,
    #[serde(rename = "issueLinks")]
    pub issue_links: BTreeMap<String, String>,
}

impl CompletedTask {
    fn from_issue(issue: &Issue) -> Self {
        Self {
            key: issue.key.clone(),
            summary: issue.summary().to_string(),
            status: issue.status_name().map(str::to_string),
            assignee: issue.fields.assignee.as_ref().map(|a| a.display_name.clone()),
            resolved: issue.fields.resolutiondate.as_ref().map(display_date),
        }
    }
}

/// Issues moved to Done within `time_range` (a relative range like `14d`),
/// newest first, each with a link back to the site.
pub fn list_completed_tasks(
    ctx: &SkillContext<'_>,
    project: &str,
    domain: &str,
    time_range: &str,
) -> SkillResult<SkillOutput> {
    let project = validate_project_key(project)?;
    let time_range = validate_time_range(time_range)?;
    let page = ctx.search(jql::completed_within(project, time_range), jql::COMPLETED_FIELDS)?;

    let issues: Vec<CompletedTask> = page.issues.iter().map(CompletedTask::from_issue).collect();
    let issue_links =
        issues.iter().map(|task| (task.key.clone(), issue_url(domain, &task.key))).collect();
    SkillOutput::json(&CompletedTasks { issues, issue_links })
}
