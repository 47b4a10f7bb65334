//! Stale issue listing

use super::{SkillContext, SkillOutput};
use crate::analysis::stale_issues;
use crate::error::SkillResult;
use crate::fetch::jql::{self, validate_project_key};

/// Unfinished issues whose status category has not moved for two weeks.
pub fn get_stale_issues(ctx: &SkillContext<'_>, project: &str) -> SkillResult<SkillOutput> {
    let project = validate_project_key(project)?;
    let page = ctx.search(jql::unfinished_issues(project), jql::STALE_FIELDS)?;
    let stale = stale_issues(&page.issues, ctx.now);
    tracing::debug!(project, checked = page.issues.len(), stale = stale.len(), "stale scan");
    SkillOutput::json(&stale)
}
