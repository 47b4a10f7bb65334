//! The calling user's tickets

use super::{SkillContext, SkillOutput};
use crate::error::SkillResult;
use crate::fetch::jql::{self, validate_project_key};
use crate::render::markdown;

/// Tickets assigned to the authenticated user, most recently updated first.
pub fn fetch_user_tickets(
    ctx: &SkillContext<'_>,
    project: &str,
    domain: &str,
) -> SkillResult<SkillOutput> {
    let project = validate_project_key(project)?;
    let page = ctx.search(jql::current_user_issues(project), jql::TICKET_FIELDS)?;
    if page.issues.is_empty() {
        return Ok(SkillOutput::Markdown(markdown::no_user_tickets(project)));
    }
    Ok(SkillOutput::Markdown(markdown::ticket_list(project, domain, &page.issues)))
}
