//! Task priorities for one assignee

use super::{SkillContext, SkillOutput};
use crate::analysis::{rank_by_due_date, resolve_assignee, AssigneeMatch};
use crate::error::{SkillError, SkillResult};
use crate::fetch::jql::{self, validate_project_key};
use crate::render::markdown;

/// Resolve `partial_name` against the project's assignees, then tabulate
/// that person's open and finished tasks by due date.
///
/// Zero or several matching assignees produce a message asking the caller
/// to refine the name; only an unambiguous match triggers the task search,
/// which filters on the account id rather than the display name.
pub fn get_task_priorities(
    ctx: &SkillContext<'_>,
    project: &str,
    partial_name: &str,
) -> SkillResult<SkillOutput> {
    let project = validate_project_key(project)?;
    let partial_name = partial_name.trim();
    if partial_name.is_empty() {
        return Err(SkillError::MissingParameter("assignee"));
    }

    let candidates = ctx.search(jql::recent_issues(project), jql::ASSIGNEE_FIELDS)?;
    let assignee = match resolve_assignee(&candidates.issues, partial_name) {
        AssigneeMatch::One(assignee) => assignee,
        AssigneeMatch::None => {
            return Ok(SkillOutput::Markdown(markdown::no_assignees(partial_name, project)));
        }
        AssigneeMatch::Many(matches) => {
            return Ok(SkillOutput::Markdown(markdown::ambiguous_assignees(
                partial_name,
                project,
                &matches,
            )));
        }
    };

    tracing::debug!(project, account_id = %assignee.account_id, "assignee resolved");
    let page =
        ctx.search(jql::assignee_tasks(&assignee.account_id, project), jql::PRIORITY_FIELDS)?;
    if page.issues.is_empty() {
        return Ok(SkillOutput::Markdown(markdown::no_tasks(&assignee, project)));
    }

    let rows = rank_by_due_date(&page.issues, ctx.now);
    Ok(SkillOutput::Markdown(markdown::task_priorities_table(&assignee, project, &rows)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::testing::{now, page, FakeSource};
    use serde_json::json;

    fn assignee_page() -> crate::domain::SearchPage {
        page(json!([
            {"key": "CAT-1", "fields": {"assignee": {"accountId": "acc-anna", "displayName": "Anna Lee"}}},
            {"key": "CAT-2", "fields": {"assignee": null}},
            {"key": "CAT-3", "fields": {"assignee": {"accountId": "acc-bob", "displayName": "Bob"}}},
            {"key": "CAT-4", "fields": {"assignee": {"accountId": "acc-annabel", "displayName": "Annabel Wu"}}}
        ]))
    }

    fn markdown(output: SkillOutput) -> String {
        match output {
            SkillOutput::Markdown(text) => text,
            other => panic!("expected markdown, got {other:?}"),
        }
    }

    #[test]
    fn ambiguous_name_lists_candidates_and_stops() {
        let source = FakeSource::new(vec![Ok(assignee_page())]);
        let ctx = SkillContext::new(&source, now());
        let text = markdown(get_task_priorities(&ctx, "CAT", "ann").expect("priorities"));
        assert_eq!(
            text,
            "Multiple assignees found matching \"ann\" in project CAT:\n\
             - Anna Lee\n\
             - Annabel Wu\n\
             Please provide a more specific name."
        );
        assert_eq!(source.queries.borrow().len(), 1);
    }

    #[test]
    fn unknown_name_asks_for_another_value() {
        let source = FakeSource::new(vec![Ok(assignee_page())]);
        let ctx = SkillContext::new(&source, now());
        let text = markdown(get_task_priorities(&ctx, "CAT", "carol").expect("priorities"));
        assert!(text.starts_with("No assignees found matching \"carol\""));
        assert_eq!(source.queries.borrow().len(), 1);
    }

    #[test]
    fn single_match_queries_by_account_id() {
        // now() is 2024-03-20T12:00Z.
        let tasks = page(json!([
            {"key": "CAT-7", "fields": {
                "summary": "Vaccinations",
                "duedate": "2024-03-19",
                "priority": {"name": "High"},
                "status": {"name": "To Do"},
                "labels": ["vet"]
            }},
            {"key": "CAT-8", "fields": {
                "summary": "Buy toys",
                "duedate": "2024-03-21",
                "status": {"name": "To Do"}
            }},
            {"key": "CAT-9", "fields": {"summary": "Someday", "status": {"name": "Done"}}}
        ]));
        let source = FakeSource::new(vec![Ok(assignee_page()), Ok(tasks)]);
        let ctx = SkillContext::new(&source, now());

        let text = markdown(get_task_priorities(&ctx, "CAT", "BOB").expect("priorities"));
        assert_eq!(
            text,
            "### Task Priorities for Bob in Project CAT\n\
             | Issue Key | Summary | Due Date | Priority | Status | Time Left | Labels |\n\
             |-----------|---------|----------|----------|--------|-----------|--------|\n\
             | CAT-7 | Vaccinations | 3/19/2024 ⚠️ | High | To Do | Overdue | vet |\n\
             | CAT-8 | Buy toys | 3/21/2024 | N/A | To Do | 12.0 hrs | N/A |\n\
             | CAT-9 | Someday | N/A | N/A | Done | N/A | N/A |\n"
        );
        assert_eq!(
            source.jql(),
            vec![
                "project = CAT ORDER BY created DESC".to_string(),
                "assignee = \"acc-bob\" AND project = CAT AND status in (\"To Do\", \"Done\") ORDER BY duedate ASC"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn matched_assignee_without_tasks() {
        let source = FakeSource::new(vec![Ok(assignee_page()), Ok(page(json!([])))]);
        let ctx = SkillContext::new(&source, now());
        let text = markdown(get_task_priorities(&ctx, "CAT", "wu").expect("priorities"));
        assert_eq!(text, "No tasks found for assignee Annabel Wu in project CAT.");
    }

    #[test]
    fn blank_name_is_rejected_before_searching() {
        let source = FakeSource::new(vec![]);
        let ctx = SkillContext::new(&source, now());
        assert_eq!(
            get_task_priorities(&ctx, "CAT", "  "),
            Err(SkillError::MissingParameter("assignee"))
        );
        assert!(source.queries.borrow().is_empty());
    }
}
