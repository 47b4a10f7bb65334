//! Duplicate ticket report

use super::{SkillContext, SkillOutput};
use crate::analysis::find_duplicates;
use crate::error::SkillResult;
use crate::fetch::jql::{self, validate_project_key};
use crate::render::markdown;

/// Compare the summaries of a project's recent tickets and tabulate the
/// pairs that look like the same request.
pub fn check_duplicates(ctx: &SkillContext<'_>, project: &str) -> SkillResult<SkillOutput> {
    let project = validate_project_key(project)?;
    let page = ctx.search(jql::recent_issues(project), jql::SUMMARY_FIELDS)?;
    if page.issues.is_empty() {
        return Ok(SkillOutput::Markdown(markdown::no_tickets(project)));
    }

    let pairs = find_duplicates(&page.issues);
    tracing::debug!(
        project,
        compared = page.issues.len(),
        duplicates = pairs.len(),
        "duplicate scan"
    );
    if pairs.is_empty() {
        return Ok(SkillOutput::Markdown(markdown::no_duplicates(project)));
    }
    Ok(SkillOutput::Markdown(markdown::duplicates_table(&pairs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::testing::{now, FakeSource};
    use serde_json::json;

    fn markdown(output: SkillOutput) -> String {
        match output {
            SkillOutput::Markdown(text) => text,
            other => panic!("expected markdown, got {other:?}"),
        }
    }

    #[test]
    fn reports_similar_summaries() {
        let source = FakeSource::with_issues(json!([
            {"key": "CAT-3", "fields": {"summary": "Fix the login bug"}},
            {"key": "CAT-2", "fields": {"summary": "Update billing invoice"}},
            {"key": "CAT-1", "fields": {"summary": "Fix login bug"}}
        ]));
        let ctx = SkillContext::new(&source, now());

        let text = markdown(check_duplicates(&ctx, "CAT").expect("report"));
        assert_eq!(
            text,
            "Duplicate Tickets:\n\
             | Ticket 1 | Ticket 2 | Similarity Score |\n\
             |----------|----------|------------------|\n\
             | CAT-3 | CAT-1 | 0.75 |\n"
        );
        assert_eq!(source.jql(), vec!["project = CAT ORDER BY created DESC"]);
        assert_eq!(source.queries.borrow()[0].fields, vec!["summary"]);
    }

    #[test]
    fn distinct_summaries_yield_no_duplicates_message() {
        let source = FakeSource::with_issues(json!([
            {"key": "CAT-1", "fields": {"summary": "Fix login bug"}},
            {"key": "CAT-2", "fields": {"summary": "Update billing invoice"}}
        ]));
        let ctx = SkillContext::new(&source, now());
        let text = markdown(check_duplicates(&ctx, "CAT").expect("report"));
        assert_eq!(text, "No duplicate tickets found in project CAT.");
    }

    #[test]
    fn empty_project_says_so() {
        let source = FakeSource::with_issues(json!([]));
        let ctx = SkillContext::new(&source, now());
        let text = markdown(check_duplicates(&ctx, "CAT").expect("report"));
        assert_eq!(text, "No tickets found for project CAT.");
    }

    #[test]
    fn output_is_repeatable() {
        let issues = json!([
            {"key": "CAT-1", "fields": {"summary": "Crash on save"}},
            {"key": "CAT-2", "fields": {"summary": "crash on save!"}}
        ]);
        let first = FakeSource::with_issues(issues.clone());
        let second = FakeSource::with_issues(issues);
        let a = check_duplicates(&SkillContext::new(&first, now()), "CAT").expect("first");
        let b = check_duplicates(&SkillContext::new(&second, now()), "CAT").expect("second");
        assert_eq!(a, b);
    }
}
