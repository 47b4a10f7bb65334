//! Markdown rendering for skill responses

use crate::analysis::{PriorityRow, SimilarityPair};
use crate::domain::{Assignee, Issue};
use crate::fetch::links::issue_url;
use crate::render::fixed;

const OVERDUE_MARKER: &str = " ⚠️";

/// Keep cell text from breaking the table layout.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

pub fn duplicates_table(pairs: &[SimilarityPair]) -> String {
    let mut out = String::from("Duplicate Tickets:\n");
    out.push_str("| Ticket 1 | Ticket 2 | Similarity Score |\n");
    out.push_str("|----------|----------|------------------|\n");
    for pair in pairs {
        let score = fixed(pair.score, 2);
        out.push_str(&format!("| {} | {} | {score} |\n", pair.first, pair.second));
    }
    out
}

pub fn no_duplicates(project: &str) -> String {
    format!("No duplicate tickets found in project {project}.")
}

pub fn no_tickets(project: &str) -> String {
    format!("No tickets found for project {project}.")
}

pub fn task_priorities_table(assignee: &Assignee, project: &str, rows: &[PriorityRow]) -> String {
    let mut out =
        format!("### Task Priorities for {} in Project {project}\n", assignee.display_name);
    out.push_str("| Issue Key | Summary | Due Date | Priority | Status | Time Left | Labels |\n");
    out.push_str("|-----------|---------|----------|----------|--------|-----------|--------|\n");
    for row in rows {
        let marker = if row.overdue { OVERDUE_MARKER } else { "" };
        out.push_str(&format!(
            "| {} | {} | {}{marker} | {} | {} | {} | {} |\n",
            row.key,
            cell(&row.summary),
            row.due_date,
            cell(&row.priority),
            cell(&row.status),
            row.time_left,
            cell(&row.labels),
        ));
    }
    out
}

pub fn no_tasks(assignee: &Assignee, project: &str) -> String {
    format!("No tasks found for assignee {} in project {project}.", assignee.display_name)
}

pub fn no_assignees(partial_name: &str, project: &str) -> String {
    format!(
        "No assignees found matching \"{partial_name}\" in project {project}. Please try a different value."
    )
}

pub fn ambiguous_assignees(partial_name: &str, project: &str, candidates: &[Assignee]) -> String {
    let mut out =
        format!("Multiple assignees found matching \"{partial_name}\" in project {project}:\n");
    for candidate in candidates {
        out.push_str(&format!("- {}\n", candidate.display_name));
    }
    out.push_str("Please provide a more specific name.");
    out
}

/// Bullet list of issues linking back to the site.
pub fn ticket_list(project: &str, domain: &str, issues: &[Issue]) -> String {
    let mut out = format!("### Your tickets in {project}\n");
    for issue in issues {
        let link = issue_url(domain, &issue.key);
        out.push_str(&format!("- [{}]({link}) {}", issue.key, issue.summary()));
        let details: Vec<&str> =
            [issue.status_name(), issue.priority_name()].into_iter().flatten().collect();
        if !details.is_empty() {
            out.push_str(&format!(" ({})", details.join(", ")));
        }
        out.push('\n');
    }
    out
}

pub fn no_user_tickets(project: &str) -> String {
    format!("You have no tickets assigned in project {project}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::issue::Priority;
    use crate::domain::{IssueFields, Status};

    fn anna() -> Assignee {
        Assignee { account_id: "acc-anna".to_string(), display_name: "Anna Lee".to_string() }
    }

    #[test]
    fn duplicates_table_uses_two_decimals() {
        let pairs = vec![
            SimilarityPair { first: "A-1".into(), second: "A-3".into(), score: 0.75 },
            SimilarityPair { first: "A-2".into(), second: "A-4".into(), score: 2.0 / 3.0 },
        ];
        assert_eq!(
            duplicates_table(&pairs),
            "Duplicate Tickets:\n\
             | Ticket 1 | Ticket 2 | Similarity Score |\n\
             |----------|----------|------------------|\n\
             | A-1 | A-3 | 0.75 |\n\
             | A-2 | A-4 | 0.67 |\n"
        );
    }

    #[test]
    fn duplicate_scores_round_halves_up() {
        let pairs = vec![SimilarityPair { first: "A".into(), second: "B".into(), score: 5.0 / 8.0 }];
        assert!(duplicates_table(&pairs).ends_with("| A | B | 0.63 |\n"));
    }

    #[test]
    fn priorities_table_marks_overdue_rows() {
        let rows = vec![
            PriorityRow {
                key: "T-1".into(),
                summary: "Ship | release".into(),
                due_date: "3/10/2024".into(),
                overdue: true,
                priority: "High".into(),
                status: "To Do".into(),
                time_left: "Overdue".into(),
                labels: "backend, urgent".into(),
            },
            PriorityRow {
                key: "T-2".into(),
                summary: "Write notes".into(),
                due_date: "N/A".into(),
                overdue: false,
                priority: "N/A".into(),
                status: "Done".into(),
                time_left: "N/A".into(),
                labels: "N/A".into(),
            },
        ];
        assert_eq!(
            task_priorities_table(&anna(), "CAT", &rows),
            "### Task Priorities for Anna Lee in Project CAT\n\
             | Issue Key | Summary | Due Date | Priority | Status | Time Left | Labels |\n\
             |-----------|---------|----------|----------|--------|-----------|--------|\n\
             | T-1 | Ship \\| release | 3/10/2024 ⚠️ | High | To Do | Overdue | backend, urgent |\n\
             | T-2 | Write notes | N/A | N/A | Done | N/A | N/A |\n"
        );
    }

    #[test]
    fn disambiguation_lists_every_candidate() {
        let candidates = vec![
            anna(),
            Assignee { account_id: "acc-wu".into(), display_name: "Annabel Wu".into() },
        ];
        assert_eq!(
            ambiguous_assignees("ann", "CAT", &candidates),
            "Multiple assignees found matching \"ann\" in project CAT:\n\
             - Anna Lee\n\
             - Annabel Wu\n\
             Please provide a more specific name."
        );
    }

    #[test]
    fn no_assignee_message_asks_for_retry() {
        assert_eq!(
            no_assignees("zed", "CAT"),
            "No assignees found matching \"zed\" in project CAT. Please try a different value."
        );
    }

    #[test]
    fn ticket_list_links_each_issue() {
        let issues = vec![
            Issue {
                key: "CAT-1".into(),
                fields: IssueFields {
                    summary: "Buy litter".into(),
                    status: Some(Status { name: "To Do".into(), status_category: None }),
                    priority: Some(Priority { name: "Low".into() }),
                    ..Default::default()
                },
            },
            Issue {
                key: "CAT-2".into(),
                fields: IssueFields { summary: "Vet visit".into(), ..Default::default() },
            },
        ];
        assert_eq!(
            ticket_list("CAT", "https://acme.atlassian.net/", &issues),
            "### Your tickets in CAT\n\
             - [CAT-1](https://acme.atlassian.net/browse/CAT-1) Buy litter (To Do, Low)\n\
             - [CAT-2](https://acme.atlassian.net/browse/CAT-2) Vet visit\n"
        );
    }
}
