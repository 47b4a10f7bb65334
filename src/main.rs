//! jira-skills: run Jira search skills from the command line
//!
//! Finds duplicate tickets, stale issues, recently completed work and
//! per-assignee task priorities in a Jira project.

use anyhow::Result;

fn main() -> Result<()> {
    jira_skills::cli::run()
}
