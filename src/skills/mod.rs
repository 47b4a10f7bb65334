//! Skills: one search, one analysis, one rendered answer each
//!
//! Every skill validates its parameters before touching the network and
//! returns a [`SkillResult`]. [`respond`] is the boundary that turns a
//! failure into the single message shown to the caller.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::domain::config::DEFAULT_MAX_RESULTS;
use crate::domain::SearchPage;
use crate::error::{SkillError, SkillResult};
use crate::fetch::{self, IssueSource, SearchQuery};

pub mod completed;
pub mod duplicates;
pub mod issues;
pub mod params;
pub mod priorities;
pub mod stale;
pub mod tickets;

pub use params::SkillPayload;

/// What a skill hands back: prose for people or data for programs.
#[derive(Debug, Clone, PartialEq)]
pub enum SkillOutput {
    Markdown(String),
    Json(Value),
}

impl SkillOutput {
    pub fn json<T: Serialize>(value: &T) -> SkillResult<Self> {
        serde_json::to_value(value).map(Self::Json).map_err(|e| SkillError::Render(e.to_string()))
    }

    pub fn render(&self) -> String {
        match self {
            Self::Markdown(text) => text.clone(),
            Self::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

/// Everything a skill needs besides its parameters. `now` is read once by
/// the caller so a whole invocation sees a single instant.
pub struct SkillContext<'a> {
    pub source: &'a dyn IssueSource,
    pub now: DateTime<Utc>,
    pub page_size: u32,
}

impl<'a> SkillContext<'a> {
    pub fn new(source: &'a dyn IssueSource, now: DateTime<Utc>) -> Self {
        Self { source, now, page_size: DEFAULT_MAX_RESULTS }
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub(crate) fn search(&self, jql: String, fields: &[&'static str]) -> SkillResult<SearchPage> {
        let query = SearchQuery::new(jql, fields).page_size(self.page_size);
        fetch::search(self.source, &query)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skill {
    CheckDuplicates,
    GetStaleIssues,
    ListCompletedTasks,
    GetIssues,
    FetchUserTickets,
    GetTaskPriorities,
}

impl Skill {
    pub const ALL: [Skill; 6] = [
        Skill::CheckDuplicates,
        Skill::GetStaleIssues,
        Skill::ListCompletedTasks,
        Skill::GetIssues,
        Skill::FetchUserTickets,
        Skill::GetTaskPriorities,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Skill::CheckDuplicates => "checkDuplicates",
            Skill::GetStaleIssues => "getStaleIssues",
            Skill::ListCompletedTasks => "listCompletedTasks",
            Skill::GetIssues => "getIssues",
            Skill::FetchUserTickets => "fetchUserTickets",
            Skill::GetTaskPriorities => "getTaskPriorities",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Skill {
    type Err = SkillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Skill::ALL
            .into_iter()
            .find(|skill| skill.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SkillError::UnknownSkill(s.to_string()))
    }
}

/// Validate the payload for `skill` and run it.
pub fn invoke(
    skill: Skill,
    payload: &SkillPayload,
    ctx: &SkillContext<'_>,
) -> SkillResult<SkillOutput> {
    match skill {
        Skill::CheckDuplicates => {
            duplicates::check_duplicates(ctx, payload.explicit_project_key()?)
        }
        Skill::GetStaleIssues => stale::get_stale_issues(ctx, payload.project_key()?),
        Skill::ListCompletedTasks => {
            let project = payload.explicit_project_key()?;
            let domain = payload.domain()?;
            let time_range = payload.time_range()?;
            completed::list_completed_tasks(ctx, project, domain, time_range)
        }
        Skill::GetIssues => issues::get_issues(ctx, payload.project_key()?, payload.label()),
        Skill::FetchUserTickets => {
            let project = payload.explicit_project_key()?;
            tickets::fetch_user_tickets(ctx, project, payload.domain()?)
        }
        Skill::GetTaskPriorities => {
            let project = payload.explicit_project_key()?;
            priorities::get_task_priorities(ctx, project, payload.assignee()?)
        }
    }
}

/// A rendered answer. `ok` is false when `body` describes a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub ok: bool,
    pub body: String,
}

/// Run a skill and render either its output or its failure as text.
pub fn respond(skill: Skill, payload: &SkillPayload, ctx: &SkillContext<'_>) -> Response {
    match invoke(skill, payload, ctx) {
        Ok(output) => Response { ok: true, body: output.render() },
        Err(err) => {
            tracing::error!(skill = %skill, error = %err, "skill failed");
            Response { ok: false, body: failure_message(skill, payload, &err) }
        }
    }
}

fn failure_message(skill: Skill, payload: &SkillPayload, err: &SkillError) -> String {
    if err.is_validation() {
        return err.to_string();
    }
    match payload.project_key() {
        Ok(project) => format!("Error running {skill} for project {project}: {err}"),
        Err(_) => format!("Error running {skill}: {err}"),
    }
}
