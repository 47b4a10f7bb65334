//! Per-skill subcommand arguments

use clap::Args;

use crate::skills::SkillPayload;

#[derive(Args)]
pub struct ProjectArgs {
    /// Jira project key (defaults to `project_key` from config)
    #[arg(short, long, env = "JIRA_PROJECT", value_name = "KEY")]
    pub project: Option<String>,
}

impl ProjectArgs {
    pub fn payload(self) -> SkillPayload {
        SkillPayload { project_key: self.project, ..SkillPayload::default() }
    }
}

#[derive(Args)]
pub struct CompletedArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// How far back to look, as a Jira relative range (14d, 2w, 36h)
    #[arg(short = 't', long, value_name = "RANGE", default_value = "14d")]
    pub time_range: String,
}

impl CompletedArgs {
    pub fn payload(self) -> SkillPayload {
        SkillPayload { time_range: Some(self.time_range), ..self.project.payload() }
    }
}

#[derive(Args)]
pub struct IssuesArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Only issues carrying this label
    #[arg(short, long, value_name = "LABEL")]
    pub label: Option<String>,
}

impl IssuesArgs {
    pub fn payload(self) -> SkillPayload {
        SkillPayload { label: self.label, ..self.project.payload() }
    }
}

#[derive(Args)]
pub struct PrioritiesArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Full or partial assignee name, matched case-insensitively
    #[arg(short, long, value_name = "NAME")]
    pub assignee: String,
}

impl PrioritiesArgs {
    pub fn payload(self) -> SkillPayload {
        SkillPayload { assignee: Some(self.assignee), ..self.project.payload() }
    }
}
