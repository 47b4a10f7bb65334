//! Command-line interface for jira-skills
//!
//! One subcommand per skill, plus `invoke` for name-and-payload dispatch.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::Config;
use crate::fetch::build_source;
use crate::skills::{respond, Skill, SkillContext, SkillPayload};

mod commands;
mod completions;
mod invoke;

/// Jira search skills: duplicates, stale issues, completed work and task priorities
#[derive(Parser)]
#[command(name = "jira-skills")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (jira-skills.toml or .jira-skills.yml)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(flatten)]
    connection: ConnectionArgs,
}

#[derive(Args)]
struct ConnectionArgs {
    /// Jira site, e.g. acme.atlassian.net
    #[arg(long, global = true, env = "JIRA_DOMAIN", value_name = "HOST")]
    domain: Option<String>,

    /// Account email for basic auth
    #[arg(long, global = true, env = "JIRA_EMAIL", value_name = "EMAIL")]
    email: Option<String>,

    /// API token for basic auth
    #[arg(long, global = true, env = "JIRA_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// API root overriding https://<domain>
    #[arg(long, global = true, env = "JIRA_BASE_URL", value_name = "URL")]
    base_url: Option<String>,

    /// Issues requested per search; later pages are never fetched
    #[arg(long, global = true, value_name = "N")]
    max_results: Option<u32>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find tickets whose summaries look like duplicates
    Duplicates(commands::ProjectArgs),

    /// List unfinished issues whose status has not changed in 14 days
    Stale(commands::ProjectArgs),

    /// List tasks completed within a recent time range
    Completed(commands::CompletedArgs),

    /// List a project's issues, optionally by label
    Issues(commands::IssuesArgs),

    /// List tickets assigned to you
    Tickets(commands::ProjectArgs),

    /// Rank one assignee's tasks by due date
    Priorities(commands::PrioritiesArgs),

    /// Run a skill by name with a JSON payload
    Invoke(invoke::InvokeArgs),

    /// List the skill names accepted by `invoke`
    Skills,

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let (skill, payload) = match cli.command {
        Commands::Completions(args) => return completions::run(args, &mut Cli::command()),
        Commands::Skills => {
            for skill in Skill::ALL {
                println!("{skill}");
            }
            return Ok(());
        }
        Commands::Duplicates(args) => (Skill::CheckDuplicates, args.payload()),
        Commands::Stale(args) => (Skill::GetStaleIssues, args.payload()),
        Commands::Completed(args) => (Skill::ListCompletedTasks, args.payload()),
        Commands::Issues(args) => (Skill::GetIssues, args.payload()),
        Commands::Tickets(args) => (Skill::FetchUserTickets, args.payload()),
        Commands::Priorities(args) => (Skill::GetTaskPriorities, args.payload()),
        Commands::Invoke(args) => args.into_request()?,
    };

    let config = resolve_config(cli.config, cli.connection)?;
    run_skill(skill, fill_from_config(payload, &config), &config)
}

fn resolve_config(config_path: Option<PathBuf>, connection: ConnectionArgs) -> Result<Config> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let file_config = load_config(&cwd, config_path.as_deref())?;
    Ok(merge_cli_with_config(
        file_config,
        CliOverrides {
            domain: connection.domain,
            email: connection.email,
            api_token: connection.api_token,
            base_url: connection.base_url,
            project_key: None,
            max_results: connection.max_results,
            timeout_secs: connection.timeout,
        },
    ))
}

/// Parameters the user left out come from config: the default project and
/// the site used for links.
fn fill_from_config(mut payload: SkillPayload, config: &Config) -> SkillPayload {
    if payload.project_key.is_none() && payload.context.is_none() {
        payload.project_key.clone_from(&config.project_key);
    }
    if payload.domain.is_none() {
        payload.domain.clone_from(&config.domain);
    }
    payload
}

fn run_skill(skill: Skill, payload: SkillPayload, config: &Config) -> Result<()> {
    let source = build_source(config)?;
    let ctx = SkillContext::new(source.as_ref(), Utc::now()).page_size(config.max_results);

    let response = respond(skill, &payload, &ctx);
    if !response.ok {
        anyhow::bail!("{}", response.body);
    }
    println!("{}", response.body);
    Ok(())
}
