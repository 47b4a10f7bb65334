//! Jira connection settings
//!
//! A `jira-skills` TOML or YAML file supplies defaults; flags and `JIRA_*`
//! environment variables (read by clap) override them.

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};
