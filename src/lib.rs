//! jira-skills: small Jira search skills with markdown and JSON output
//!
//! Each skill runs one JQL search, post-processes the issues locally
//! (duplicate detection, staleness, assignee matching, due-date ranking)
//! and renders the result for a human or an agent.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod render;
pub mod skills;

pub use error::{SkillError, SkillResult};
