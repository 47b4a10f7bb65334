//! Core data types shared across fetching, analysis and rendering

pub mod config;
pub mod issue;
pub mod time;

pub use config::Config;
pub use issue::{Assignee, Issue, IssueFields, SearchPage, Status, StatusCategory};
