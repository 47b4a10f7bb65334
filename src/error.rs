//! Failure reasons surfaced by skills

use thiserror::Error;

pub type SkillResult<T> = Result<T, SkillError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SkillError {
    #[error("{0} is required")]
    MissingParameter(&'static str),

    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The tracker answered with a non-success status.
    #[error("Failed to fetch issues: {status} {reason}")]
    UpstreamFetch { status: u16, reason: String },

    #[error("Malformed response from Jira: {0}")]
    UpstreamParse(String),

    /// The request never produced a response (connect failure, timeout).
    #[error("Request to Jira failed: {0}")]
    Transport(String),

    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to render response: {0}")]
    Render(String),
}

impl SkillError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name, reason: reason.into() }
    }

    /// Whether the failure happened before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter(_) | Self::InvalidParameter { .. } | Self::UnknownSkill(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SkillError;

    #[test]
    fn messages_read_as_sentences() {
        assert_eq!(SkillError::MissingParameter("projectKey").to_string(), "projectKey is required");
        assert_eq!(
            SkillError::UpstreamFetch { status: 401, reason: "Unauthorized".into() }.to_string(),
            "Failed to fetch issues: 401 Unauthorized"
        );
        assert_eq!(
            SkillError::invalid("timeRange", "expected e.g. 14d").to_string(),
            "invalid timeRange: expected e.g. 14d"
        );
    }

    #[test]
    fn validation_errors_are_distinguished_from_upstream_ones() {
        assert!(SkillError::MissingParameter("domain").is_validation());
        assert!(!SkillError::Transport("timed out".into()).is_validation());
        assert!(!SkillError::UpstreamParse("eof".into()).is_validation());
    }
}
