//! Named-parameter payloads accepted by every skill

use serde::Deserialize;
use serde_json::Value;

use crate::error::{SkillError, SkillResult};
use crate::fetch::jql::{validate_project_key, validate_time_range, DEFAULT_TIME_RANGE};

/// The union of parameters any skill reads. Unknown keys are ignored so
/// callers can pass their whole invocation payload through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPayload {
    pub project_key: Option<String>,
    pub domain: Option<String>,
    pub time_range: Option<String>,
    pub label: Option<String>,
    pub assignee: Option<String>,
    pub context: Option<InvocationContext>,
}

/// Context the host attaches to an invocation, e.g. the project a panel is
/// open in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InvocationContext {
    #[serde(default)]
    pub jira: Option<JiraContext>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraContext {
    #[serde(default)]
    pub project_key: Option<String>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl SkillPayload {
    pub fn from_json(value: &Value) -> SkillResult<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value.clone())
            .map_err(|e| SkillError::invalid("payload", e.to_string()))
    }

    /// The `projectKey` parameter; the invocation context is not consulted.
    pub fn explicit_project_key(&self) -> SkillResult<&str> {
        let key = non_empty(self.project_key.as_ref())
            .ok_or(SkillError::MissingParameter("projectKey"))?;
        validate_project_key(key)
    }

    /// `projectKey`, falling back to the project in the invocation context.
    pub fn project_key(&self) -> SkillResult<&str> {
        let from_context = self
            .context
            .as_ref()
            .and_then(|c| c.jira.as_ref())
            .and_then(|j| non_empty(j.project_key.as_ref()));
        let key = non_empty(self.project_key.as_ref())
            .or(from_context)
            .ok_or(SkillError::MissingParameter("projectKey"))?;
        validate_project_key(key)
    }

    pub fn domain(&self) -> SkillResult<&str> {
        non_empty(self.domain.as_ref()).ok_or(SkillError::MissingParameter("domain"))
    }

    pub fn assignee(&self) -> SkillResult<&str> {
        non_empty(self.assignee.as_ref()).ok_or(SkillError::MissingParameter("assignee"))
    }

    pub fn time_range(&self) -> SkillResult<&str> {
        validate_time_range(non_empty(self.time_range.as_ref()).unwrap_or(DEFAULT_TIME_RANGE))
    }

    pub fn label(&self) -> Option<&str> {
        non_empty(self.label.as_ref())
    }
}
