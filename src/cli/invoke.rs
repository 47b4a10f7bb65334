//! Invoke command: dispatch a skill by name

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

use crate::skills::{Skill, SkillPayload};

#[derive(Args)]
pub struct InvokeArgs {
    /// Skill name, e.g. checkDuplicates (see `jira-skills skills`)
    #[arg(value_name = "SKILL")]
    pub skill: String,

    /// Named parameters as a JSON object, e.g. '{"projectKey":"CAT"}'
    #[arg(long, value_name = "JSON")]
    pub payload: Option<String>,

    /// Read the JSON payload from a file
    #[arg(long, value_name = "FILE", conflicts_with = "payload")]
    pub payload_file: Option<PathBuf>,
}

impl InvokeArgs {
    pub fn into_request(self) -> Result<(Skill, SkillPayload)> {
        let skill: Skill = self.skill.parse()?;

        let raw = match (self.payload, self.payload_file) {
            (Some(inline), _) => inline,
            (None, Some(path)) => fs::read_to_string(&path)
                .with_context(|| format!("Failed reading payload file: {}", path.display()))?,
            (None, None) => return Ok((skill, SkillPayload::default())),
        };

        let value: Value = serde_json::from_str(&raw).context("Payload is not valid JSON")?;
        Ok((skill, SkillPayload::from_json(&value)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(skill: &str, payload: Option<&str>) -> InvokeArgs {
        InvokeArgs { skill: skill.into(), payload: payload.map(str::to_string), payload_file: None }
    }

    #[test]
    fn inline_payload_is_parsed() {
        let (skill, payload) = args("getStaleIssues", Some(r#"{"projectKey":"CAT"}"#))
            .into_request()
            .expect("parse");
        assert_eq!(skill, Skill::GetStaleIssues);
        assert_eq!(payload.project_key.as_deref(), Some("CAT"));
    }

    #[test]
    fn payload_file_is_read() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("payload.json");
        fs::write(&path, r#"{"projectKey":"CAT","assignee":"ann"}"#).expect("write");
        let invoke = InvokeArgs {
            skill: "getTaskPriorities".into(),
            payload: None,
            payload_file: Some(path),
        };
        let (_, payload) = invoke.into_request().expect("parse");
        assert_eq!(payload.assignee.as_deref(), Some("ann"));
    }

    #[test]
    fn unknown_skill_and_bad_json_are_errors() {
        assert!(args("dropTables", None).into_request().is_err());
        assert!(args("getIssues", Some("{not json")).into_request().is_err());
    }

    #[test]
    fn no_payload_means_empty_parameters() {
        let (_, payload) = args("getIssues", None).into_request().expect("parse");
        assert_eq!(payload, SkillPayload::default());
    }
}
