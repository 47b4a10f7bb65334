//! Config file loading

use crate::domain::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Section names accepted when settings live under a table of a shared file.
const SECTION_NAMES: &[&str] = &["jira-skills", "jira"];

const CANDIDATES: &[&str] = &[
    "jira-skills.toml",
    ".jira-skills.toml",
    "jira-skills.yml",
    ".jira-skills.yml",
    "jira-skills.yaml",
    ".jira-skills.yaml",
];

/// Load config from `config_path`, or from the first candidate file found in
/// `dir`. A file the user named must parse; a discovered one that doesn't is
/// skipped with a warning.
pub fn load_config(dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(dir),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let parsed = read_config(&config_file);
    match parsed {
        Ok(cfg) => {
            tracing::debug!("loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if !config_path_provided => {
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

fn read_config(config_file: &Path) -> Result<Config> {
    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "toml" => parse_toml_config(&content, config_file),
        "yaml" | "yml" => parse_yaml_config(&content, config_file),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    }
}

/// Parse TOML config, supporting a nested `[jira-skills]` or `[jira]` table.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = SECTION_NAMES
        .iter()
        .find_map(|name| raw.get(name).cloned())
        .unwrap_or(raw);

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting a nested `jira-skills:` or `jira:` mapping.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    // An empty file parses as null.
    if raw.is_null() {
        return Ok(Config::default());
    }

    let config_val = SECTION_NAMES
        .iter()
        .find_map(|name| raw.get(*name).cloned())
        .unwrap_or(raw);

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(dir: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|candidate| dir.join(candidate)).find(|path| path.exists())
}
