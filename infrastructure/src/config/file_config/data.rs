//! Data source configuration from TOML (`[data]` section)

use bidtrack_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw data source settings from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDataConfig {
    /// Dataset file (`.toml` or `.json`); the built-in sample when unset
    pub path: Option<PathBuf>,
}

impl FileDataConfig {
    pub fn validate(&self) -> Option<ConfigIssue> {
        let path = self.path.as_ref()?;
        if path.exists() {
            return None;
        }
        Some(ConfigIssue::warning(
            ConfigIssueCode::MissingDataFile {
                path: path.display().to_string(),
            },
            format!("data.path: {} does not exist", path.display()),
        ))
    }
}
