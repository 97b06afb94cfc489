//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod data;
mod format;
mod output;

pub use data::FileDataConfig;
pub use format::FileFormatConfig;
pub use output::FileOutputConfig;

use bidtrack_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Currency and locale settings
    pub format: FileFormatConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Dataset location
    pub data: FileDataConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks currency, locale and fraction digits of `[format]`, then that
    /// a configured `[data]` path exists.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.format.to_money_format().1);
        issues.extend(self.data.validate());
        issues
    }
}
