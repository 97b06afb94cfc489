//! Output configuration from TOML (`[output]` section)

use bidtrack_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format; `None` leaves the choice to the command line
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// Print per-document notes in checklist reviews
    pub show_notes: bool,
    /// Number of bids listed under "recent" in the dashboard
    pub recent_limit: usize,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            show_notes: true,
            recent_limit: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let toml_str = r#"
[output]
format = "json"
show_notes = false
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.show_notes);
        assert!(config.output.color);
        assert_eq!(config.output.recent_limit, 10);
    }
}
