//! Presentation-level configuration
//!
//! Resolved output settings after merging the config file and CLI flags.

use crate::output::console::ConsoleFormatter;
use crate::output::formatter::ReportFormatter;
use crate::output::json::JsonFormatter;
use bidtrack_domain::{MoneyFormat, OutputFormat};
use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    // ==================== Builder Methods ====================

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Disable ANSI colors process-wide when color is off or output is JSON
    pub fn apply_color(&self) {
        if !self.color || self.format == OutputFormat::Json {
            colored::control::set_override(false);
        }
    }

    pub fn formatter(&self, money: MoneyFormat) -> Box<dyn ReportFormatter> {
        match self.format {
            OutputFormat::Text => Box::new(ConsoleFormatter::new(money)),
            OutputFormat::Json => Box::new(JsonFormatter),
        }
    }
}
