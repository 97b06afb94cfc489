//! Configuration issues
//!
//! Config validation collects every problem it finds instead of stopping at
//! the first one. Issues carry a [`Severity`]; none of them prevents a report
//! from being produced, the offending value falls back to its default.

use crate::core::severity::Severity;

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// Locale whose separators the formatter does not reproduce.
    UnsupportedLocale { locale: String },
    /// Currency code that is not three ASCII letters.
    InvalidCurrency { currency: String },
    /// More fraction digits than the formatter supports.
    FractionDigitsOutOfRange { value: u8, max: u8 },
    /// Configured data file does not exist.
    MissingDataFile { path: String },
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_constructor() {
        let issue = ConfigIssue::warning(
            ConfigIssueCode::UnsupportedLocale {
                locale: "fr-FR".to_string(),
            },
            "format.locale: unsupported",
        );
        assert_eq!(issue.severity, Severity::Warning);
        assert!(matches!(
            issue.code,
            ConfigIssueCode::UnsupportedLocale { .. }
        ));
    }
}
