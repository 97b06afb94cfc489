//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Aggregation and classification never fail; these errors only come from
/// constructing values whose invariants the caller can violate directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid project summary: {submitted} submitted out of {total} documents")]
    InvalidProjectSummary { submitted: u32, total: u32 },

    #[error("Invalid {kind} status: {value}")]
    InvalidStatus { kind: &'static str, value: String },

    #[error("Unsupported currency: {0}")]
    UnknownCurrency(String),
}

impl DomainError {
    /// Shorthand for an unparseable status string
    pub fn invalid_status(kind: &'static str, value: impl Into<String>) -> Self {
        DomainError::InvalidStatus {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_summary_display() {
        let error = DomainError::InvalidProjectSummary {
            submitted: 14,
            total: 13,
        };
        assert_eq!(
            error.to_string(),
            "Invalid project summary: 14 submitted out of 13 documents"
        );
    }

    #[test]
    fn test_invalid_status_display() {
        let error = DomainError::invalid_status("project", "archived");
        assert_eq!(error.to_string(), "Invalid project status: archived");
    }
}
