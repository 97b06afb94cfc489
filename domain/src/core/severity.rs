//! Issue severity shared by checklist anomalies and configuration issues

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level of a reported issue.
///
/// Nothing in the domain is fatal: issues are surfaced next to results,
/// never instead of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational: worth showing, nothing is wrong with the data.
    Info,
    /// The data contradicts an invariant; results were computed anyway.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
