//! Document status classification
//!
//! Maps the `(submitted, verified)` flag pair to one of three display states.
//! The function is total over all four combinations:
//!
//! | submitted | verified | status   | anomaly |
//! |-----------|----------|----------|---------|
//! | false     | false    | Missing  | no      |
//! | true      | false    | Pending  | no      |
//! | true      | true     | Verified | no      |
//! | false     | true     | Pending  | yes     |
//!
//! The last row contradicts `verified ⇒ submitted`. It is never reported as
//! `Verified`, so completion is not overstated.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display state of a single checklist document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Not submitted by the bidder
    Missing,
    /// Submitted, awaiting reviewer verification
    Pending,
    /// Submitted and verified
    Verified,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Missing => "missing",
            DocumentStatus::Pending => "pending",
            DocumentStatus::Verified => "verified",
        }
    }

    /// Short label for display ("Missing", "Pending", "Verified")
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Missing => "Missing",
            DocumentStatus::Pending => "Pending",
            DocumentStatus::Verified => "Verified",
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, DocumentStatus::Verified)
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DocumentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "missing" => Ok(DocumentStatus::Missing),
            "pending" => Ok(DocumentStatus::Pending),
            "verified" => Ok(DocumentStatus::Verified),
            _ => Err(DomainError::invalid_status("document", s)),
        }
    }
}

/// Result of classifying a flag pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub status: DocumentStatus,
    /// Set when the input violated `verified ⇒ submitted`
    pub anomaly: bool,
}

/// Classify a `(submitted, verified)` pair.
///
/// Pure and deterministic. Callers that want the anomaly logged should go
/// through [`DocumentRecord::classification`](super::DocumentRecord::classification).
///
/// ```
/// use bidtrack_domain::checklist::{DocumentStatus, classify};
///
/// assert_eq!(classify(true, true).status, DocumentStatus::Verified);
/// let odd = classify(false, true);
/// assert_eq!(odd.status, DocumentStatus::Pending);
/// assert!(odd.anomaly);
/// ```
pub fn classify(submitted: bool, verified: bool) -> Classification {
    let (status, anomaly) = match (submitted, verified) {
        (false, false) => (DocumentStatus::Missing, false),
        (true, false) => (DocumentStatus::Pending, false),
        (true, true) => (DocumentStatus::Verified, false),
        (false, true) => (DocumentStatus::Pending, true),
    };
    Classification { status, anomaly }
}
