//! Document record: a single checklist entry

use super::status::{Classification, DocumentStatus, classify};
use serde::{Deserialize, Serialize};
use tracing::warn;

fn default_required() -> bool {
    true
}

/// A single document requirement in a bid checklist
///
/// `verified` implies `submitted`. Records that break this rule are still
/// representable because they arrive from external data; they classify as
/// [`DocumentStatus::Pending`] and are reported as anomalies.
///
/// # Example
///
/// ```
/// use bidtrack_domain::checklist::{DocumentRecord, DocumentStatus};
///
/// let doc = DocumentRecord::new("nfcc", "Net Financial Contracting Capacity (NFCC)")
///     .verified()
///     .with_notes("NFCC computation meets requirements");
/// assert_eq!(doc.status(), DocumentStatus::Verified);
///
/// let missing = DocumentRecord::new("price-schedule", "Price Schedule");
/// assert_eq!(missing.status(), DocumentStatus::Missing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Identifier, unique within a checklist
    pub id: String,
    /// Display label
    pub name: String,
    /// Whether absence counts against completion
    #[serde(default = "default_required")]
    pub required: bool,
    /// Whether the bidder has provided the document
    #[serde(default)]
    pub submitted: bool,
    /// Whether a reviewer confirmed the document
    #[serde(default)]
    pub verified: bool,
    /// Free-text reviewer notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DocumentRecord {
    /// Create a required, not yet submitted document
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            required: true,
            submitted: false,
            verified: false,
            notes: None,
        }
    }

    /// Mark as submitted (not verified)
    pub fn submitted(mut self) -> Self {
        self.submitted = true;
        self
    }

    /// Mark as submitted and verified
    pub fn verified(mut self) -> Self {
        self.submitted = true;
        self.verified = true;
        self
    }

    /// Mark as optional
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// True when the record claims verification without a submission
    pub fn is_anomalous(&self) -> bool {
        self.verified && !self.submitted
    }

    /// Classify this document, logging a warning for anomalous records
    pub fn classification(&self) -> Classification {
        let classification = classify(self.submitted, self.verified);
        if classification.anomaly {
            warn!(
                document_id = %self.id,
                "Document is marked verified but was never submitted; treating as pending"
            );
        }
        classification
    }

    /// Display status of this document
    pub fn status(&self) -> DocumentStatus {
        self.classification().status
    }
}
