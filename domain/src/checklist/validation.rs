//! Fail-soft checklist validation
//!
//! Detects data anomalies in a [`Checklist`] without stopping aggregation.
//! The only invariant a document can break is `verified ⇒ submitted`; the
//! remaining codes describe structural oddities of the checklist itself.
//!
//! # Examples
//!
//! ```
//! use bidtrack_domain::checklist::{AnomalyCode, Checklist, DocumentRecord, validate};
//!
//! let odd = DocumentRecord { verified: true, ..DocumentRecord::new("nfcc", "NFCC") };
//! let anomalies = validate(&Checklist::from_documents(vec![odd]));
//! assert_eq!(anomalies.len(), 1);
//! assert_eq!(anomalies[0].code, AnomalyCode::VerifiedWithoutSubmission);
//! assert_eq!(anomalies[0].document_id.as_deref(), Some("nfcc"));
//! ```

use super::section::Checklist;
use crate::core::severity::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Identifies a specific anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyCode {
    /// `verified = true` on a document that was never submitted.
    VerifiedWithoutSubmission,
    /// Two documents share an identifier.
    DuplicateDocumentId,
    /// A document has an empty identifier.
    EmptyDocumentId,
    /// The checklist has no documents at all.
    EmptyChecklist,
    /// Stored project progress disagrees with the checklist it summarizes.
    SummaryMismatch,
}

impl AnomalyCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyCode::VerifiedWithoutSubmission => "verified_without_submission",
            AnomalyCode::DuplicateDocumentId => "duplicate_document_id",
            AnomalyCode::EmptyDocumentId => "empty_document_id",
            AnomalyCode::EmptyChecklist => "empty_checklist",
            AnomalyCode::SummaryMismatch => "summary_mismatch",
        }
    }
}

impl fmt::Display for AnomalyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A detected, non-fatal data anomaly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistAnomaly {
    pub severity: Severity,
    pub code: AnomalyCode,
    /// Offending document, when the anomaly concerns one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    pub message: String,
}

impl ChecklistAnomaly {
    pub fn warning(code: AnomalyCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            document_id: None,
            message: message.into(),
        }
    }

    pub fn info(code: AnomalyCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            ..Self::warning(code, message)
        }
    }

    pub fn for_document(mut self, id: impl Into<String>) -> Self {
        self.document_id = Some(id.into());
        self
    }
}

/// Validate a checklist, returning every anomaly found (possibly none).
pub fn validate(checklist: &Checklist) -> Vec<ChecklistAnomaly> {
    let mut anomalies = Vec::new();

    if checklist.is_empty() {
        anomalies.push(ChecklistAnomaly::info(
            AnomalyCode::EmptyChecklist,
            "checklist has no documents; completion rate is 0%",
        ));
        return anomalies;
    }

    let mut seen = HashSet::new();
    for doc in checklist.documents() {
        if doc.id.trim().is_empty() {
            anomalies.push(
                ChecklistAnomaly::warning(
                    AnomalyCode::EmptyDocumentId,
                    format!("document '{}' has an empty identifier", doc.name),
                )
                .for_document(doc.id.clone()),
            );
        } else if !seen.insert(doc.id.as_str()) {
            anomalies.push(
                ChecklistAnomaly::warning(
                    AnomalyCode::DuplicateDocumentId,
                    format!("document id '{}' appears more than once", doc.id),
                )
                .for_document(doc.id.clone()),
            );
        }

        if doc.is_anomalous() {
            anomalies.push(
                ChecklistAnomaly::warning(
                    AnomalyCode::VerifiedWithoutSubmission,
                    format!(
                        "'{}' is marked verified but was never submitted; counted as pending",
                        doc.name
                    ),
                )
                .for_document(doc.id.clone()),
            );
        }
    }

    anomalies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{ChecklistSection, DocumentRecord};

    #[test]
    fn test_well_formed_checklist_has_no_anomalies() {
        let checklist = Checklist::new(vec![
            ChecklistSection::new("Technical")
                .with_document(DocumentRecord::new("a", "A").verified())
                .with_document(DocumentRecord::new("b", "B").submitted())
                .with_document(DocumentRecord::new("c", "C")),
        ]);
        assert!(validate(&checklist).is_empty());
    }

    #[test]
    fn test_empty_checklist_is_info() {
        let anomalies = validate(&Checklist::default());
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].severity, Severity::Info);
        assert_eq!(anomalies[0].code, AnomalyCode::EmptyChecklist);
    }

    #[test]
    fn test_verified_without_submission() {
        let odd = DocumentRecord {
            verified: true,
            ..DocumentRecord::new("tech-specs", "Technical Specifications")
        };
        let anomalies = validate(&Checklist::from_documents(vec![odd]));
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].severity, Severity::Warning);
        assert_eq!(anomalies[0].document_id.as_deref(), Some("tech-specs"));
    }

    #[test]
    fn test_duplicate_ids_across_sections() {
        let checklist = Checklist::new(vec![
            ChecklistSection::new("One").with_document(DocumentRecord::new("dup", "First")),
            ChecklistSection::new("Two").with_document(DocumentRecord::new("dup", "Second")),
        ]);
        let anomalies = validate(&checklist);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].code, AnomalyCode::DuplicateDocumentId);
    }

    #[test]
    fn test_empty_id() {
        let checklist = Checklist::from_documents(vec![DocumentRecord::new(" ", "Blank")]);
        let anomalies = validate(&checklist);
        assert_eq!(anomalies[0].code, AnomalyCode::EmptyDocumentId);
    }

    #[test]
    fn test_code_serializes_snake_case() {
        let json = serde_json::to_string(&AnomalyCode::VerifiedWithoutSubmission).unwrap();
        assert_eq!(json, "\"verified_without_submission\"");
    }
}
