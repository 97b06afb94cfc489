//! Checklist aggregation
//!
//! Counts and rates over a set of [`DocumentRecord`]s. Aggregation is total:
//! it never fails, even on empty or anomalous input.

use super::document::DocumentRecord;
use super::section::Checklist;
use crate::core::percent::round_half_up_percent;
use serde::{Deserialize, Serialize};

/// Aggregate counts for a checklist
///
/// For well-formed input `verified_count <= submitted_count <= total_count`,
/// `submitted_count + missing_count == total_count` and
/// `verified_count + pending_count == submitted_count`.
///
/// # Example
///
/// ```
/// use bidtrack_domain::checklist::{ChecklistSummary, DocumentRecord};
///
/// let docs = vec![
///     DocumentRecord::new("a", "A").verified(),
///     DocumentRecord::new("b", "B").submitted(),
///     DocumentRecord::new("c", "C"),
/// ];
/// let summary = ChecklistSummary::from_documents(&docs);
/// assert_eq!(summary.pending_count, 1);
/// assert_eq!(summary.missing_count, 1);
/// assert_eq!(summary.completion_rate, 67);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSummary {
    pub total_count: u32,
    /// Documents with `submitted == true`
    pub submitted_count: u32,
    /// Documents with `verified == true` (raw flag)
    pub verified_count: u32,
    /// `max(0, submitted - verified)`
    pub pending_count: u32,
    /// `total - submitted`
    pub missing_count: u32,
    /// `round(100 * submitted / total)`, 0 for an empty checklist
    pub completion_rate: u32,
    /// Documents with `required == true`
    pub required_count: u32,
    /// Required documents not yet submitted
    pub required_missing_count: u32,
}

impl ChecklistSummary {
    /// Aggregate a flat sequence of documents
    pub fn from_documents<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a DocumentRecord>,
    {
        let mut total = 0u32;
        let mut submitted = 0u32;
        let mut verified = 0u32;
        let mut required = 0u32;
        let mut required_missing = 0u32;

        for doc in documents {
            total += 1;
            if doc.submitted {
                submitted += 1;
            }
            if doc.verified {
                verified += 1;
            }
            if doc.required {
                required += 1;
                if !doc.submitted {
                    required_missing += 1;
                }
            }
        }

        Self {
            total_count: total,
            submitted_count: submitted,
            verified_count: verified,
            pending_count: submitted.saturating_sub(verified),
            missing_count: total - submitted,
            completion_rate: round_half_up_percent(u64::from(submitted), u64::from(total)),
            required_count: required,
            required_missing_count: required_missing,
        }
    }

    /// Aggregate every document of every section
    pub fn of(checklist: &Checklist) -> Self {
        Self::from_documents(checklist.documents())
    }

    /// Every document submitted and verified (an empty checklist is not complete)
    pub fn is_complete(&self) -> bool {
        self.total_count > 0 && self.verified_count == self.total_count && self.missing_count == 0
    }

    /// Whether every required document has been submitted
    pub fn required_satisfied(&self) -> bool {
        self.required_missing_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(total: usize, submitted: usize, verified: usize) -> Vec<DocumentRecord> {
        (0..total)
            .map(|i| {
                let doc = DocumentRecord::new(format!("doc-{i}"), format!("Document {i}"));
                if i < verified {
                    doc.verified()
                } else if i < submitted {
                    doc.submitted()
                } else {
                    doc
                }
            })
            .collect()
    }

    #[test]
    fn test_partial_checklist() {
        let summary = ChecklistSummary::from_documents(&docs(13, 11, 9));
        assert_eq!(summary.total_count, 13);
        assert_eq!(summary.submitted_count, 11);
        assert_eq!(summary.verified_count, 9);
        assert_eq!(summary.pending_count, 2);
        assert_eq!(summary.missing_count, 2);
        assert_eq!(summary.completion_rate, 85);
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_complete_checklist() {
        let summary = ChecklistSummary::from_documents(&docs(13, 13, 13));
        assert_eq!(summary.completion_rate, 100);
        assert_eq!(summary.pending_count, 0);
        assert_eq!(summary.missing_count, 0);
        assert!(summary.is_complete());
    }

    #[test]
    fn test_empty_checklist() {
        let summary = ChecklistSummary::of(&Checklist::default());
        assert_eq!(summary, ChecklistSummary::default());
        assert_eq!(summary.completion_rate, 0);
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_anomalous_single_document_clamps_pending() {
        let doc = DocumentRecord {
            verified: true,
            ..DocumentRecord::new("odd", "Odd")
        };
        let summary = ChecklistSummary::from_documents([&doc]);
        assert_eq!(summary.submitted_count, 0);
        assert_eq!(summary.verified_count, 1);
        assert_eq!(summary.pending_count, 0);
        assert_eq!(summary.missing_count, 1);
        assert_eq!(summary.completion_rate, 0);
    }

    #[test]
    fn test_invariants_hold_for_well_formed_input() {
        for total in 0..8 {
            for submitted in 0..=total {
                for verified in 0..=submitted {
                    let s = ChecklistSummary::from_documents(&docs(total, submitted, verified));
                    assert!(s.verified_count <= s.submitted_count);
                    assert!(s.submitted_count <= s.total_count);
                    assert_eq!(s.submitted_count + s.missing_count, s.total_count);
                    assert_eq!(s.verified_count + s.pending_count, s.submitted_count);
                    assert!(s.completion_rate <= 100);
                }
            }
        }
    }

    #[test]
    fn test_required_counts() {
        let documents = vec![
            DocumentRecord::new("a", "A").verified(),
            DocumentRecord::new("b", "B"),
            DocumentRecord::new("c", "C").optional(),
        ];
        let summary = ChecklistSummary::from_documents(&documents);
        assert_eq!(summary.required_count, 2);
        assert_eq!(summary.required_missing_count, 1);
        assert!(!summary.required_satisfied());
    }
}
