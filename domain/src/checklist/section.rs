//! Checklist and its sections

use super::document::DocumentRecord;
use super::summary::ChecklistSummary;
use serde::{Deserialize, Serialize};

/// A labelled group of documents (e.g. "Technical Component Envelope")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSection {
    /// Grouping label
    pub category: String,
    /// Optional second-level label (e.g. "Legal Documents")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Documents in display order
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,
}

impl ChecklistSection {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            subcategory: None,
            documents: Vec::new(),
        }
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn with_document(mut self, document: DocumentRecord) -> Self {
        self.documents.push(document);
        self
    }

    /// Heading for display: "Category - Subcategory" or just the category
    pub fn title(&self) -> String {
        match &self.subcategory {
            Some(sub) => format!("{} - {}", self.category, sub),
            None => self.category.clone(),
        }
    }

    pub fn summary(&self) -> ChecklistSummary {
        ChecklistSummary::from_documents(&self.documents)
    }
}

/// The full document checklist of one project
///
/// Built once from the data source and not mutated while a view is shown.
/// Serializes as a plain array of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checklist {
    pub sections: Vec<ChecklistSection>,
}

impl Checklist {
    pub fn new(sections: Vec<ChecklistSection>) -> Self {
        Self { sections }
    }

    /// Wrap a flat document list in a single untitled section
    pub fn from_documents(documents: Vec<DocumentRecord>) -> Self {
        Self {
            sections: vec![ChecklistSection {
                category: String::new(),
                subcategory: None,
                documents,
            }],
        }
    }

    /// All documents across sections, in order
    pub fn documents(&self) -> impl Iterator<Item = &DocumentRecord> {
        self.sections.iter().flat_map(|s| s.documents.iter())
    }

    pub fn find(&self, id: &str) -> Option<&DocumentRecord> {
        self.documents().find(|d| d.id == id)
    }

    /// Number of documents (not sections)
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.documents.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> ChecklistSummary {
        ChecklistSummary::of(self)
    }

    /// Per-section summaries, paired with their section
    pub fn section_summaries(&self) -> Vec<(&ChecklistSection, ChecklistSummary)> {
        self.sections.iter().map(|s| (s, s.summary())).collect()
    }
}
