//! Session-scoped checkbox state
//!
//! The checklist view lets a reviewer tick documents while working through
//! them. That state belongs to one viewing session: it is keyed by document
//! id, discarded with the session, and never written back into the
//! authoritative `submitted` / `verified` flags.

use std::collections::BTreeMap;

/// Ticked documents for one viewing session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistSelection {
    checked: BTreeMap<String, bool>,
}

impl ChecklistSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a document's checkbox
    pub fn set(&mut self, document_id: impl Into<String>, checked: bool) {
        self.checked.insert(document_id.into(), checked);
    }

    /// Flip a document's checkbox, returning the new state
    pub fn toggle(&mut self, document_id: &str) -> bool {
        let entry = self.checked.entry(document_id.to_string()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// Unknown ids read as unchecked
    pub fn is_checked(&self, document_id: &str) -> bool {
        self.checked.get(document_id).copied().unwrap_or(false)
    }

    /// Ids currently checked, in id order
    pub fn checked_ids(&self) -> impl Iterator<Item = &str> {
        self.checked
            .iter()
            .filter(|(_, checked)| **checked)
            .map(|(id, _)| id.as_str())
    }

    pub fn checked_count(&self) -> usize {
        self.checked_ids().count()
    }

    pub fn clear(&mut self) {
        self.checked.clear();
    }
}
