//! Procurement entities (government offices running bids)

use crate::core::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an entity's document template is current
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateStatus {
    #[default]
    Updated,
    NeedsUpdate,
}

impl TemplateStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TemplateStatus::Updated => "Updated",
            TemplateStatus::NeedsUpdate => "Needs Update",
        }
    }

    pub fn needs_update(&self) -> bool {
        matches!(self, TemplateStatus::NeedsUpdate)
    }
}

impl fmt::Display for TemplateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateStatus::Updated => write!(f, "updated"),
            TemplateStatus::NeedsUpdate => write!(f, "needs-update"),
        }
    }
}

impl std::str::FromStr for TemplateStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "updated" => Ok(TemplateStatus::Updated),
            "needs-update" | "needs_update" => Ok(TemplateStatus::NeedsUpdate),
            _ => Err(DomainError::invalid_status("template", s)),
        }
    }
}

/// A government office that runs bidding processes (e.g. DOH)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcurementEntity {
    /// Short lowercase identifier used in lookups ("doh")
    pub id: String,
    pub name: String,
    pub acronym: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_version: Option<String>,
    #[serde(default)]
    pub template_status: TemplateStatus,
    pub last_updated: NaiveDate,
    /// Externally reported counters
    #[serde(default)]
    pub active_projects: u32,
    #[serde(default)]
    pub completed_bids: u32,
}

/// Totals shown above the entity directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDirectoryTotals {
    pub total_entities: usize,
    pub active_projects: u64,
    pub completed_bids: u64,
    pub needs_update: usize,
}

impl EntityDirectoryTotals {
    pub fn from_entities(entities: &[ProcurementEntity]) -> Self {
        Self {
            total_entities: entities.len(),
            active_projects: entities.iter().map(|e| u64::from(e.active_projects)).sum(),
            completed_bids: entities.iter().map(|e| u64::from(e.completed_bids)).sum(),
            needs_update: entities
                .iter()
                .filter(|e| e.template_status.needs_update())
                .count(),
        }
    }
}
