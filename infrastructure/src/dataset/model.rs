//! Serialized dataset layout
//!
//! The same structure is read from TOML and JSON; see `sample.toml` for a
//! complete example.

use bidtrack_domain::{
    BidRecord, Checklist, EntityWinRate, MonthlyPerformance, ProcurementEntity, Project,
    TemplateRequirement,
};
use serde::{Deserialize, Serialize};

/// Everything the reports read, as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub entities: Vec<ProcurementEntity>,
    pub projects: Vec<Project>,
    pub checklists: Vec<ProjectChecklist>,
    pub templates: Vec<EntityTemplate>,
    pub bids: Vec<BidRecord>,
    /// Reported per-entity win statistics; derived from `bids` when empty
    pub win_rates: Vec<EntityWinRate>,
    pub monthly: Vec<MonthlyPerformance>,
}

/// The checklist of one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectChecklist {
    pub entity_id: String,
    pub project_id: String,
    #[serde(default)]
    pub sections: Checklist,
}

/// The document template of one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTemplate {
    pub entity_id: String,
    #[serde(default)]
    pub requirements: Vec<TemplateRequirement>,
}
