//! Procurement data port
//!
//! Defines the [`ProcurementRepository`] trait through which use cases read
//! entities, projects, checklists and bids. The data is read-only from the
//! application's point of view: values are loaded once per request and
//! passed into the domain rules explicitly.

use bidtrack_domain::{
    BidRecord, Checklist, EntityWinRate, MonthlyPerformance, ProcurementEntity, Project,
    TemplateRequirement,
};
use thiserror::Error;

/// Errors returned by repository adapters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Invalid data: {0}")]
    Invalid(String),
}

impl RepositoryError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        RepositoryError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

/// Read access to procurement data
///
/// Implementations live in the infrastructure layer (dataset files, the
/// built-in sample) and in tests.
pub trait ProcurementRepository: Send + Sync {
    /// All entities in directory order
    fn entities(&self) -> Result<Vec<ProcurementEntity>, RepositoryError>;

    /// One entity by id (case-insensitive)
    fn entity(&self, entity_id: &str) -> Result<ProcurementEntity, RepositoryError>;

    /// Projects of an entity; errors if the entity is unknown
    fn projects(&self, entity_id: &str) -> Result<Vec<Project>, RepositoryError>;

    fn project(&self, entity_id: &str, project_id: &str) -> Result<Project, RepositoryError>;

    /// The document checklist of a project
    fn checklist(&self, entity_id: &str, project_id: &str) -> Result<Checklist, RepositoryError>;

    /// The entity's document template; empty when none is recorded
    fn template(&self, entity_id: &str) -> Result<Vec<TemplateRequirement>, RepositoryError>;

    /// Submitted bids across all entities
    fn bids(&self) -> Result<Vec<BidRecord>, RepositoryError>;

    /// Externally reported win statistics per entity.
    ///
    /// Returns an empty list when the source has none; callers then derive
    /// rates from [`bids`](Self::bids).
    fn win_rates(&self) -> Result<Vec<EntityWinRate>, RepositoryError> {
        Ok(Vec::new())
    }

    /// Submitted vs won bids per month, oldest first
    fn monthly_performance(&self) -> Result<Vec<MonthlyPerformance>, RepositoryError> {
        Ok(Vec::new())
    }
}
