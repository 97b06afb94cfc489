//! List Entities use case.
//!
//! Returns the entity directory and the totals shown above it.

use crate::ports::repository::{ProcurementRepository, RepositoryError};
use bidtrack_domain::{EntityDirectoryTotals, ProcurementEntity};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Entity directory with aggregate counters
#[derive(Debug, Clone, Serialize)]
pub struct EntityDirectory {
    pub entities: Vec<ProcurementEntity>,
    pub totals: EntityDirectoryTotals,
}

pub struct ListEntitiesUseCase {
    repository: Arc<dyn ProcurementRepository>,
}

impl ListEntitiesUseCase {
    pub fn new(repository: Arc<dyn ProcurementRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> Result<EntityDirectory, RepositoryError> {
        let entities = self.repository.entities()?;
        let totals = EntityDirectoryTotals::from_entities(&entities);
        debug!(
            "Loaded {} entities ({} need template updates)",
            totals.total_entities, totals.needs_update
        );
        Ok(EntityDirectory { entities, totals })
    }
}
