//! Entity Overview use case.
//!
//! Gathers one entity, its projects with their document progress, and its
//! document template.

use crate::config::ReportParams;
use crate::ports::repository::{ProcurementRepository, RepositoryError};
use bidtrack_domain::procurement::count_required;
use bidtrack_domain::{ProcurementEntity, Project, TemplateRequirement};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// A project row in the entity overview
#[derive(Debug, Clone, Serialize)]
pub struct ProjectOverview {
    pub project: Project,
    pub completion_rate: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_deadline: Option<i64>,
    pub overdue: bool,
}

/// Result of the entity overview
#[derive(Debug, Clone, Serialize)]
pub struct EntityOverview {
    pub entity: ProcurementEntity,
    pub projects: Vec<ProjectOverview>,
    pub template: Vec<TemplateRequirement>,
    pub required_documents: usize,
    pub optional_documents: usize,
}

pub struct EntityOverviewUseCase {
    repository: Arc<dyn ProcurementRepository>,
}

impl EntityOverviewUseCase {
    pub fn new(repository: Arc<dyn ProcurementRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(
        &self,
        entity_id: &str,
        params: &ReportParams,
    ) -> Result<EntityOverview, RepositoryError> {
        info!("Loading overview for entity {}", entity_id);

        let entity = self.repository.entity(entity_id)?;
        let template = self.repository.template(&entity.id)?;
        let (required_documents, optional_documents) = count_required(&template);

        let projects = self
            .repository
            .projects(&entity.id)?
            .into_iter()
            .map(|project| ProjectOverview {
                completion_rate: project.progress.completion_rate(),
                days_until_deadline: params.today.map(|t| project.days_until_deadline(t)),
                overdue: params.today.is_some_and(|t| project.is_overdue(t)),
                project,
            })
            .collect();

        Ok(EntityOverview {
            entity,
            projects,
            template,
            required_documents,
            optional_documents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MemoryRepository, date};

    fn use_case() -> EntityOverviewUseCase {
        EntityOverviewUseCase::new(Arc::new(MemoryRepository::sample()))
    }

    #[test]
    fn test_overview() {
        let overview = use_case().execute("DOH", &ReportParams::default()).unwrap();
        assert_eq!(overview.entity.acronym, "DOH");
        assert_eq!(overview.projects.len(), 2);
        assert_eq!(overview.projects[0].completion_rate, 75);
        assert_eq!(overview.projects[1].completion_rate, 100);
        assert_eq!(overview.required_documents, 1);
        assert_eq!(overview.optional_documents, 0);
        assert!(overview.projects[0].days_until_deadline.is_none());
    }

    #[test]
    fn test_overdue_flags() {
        let params = ReportParams::default().with_today(date(2024, 2, 20));
        let overview = use_case().execute("doh", &params).unwrap();
        // Active and past deadline
        assert!(overview.projects[0].overdue);
        assert_eq!(overview.projects[0].days_until_deadline, Some(-5));
        // Completed projects are never overdue
        assert!(!overview.projects[1].overdue);
    }

    #[test]
    fn test_unknown_entity() {
        let err = use_case()
            .execute("dost", &ReportParams::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
