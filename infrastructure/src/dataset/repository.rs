//! [`ProcurementRepository`] over an in-memory [`Dataset`]

use super::error::DatasetError;
use super::model::Dataset;
use bidtrack_application::{ProcurementRepository, RepositoryError};
use bidtrack_domain::{
    BidRecord, Checklist, EntityWinRate, MonthlyPerformance, ProcurementEntity, Project,
    TemplateRequirement,
};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// DOH sample compiled into the binary
const SAMPLE_DATASET: &str = include_str!("sample.toml");

/// Where a dataset was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The built-in sample
    Sample,
    File(PathBuf),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Sample => write!(f, "built-in sample"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read-only repository backed by a fully loaded dataset
///
/// Cross references are checked once at load time, so lookups only fail
/// for ids the caller made up.
#[derive(Debug, Clone)]
pub struct DatasetRepository {
    dataset: Dataset,
    source: DataSource,
}

impl DatasetRepository {
    pub fn new(dataset: Dataset, source: DataSource) -> Result<Self, DatasetError> {
        check_references(&dataset)?;
        debug!(
            "Loaded dataset from {}: {} entities, {} projects, {} checklists, {} bids",
            source,
            dataset.entities.len(),
            dataset.projects.len(),
            dataset.checklists.len(),
            dataset.bids.len()
        );
        Ok(Self { dataset, source })
    }

    /// The built-in DOH sample
    pub fn sample() -> Result<Self, DatasetError> {
        Self::new(toml::from_str(SAMPLE_DATASET)?, DataSource::Sample)
    }

    /// Load a `.toml` or `.json` dataset file
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Reading dataset {}", path.display());
        let dataset: Dataset = match extension.as_str() {
            "toml" => toml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            _ => return Err(DatasetError::UnsupportedFormat { extension }),
        };
        Self::new(dataset, DataSource::File(path.to_path_buf()))
    }

    /// Load from the configured path, or the sample when none is given
    pub fn open(path: Option<&Path>) -> Result<Self, DatasetError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::sample(),
        }
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    fn find_entity(&self, entity_id: &str) -> Result<&ProcurementEntity, RepositoryError> {
        self.dataset
            .entities
            .iter()
            .find(|e| e.id.eq_ignore_ascii_case(entity_id))
            .ok_or_else(|| RepositoryError::not_found("entity", entity_id))
    }

    fn find_project(&self, entity_id: &str, project_id: &str) -> Result<&Project, RepositoryError> {
        let entity = self.find_entity(entity_id)?;
        self.dataset
            .projects
            .iter()
            .find(|p| p.id == project_id && p.entity_id.eq_ignore_ascii_case(&entity.id))
            .ok_or_else(|| RepositoryError::not_found("project", project_id))
    }
}

/// Reject duplicate ids and references to entities or projects that do not exist
fn check_references(dataset: &Dataset) -> Result<(), DatasetError> {
    let mut entity_ids = HashSet::new();
    for entity in &dataset.entities {
        if !entity_ids.insert(entity.id.to_ascii_lowercase()) {
            return Err(DatasetError::DuplicateId {
                kind: "entity",
                id: entity.id.clone(),
            });
        }
    }

    let mut project_keys = HashSet::new();
    for project in &dataset.projects {
        let entity = project.entity_id.to_ascii_lowercase();
        if !entity_ids.contains(&entity) {
            return Err(DatasetError::DanglingReference {
                kind: "project",
                id: project.id.clone(),
                target: "entity",
                reference: project.entity_id.clone(),
            });
        }
        if !project_keys.insert((entity, project.id.clone())) {
            return Err(DatasetError::DuplicateId {
                kind: "project",
                id: project.id.clone(),
            });
        }
    }

    for checklist in &dataset.checklists {
        let key = (
            checklist.entity_id.to_ascii_lowercase(),
            checklist.project_id.clone(),
        );
        if !project_keys.contains(&key) {
            return Err(DatasetError::DanglingReference {
                kind: "checklist",
                id: checklist.project_id.clone(),
                target: "project",
                reference: format!("{}/{}", checklist.entity_id, checklist.project_id),
            });
        }
    }

    for template in &dataset.templates {
        if !entity_ids.contains(&template.entity_id.to_ascii_lowercase()) {
            return Err(DatasetError::DanglingReference {
                kind: "template",
                id: template.entity_id.clone(),
                target: "entity",
                reference: template.entity_id.clone(),
            });
        }
    }

    Ok(())
}

impl ProcurementRepository for DatasetRepository {
    fn entities(&self) -> Result<Vec<ProcurementEntity>, RepositoryError> {
        Ok(self.dataset.entities.clone())
    }

    fn entity(&self, entity_id: &str) -> Result<ProcurementEntity, RepositoryError> {
        self.find_entity(entity_id).cloned()
    }

    fn projects(&self, entity_id: &str) -> Result<Vec<Project>, RepositoryError> {
        let entity = self.find_entity(entity_id)?;
        Ok(self
            .dataset
            .projects
            .iter()
            .filter(|p| p.entity_id.eq_ignore_ascii_case(&entity.id))
            .cloned()
            .collect())
    }

    fn project(&self, entity_id: &str, project_id: &str) -> Result<Project, RepositoryError> {
        self.find_project(entity_id, project_id).cloned()
    }

    fn checklist(&self, entity_id: &str, project_id: &str) -> Result<Checklist, RepositoryError> {
        let project = self.find_project(entity_id, project_id)?;
        self.dataset
            .checklists
            .iter()
            .find(|c| {
                c.project_id == project.id && c.entity_id.eq_ignore_ascii_case(&project.entity_id)
            })
            .map(|c| c.sections.clone())
            .ok_or_else(|| RepositoryError::not_found("checklist", project_id))
    }

    fn template(&self, entity_id: &str) -> Result<Vec<TemplateRequirement>, RepositoryError> {
        let entity = self.find_entity(entity_id)?;
        Ok(self
            .dataset
            .templates
            .iter()
            .find(|t| t.entity_id.eq_ignore_ascii_case(&entity.id))
            .map(|t| t.requirements.clone())
            .unwrap_or_default())
    }

    fn bids(&self) -> Result<Vec<BidRecord>, RepositoryError> {
        Ok(self.dataset.bids.clone())
    }

    fn win_rates(&self) -> Result<Vec<EntityWinRate>, RepositoryError> {
        Ok(self.dataset.win_rates.clone())
    }

    fn monthly_performance(&self) -> Result<Vec<MonthlyPerformance>, RepositoryError> {
        Ok(self.dataset.monthly.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidtrack_domain::{ChecklistSummary, DocumentStatus};
    use std::io::Write;

    fn sample() -> DatasetRepository {
        DatasetRepository::sample().unwrap()
    }

    #[test]
    fn test_sample_loads() {
        let repo = sample();
        assert_eq!(repo.source(), &DataSource::Sample);
        assert_eq!(repo.entities().unwrap().len(), 6);
        assert_eq!(repo.projects("doh").unwrap().len(), 3);
        assert_eq!(repo.bids().unwrap().len(), 3);
        assert_eq!(repo.win_rates().unwrap().len(), 6);
        assert_eq!(repo.monthly_performance().unwrap().len(), 6);
        assert_eq!(repo.template("doh").unwrap().len(), 13);
    }

    #[test]
    fn test_sample_checklist_summary() {
        let checklist = sample().checklist("doh", "proj-001").unwrap();
        let summary = ChecklistSummary::of(&checklist);

        assert_eq!(summary.total_count, 13);
        assert_eq!(summary.submitted_count, 10);
        assert_eq!(summary.verified_count, 9);
        assert_eq!(summary.pending_count, 1);
        assert_eq!(summary.missing_count, 3);
        assert_eq!(summary.completion_rate, 77);

        let slcc = checklist.find("slcc-statement").unwrap();
        assert_eq!(slcc.status(), DocumentStatus::Pending);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let repo = sample();
        assert_eq!(repo.entity("DOH").unwrap().acronym, "DOH");
        assert!(repo.project("Doh", "proj-002").is_ok());
    }

    #[test]
    fn test_unknown_ids() {
        let repo = sample();
        assert!(repo.entity("nope").unwrap_err().is_not_found());
        assert!(repo.project("doh", "proj-999").unwrap_err().is_not_found());
        assert!(repo.checklist("doh", "proj-002").unwrap_err().is_not_found());
        assert!(repo.template("dpwh").unwrap().is_empty());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{
                "entities": [{{"id": "dost", "name": "Department of Science and Technology",
                              "acronym": "DOST", "last_updated": "2024-01-08"}}],
                "projects": [{{"id": "p1", "entity_id": "dost", "name": "Lab Kits",
                              "reference": "DOST-1", "deadline": "2024-05-01",
                              "progress": {{"documents_submitted": 1, "total_documents": 2}}}}],
                "checklists": [{{"entity_id": "dost", "project_id": "p1", "sections": [
                    {{"category": "Legal", "documents": [
                        {{"id": "a", "name": "A", "submitted": true}},
                        {{"id": "b", "name": "B"}}
                    ]}}
                ]}}]
            }}"#
        )
        .unwrap();

        let repo = DatasetRepository::from_path(file.path()).unwrap();
        assert!(matches!(repo.source(), DataSource::File(_)));
        assert_eq!(repo.project("dost", "p1").unwrap().progress.completion_rate(), 50);
        assert_eq!(repo.checklist("dost", "p1").unwrap().len(), 2);
        assert!(repo.bids().unwrap().is_empty());
    }

    #[test]
    fn test_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        let err = DatasetRepository::from_path(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = DatasetRepository::from_path(Path::new("/nonexistent/data.toml")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_dangling_project_is_rejected() {
        let dataset: Dataset = toml::from_str(
            r#"
[[projects]]
id = "p1"
entity_id = "ghost"
name = "Orphan"
reference = "X-1"
deadline = "2024-01-01"
progress = { documents_submitted = 0, total_documents = 0 }
"#,
        )
        .unwrap();

        let err = DatasetRepository::new(dataset, DataSource::Sample).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::DanglingReference { kind: "project", .. }
        ));
    }

    #[test]
    fn test_duplicate_entity_is_rejected() {
        let mut dataset = sample().dataset().clone();
        let mut copy = dataset.entities[0].clone();
        copy.id = copy.id.to_uppercase();
        dataset.entities.push(copy);

        let err = DatasetRepository::new(dataset, DataSource::Sample).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateId { kind: "entity", .. }));
    }

    #[test]
    fn test_mismatched_stored_rate_fails_to_load() {
        let err = toml::from_str::<Dataset>(
            r#"
[[projects]]
id = "p1"
entity_id = "doh"
name = "Bad"
reference = "X-1"
deadline = "2024-01-01"
progress = { documents_submitted = 11, total_documents = 13, completion_rate = 90 }
"#,
        );
        assert!(err.is_err());
    }
}
