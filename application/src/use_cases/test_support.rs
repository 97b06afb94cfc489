//! In-memory repository shared by use case tests

use crate::ports::repository::{ProcurementRepository, RepositoryError};
use bidtrack_domain::{
    BidOutcome, BidRecord, Checklist, ChecklistSection, DocumentRecord, EntityWinRate,
    MonthlyPerformance, ProcurementEntity, Project, ProjectStatus, ProjectSummary,
    TemplateRequirement, TemplateStatus,
};
use chrono::NaiveDate;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[derive(Default)]
pub struct MemoryRepository {
    pub entities: Vec<ProcurementEntity>,
    pub projects: Vec<Project>,
    pub checklists: Vec<(String, Checklist)>,
    pub template: Vec<TemplateRequirement>,
    pub bids: Vec<BidRecord>,
    pub win_rates: Vec<EntityWinRate>,
    pub monthly: Vec<MonthlyPerformance>,
}

impl MemoryRepository {
    /// One entity (DOH), two projects, one 4-document checklist, three bids
    pub fn sample() -> Self {
        let doh = ProcurementEntity {
            id: "doh".to_string(),
            name: "Department of Health".to_string(),
            acronym: "DOH".to_string(),
            description: "Government health agency procurement".to_string(),
            template_version: Some("v2.1".to_string()),
            template_status: TemplateStatus::Updated,
            last_updated: date(2024, 1, 15),
            active_projects: 12,
            completed_bids: 8,
        };
        let dpwh = ProcurementEntity {
            id: "dpwh".to_string(),
            name: "Department of Public Works and Highways".to_string(),
            acronym: "DPWH".to_string(),
            description: String::new(),
            template_version: None,
            template_status: TemplateStatus::NeedsUpdate,
            last_updated: date(2023, 12, 20),
            active_projects: 8,
            completed_bids: 22,
        };

        let projects = vec![
            Project {
                id: "proj-001".to_string(),
                entity_id: "doh".to_string(),
                name: "Medical Equipment Procurement 2024".to_string(),
                reference: "DOH-2024-ME-001".to_string(),
                status: ProjectStatus::Active,
                deadline: date(2024, 2, 15),
                description: String::new(),
                progress: ProjectSummary::new(3, 4).unwrap(),
            },
            Project {
                id: "proj-002".to_string(),
                entity_id: "doh".to_string(),
                name: "Hospital Supplies Batch 1".to_string(),
                reference: "DOH-2024-HS-002".to_string(),
                status: ProjectStatus::Completed,
                deadline: date(2024, 1, 20),
                description: String::new(),
                progress: ProjectSummary::new(13, 13).unwrap(),
            },
        ];

        let checklist = Checklist::new(vec![
            ChecklistSection::new("Technical Component Envelope")
                .with_subcategory("Legal Documents")
                .with_document(
                    DocumentRecord::new("philgeps-cert", "Valid PhilGEPs Certificate")
                        .verified()
                        .with_notes("Certificate valid until 2024-12-31"),
                )
                .with_document(
                    DocumentRecord::new("slcc-statement", "Statement of SLCC").submitted(),
                ),
            ChecklistSection::new("Financial Component Envelope")
                .with_document(DocumentRecord::new("financial-bid", "Financial Bid Form"))
                .with_document(DocumentRecord::new("price-schedule", "Price Schedule")),
        ]);

        let bid = |id: &str, entity: &str, day: u32, value: i64, status: BidOutcome| BidRecord {
            id: id.to_string(),
            entity: entity.to_string(),
            project: format!("{entity} project"),
            submission_date: date(2024, 1, day),
            bid_value: value,
            status,
            margin: None,
            award_date: None,
        };

        Self {
            entities: vec![doh, dpwh],
            projects,
            checklists: vec![("proj-001".to_string(), checklist)],
            template: vec![TemplateRequirement {
                category: "Technical Component Envelope".to_string(),
                subcategory: Some("Legal Documents".to_string()),
                name: "Valid PhilGEPs Certificate".to_string(),
                required: true,
                format: "PDF".to_string(),
            }],
            bids: vec![
                bid("BID-2024-003", "DPWH", 10, 250_000_000, BidOutcome::Pending),
                bid("BID-2024-001", "DOH", 15, 85_000_000, BidOutcome::Won),
                bid("BID-2024-002", "DOH", 12, 125_000_000, BidOutcome::Lost),
            ],
            win_rates: Vec::new(),
            monthly: Vec::new(),
        }
    }
}

impl ProcurementRepository for MemoryRepository {
    fn entities(&self) -> Result<Vec<ProcurementEntity>, RepositoryError> {
        Ok(self.entities.clone())
    }

    fn entity(&self, entity_id: &str) -> Result<ProcurementEntity, RepositoryError> {
        self.entities
            .iter()
            .find(|e| e.id.eq_ignore_ascii_case(entity_id))
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("entity", entity_id))
    }

    fn projects(&self, entity_id: &str) -> Result<Vec<Project>, RepositoryError> {
        let entity = self.entity(entity_id)?;
        Ok(self
            .projects
            .iter()
            .filter(|p| p.entity_id == entity.id)
            .cloned()
            .collect())
    }

    fn project(&self, entity_id: &str, project_id: &str) -> Result<Project, RepositoryError> {
        self.projects(entity_id)?
            .into_iter()
            .find(|p| p.id == project_id)
            .ok_or_else(|| RepositoryError::not_found("project", project_id))
    }

    fn checklist(&self, entity_id: &str, project_id: &str) -> Result<Checklist, RepositoryError> {
        self.project(entity_id, project_id)?;
        self.checklists
            .iter()
            .find(|(id, _)| id == project_id)
            .map(|(_, c)| c.clone())
            .ok_or_else(|| RepositoryError::not_found("checklist", project_id))
    }

    fn template(&self, entity_id: &str) -> Result<Vec<TemplateRequirement>, RepositoryError> {
        self.entity(entity_id)?;
        Ok(self.template.clone())
    }

    fn bids(&self) -> Result<Vec<BidRecord>, RepositoryError> {
        Ok(self.bids.clone())
    }

    fn win_rates(&self) -> Result<Vec<EntityWinRate>, RepositoryError> {
        Ok(self.win_rates.clone())
    }

    fn monthly_performance(&self) -> Result<Vec<MonthlyPerformance>, RepositoryError> {
        Ok(self.monthly.clone())
    }
}
