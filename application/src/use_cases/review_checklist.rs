//! Review Checklist use case.
//!
//! Loads a project's checklist and runs the domain rules over it:
//! aggregation, per-document classification and fail-soft validation.
//! Anomalies never abort the review; they are logged and returned next to
//! the results.

use crate::config::ReportParams;
use crate::ports::repository::{ProcurementRepository, RepositoryError};
use bidtrack_domain::checklist::validate;
use bidtrack_domain::{
    AnomalyCode, Checklist, ChecklistAnomaly, ChecklistSection, ChecklistSummary, DocumentRecord,
    DocumentStatus, Project, ProjectSummary, Severity,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while reviewing a checklist.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Input for the [`ReviewChecklistUseCase`].
#[derive(Debug, Clone)]
pub struct ReviewChecklistInput {
    pub entity_id: String,
    pub project_id: String,
    pub params: ReportParams,
}

impl ReviewChecklistInput {
    pub fn new(entity_id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            project_id: project_id.into(),
            params: ReportParams::default(),
        }
    }

    pub fn with_params(mut self, params: ReportParams) -> Self {
        self.params = params;
        self
    }
}

/// One document with its derived status
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReview {
    pub id: String,
    pub name: String,
    pub required: bool,
    pub status: DocumentStatus,
    /// Set when the record broke `verified ⇒ submitted`
    pub anomaly: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DocumentReview {
    fn from_record(doc: &DocumentRecord, show_notes: bool) -> Self {
        let classification = doc.classification();
        Self {
            id: doc.id.clone(),
            name: doc.name.clone(),
            required: doc.required,
            status: classification.status,
            anomaly: classification.anomaly,
            notes: if show_notes { doc.notes.clone() } else { None },
        }
    }
}

/// A checklist section with its own aggregate
#[derive(Debug, Clone, Serialize)]
pub struct SectionReview {
    pub title: String,
    pub summary: ChecklistSummary,
    pub documents: Vec<DocumentReview>,
}

impl SectionReview {
    fn from_section(section: &ChecklistSection, show_notes: bool) -> Self {
        Self {
            title: section.title(),
            summary: section.summary(),
            documents: section
                .documents
                .iter()
                .map(|d| DocumentReview::from_record(d, show_notes))
                .collect(),
        }
    }
}

/// Result of reviewing one project's checklist
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistReview {
    pub entity_id: String,
    pub project: Project,
    /// Aggregate over the whole checklist
    pub summary: ChecklistSummary,
    /// Progress derived from the checklist (authoritative over `project.progress`)
    pub derived_progress: ProjectSummary,
    pub sections: Vec<SectionReview>,
    pub anomalies: Vec<ChecklistAnomaly>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_deadline: Option<i64>,
}

impl ChecklistReview {
    pub fn has_warnings(&self) -> bool {
        self.anomalies
            .iter()
            .any(|a| a.severity == Severity::Warning)
    }

    /// Documents in order across all sections
    pub fn documents(&self) -> impl Iterator<Item = &DocumentReview> {
        self.sections.iter().flat_map(|s| s.documents.iter())
    }
}

/// Use case for reviewing a project's document checklist.
///
/// 1. Load the project and its checklist from the repository
/// 2. Aggregate counts and classify every document
/// 3. Validate the checklist and compare it with the stored progress
pub struct ReviewChecklistUseCase {
    repository: Arc<dyn ProcurementRepository>,
}

impl ReviewChecklistUseCase {
    pub fn new(repository: Arc<dyn ProcurementRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(&self, input: ReviewChecklistInput) -> Result<ChecklistReview, ReviewError> {
        info!(
            "Reviewing checklist for {}/{}",
            input.entity_id, input.project_id
        );

        let project = self
            .repository
            .project(&input.entity_id, &input.project_id)?;
        let checklist = self
            .repository
            .checklist(&input.entity_id, &input.project_id)?;

        let review = Self::review(&input.entity_id, project, &checklist, &input.params);

        for anomaly in &review.anomalies {
            warn!(
                code = %anomaly.code,
                document_id = anomaly.document_id.as_deref().unwrap_or("-"),
                "{}",
                anomaly.message
            );
        }
        debug!(
            "Checklist {}: {}/{} submitted, {} verified, {}% complete",
            review.project.id,
            review.summary.submitted_count,
            review.summary.total_count,
            review.summary.verified_count,
            review.summary.completion_rate
        );

        Ok(review)
    }

    /// Run the review over already-loaded values (no repository access)
    pub fn review(
        entity_id: &str,
        project: Project,
        checklist: &Checklist,
        params: &ReportParams,
    ) -> ChecklistReview {
        let summary = checklist.summary();
        let derived_progress = ProjectSummary::from_checklist(&summary);

        let mut anomalies = validate(checklist);
        if project.progress != derived_progress {
            anomalies.push(ChecklistAnomaly::warning(
                AnomalyCode::SummaryMismatch,
                format!(
                    "stored progress {}/{} ({}%) disagrees with checklist {}/{} ({}%)",
                    project.progress.documents_submitted(),
                    project.progress.total_documents(),
                    project.progress.completion_rate(),
                    derived_progress.documents_submitted(),
                    derived_progress.total_documents(),
                    derived_progress.completion_rate(),
                ),
            ));
        }

        let sections = checklist
            .sections
            .iter()
            .map(|s| SectionReview::from_section(s, params.show_notes))
            .collect();

        let days_until_deadline = params.today.map(|today| project.days_until_deadline(today));

        ChecklistReview {
            entity_id: entity_id.to_string(),
            project,
            summary,
            derived_progress,
            sections,
            anomalies,
            days_until_deadline,
        }
    }
}
