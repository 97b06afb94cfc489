//! Procurement projects and their stored progress

use crate::checklist::ChecklistSummary;
use crate::core::error::DomainError;
use crate::core::percent::round_half_up_percent;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a project, supplied by the data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Active,
    Completed,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "Draft",
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectStatus::Draft => write!(f, "draft"),
            ProjectStatus::Active => write!(f, "active"),
            ProjectStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(ProjectStatus::Draft),
            "active" => Ok(ProjectStatus::Active),
            "completed" | "complete" => Ok(ProjectStatus::Completed),
            _ => Err(DomainError::invalid_status("project", s)),
        }
    }
}

/// Wire shape of [`ProjectSummary`]; `completion_rate` is optional on input
/// and checked against the derived value when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawProjectSummary {
    documents_submitted: u32,
    total_documents: u32,
    #[serde(default)]
    completion_rate: Option<u32>,
}

/// Document progress of a project
///
/// `completion_rate` is always `round(100 * submitted / total)`; it cannot be
/// set independently.
///
/// ```
/// use bidtrack_domain::procurement::ProjectSummary;
///
/// let summary = ProjectSummary::new(11, 13).unwrap();
/// assert_eq!(summary.completion_rate(), 85);
/// assert!(ProjectSummary::new(14, 13).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProjectSummary", into = "RawProjectSummary")]
pub struct ProjectSummary {
    documents_submitted: u32,
    total_documents: u32,
}

impl ProjectSummary {
    pub fn new(documents_submitted: u32, total_documents: u32) -> Result<Self, DomainError> {
        if documents_submitted > total_documents {
            return Err(DomainError::InvalidProjectSummary {
                submitted: documents_submitted,
                total: total_documents,
            });
        }
        Ok(Self {
            documents_submitted,
            total_documents,
        })
    }

    /// Progress derived from a checklist aggregate
    pub fn from_checklist(summary: &ChecklistSummary) -> Self {
        Self {
            documents_submitted: summary.submitted_count,
            total_documents: summary.total_count,
        }
    }

    pub fn documents_submitted(&self) -> u32 {
        self.documents_submitted
    }

    pub fn total_documents(&self) -> u32 {
        self.total_documents
    }

    pub fn completion_rate(&self) -> u32 {
        round_half_up_percent(
            u64::from(self.documents_submitted),
            u64::from(self.total_documents),
        )
    }
}

impl TryFrom<RawProjectSummary> for ProjectSummary {
    type Error = DomainError;

    fn try_from(raw: RawProjectSummary) -> Result<Self, Self::Error> {
        let summary = Self::new(raw.documents_submitted, raw.total_documents)?;
        match raw.completion_rate {
            Some(rate) if rate != summary.completion_rate() => {
                Err(DomainError::InvalidProjectSummary {
                    submitted: raw.documents_submitted,
                    total: raw.total_documents,
                })
            }
            _ => Ok(summary),
        }
    }
}

impl From<ProjectSummary> for RawProjectSummary {
    fn from(summary: ProjectSummary) -> Self {
        Self {
            documents_submitted: summary.documents_submitted,
            total_documents: summary.total_documents,
            completion_rate: Some(summary.completion_rate()),
        }
    }
}

/// A single procurement opportunity within an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    /// Owning entity id
    pub entity_id: String,
    pub name: String,
    /// Entity-issued reference number ("DOH-2024-ME-001")
    pub reference: String,
    #[serde(default)]
    pub status: ProjectStatus,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub description: String,
    /// Progress as reported by the data source
    pub progress: ProjectSummary,
}

impl Project {
    /// Days from `today` until the deadline; negative once it has passed
    pub fn days_until_deadline(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != ProjectStatus::Completed && self.days_until_deadline(today) < 0
    }
}
