//! Application layer for bidtrack
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ReportParams;
pub use ports::repository::{ProcurementRepository, RepositoryError};
pub use use_cases::bid_dashboard::{BidDashboard, BidDashboardUseCase, WinRateSource};
pub use use_cases::entity_overview::{EntityOverview, EntityOverviewUseCase, ProjectOverview};
pub use use_cases::list_entities::{EntityDirectory, ListEntitiesUseCase};
pub use use_cases::review_checklist::{
    ChecklistReview, DocumentReview, ReviewChecklistInput, ReviewChecklistUseCase, ReviewError,
    SectionReview,
};
