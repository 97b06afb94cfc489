//! Procurement entities, projects, templates, and bids
//!
//! Statuses here (`ProjectStatus`, `TemplateStatus`, `BidOutcome`) are
//! supplied by the data source. Only document status is derived, in
//! [`crate::checklist`].

pub mod bid;
pub mod entity;
pub mod project;
pub mod template;

pub use bid::{BidOutcome, BidPortfolio, BidRecord, EntityWinRate, MonthlyPerformance, win_rate};
pub use entity::{EntityDirectoryTotals, ProcurementEntity, TemplateStatus};
pub use project::{Project, ProjectStatus, ProjectSummary};
pub use template::{TemplateRequirement, count_required};
