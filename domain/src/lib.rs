//! Domain layer for bidtrack
//!
//! This crate contains the core rules for tracking government-procurement bid
//! submissions. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Checklist
//!
//! Every project carries a document checklist. Each document is `required`
//! or optional, and moves from *missing* → *pending* (submitted) →
//! *verified* (confirmed by a reviewer).
//!
//! - **Aggregation**: [`ChecklistSummary`] counts submitted, verified,
//!   pending and missing documents and derives the completion rate
//! - **Classification**: [`classify`] maps the `(submitted, verified)` pair
//!   to a [`DocumentStatus`]
//! - **Validation**: [`checklist::validate`] reports anomalies without
//!   blocking aggregation
//!
//! ## Procurement
//!
//! Entities (government offices), their projects and templates, and bid
//! outcomes with win-rate statistics.
//!
//! ## Formatting
//!
//! Peso amounts and percentages, see [`format`].

pub mod checklist;
pub mod config;
pub mod core;
pub mod format;
pub mod procurement;

// Re-export commonly used types
pub use checklist::{
    AnomalyCode, Checklist, ChecklistAnomaly, ChecklistSection, ChecklistSelection,
    ChecklistSummary, Classification, DocumentRecord, DocumentStatus, classify,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat};
pub use core::{
    error::DomainError, percent::round_half_up_percent, severity::Severity,
};
pub use format::{MoneyFormat, format_margin, format_percent, format_php};
pub use procurement::{
    BidOutcome, BidPortfolio, BidRecord, EntityDirectoryTotals, EntityWinRate,
    MonthlyPerformance, ProcurementEntity, Project, ProjectStatus, ProjectSummary,
    TemplateRequirement, TemplateStatus,
};
