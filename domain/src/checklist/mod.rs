//! Bid document checklists
//!
//! A project's checklist is an ordered list of sections, each holding
//! [`DocumentRecord`]s. This module owns the deterministic rules applied to it:
//!
//! - **Aggregation** ([`ChecklistSummary`]): submitted / verified / pending /
//!   missing counts and the completion rate
//! - **Classification** ([`classify`]): `Missing` / `Pending` / `Verified`
//!   per document
//! - **Validation** ([`validate`]): fail-soft anomaly reporting
//!
//! ```text
//! Checklist ─┬─ ChecklistSection ─┬─ DocumentRecord ──▶ classify() ──▶ DocumentStatus
//!            │                    └─ DocumentRecord
//!            └─ ChecklistSection ...
//!      │
//!      ├──▶ ChecklistSummary::of()   (counts, completion rate)
//!      └──▶ validate()               (Vec<ChecklistAnomaly>)
//! ```

pub mod document;
pub mod section;
pub mod selection;
pub mod status;
pub mod summary;
pub mod validation;

pub use document::DocumentRecord;
pub use section::{Checklist, ChecklistSection};
pub use selection::ChecklistSelection;
pub use status::{Classification, DocumentStatus, classify};
pub use summary::ChecklistSummary;
pub use validation::{AnomalyCode, ChecklistAnomaly, validate};
