//! Use cases (application services)
//!
//! Each use case reads from a [`ProcurementRepository`](crate::ports::repository::ProcurementRepository)
//! and applies the domain rules; none of them writes data back.

pub mod bid_dashboard;
pub mod entity_overview;
pub mod list_entities;
pub mod review_checklist;

#[cfg(test)]
pub(crate) mod test_support;
