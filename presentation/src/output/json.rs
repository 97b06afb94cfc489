//! JSON output
//!
//! Reports serialize as-is; amounts stay raw integers so consumers can apply
//! their own formatting.

use crate::output::formatter::ReportFormatter;
use bidtrack_application::{BidDashboard, ChecklistReview, EntityDirectory, EntityOverview};
use bidtrack_domain::{ChecklistAnomaly, ChecklistSummary};
use serde::Serialize;

/// Formats reports as pretty-printed JSON
pub struct JsonFormatter;

#[derive(Serialize)]
struct ValidationReport<'a> {
    entity_id: &'a str,
    project_id: &'a str,
    valid: bool,
    summary: &'a ChecklistSummary,
    anomalies: &'a [ChecklistAnomaly],
}

impl JsonFormatter {
    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl ReportFormatter for JsonFormatter {
    fn directory(&self, directory: &EntityDirectory) -> String {
        Self::to_json(directory)
    }

    fn overview(&self, overview: &EntityOverview) -> String {
        Self::to_json(overview)
    }

    fn review(&self, review: &ChecklistReview) -> String {
        Self::to_json(review)
    }

    fn validation(&self, review: &ChecklistReview) -> String {
        Self::to_json(&ValidationReport {
            entity_id: &review.entity_id,
            project_id: &review.project.id,
            valid: !review.has_warnings(),
            summary: &review.summary,
            anomalies: &review.anomalies,
        })
    }

    fn dashboard(&self, dashboard: &BidDashboard) -> String {
        Self::to_json(dashboard)
    }
}
