//! Output formatter trait

use bidtrack_application::{BidDashboard, ChecklistReview, EntityDirectory, EntityOverview};

/// Trait for rendering report results
pub trait ReportFormatter {
    /// Entity directory with totals
    fn directory(&self, directory: &EntityDirectory) -> String;

    /// One entity with its projects and template
    fn overview(&self, overview: &EntityOverview) -> String;

    /// Full checklist review of a project
    fn review(&self, review: &ChecklistReview) -> String;

    /// Anomalies only (for `validate`)
    fn validation(&self, review: &ChecklistReview) -> String;

    /// Bid dashboard
    fn dashboard(&self, dashboard: &BidDashboard) -> String;
}
