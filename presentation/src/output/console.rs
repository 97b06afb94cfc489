//! Console output formatter for bidtrack reports

use crate::output::formatter::ReportFormatter;
use bidtrack_application::{
    BidDashboard, ChecklistReview, DocumentReview, EntityDirectory, EntityOverview,
    WinRateSource,
};
use bidtrack_domain::format::progress_bar;
use bidtrack_domain::{
    BidOutcome, ChecklistAnomaly, ChecklistSummary, DocumentStatus, MoneyFormat, ProjectStatus,
    Severity, TemplateStatus, format_margin, format_percent,
};
use colored::{ColoredString, Colorize};

const BAR_WIDTH: usize = 20;

/// Formats reports for console display
pub struct ConsoleFormatter {
    money: MoneyFormat,
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(MoneyFormat::default())
    }
}

impl ConsoleFormatter {
    pub fn new(money: MoneyFormat) -> Self {
        Self { money }
    }

    /// Format the full checklist review
    pub fn format_review(&self, review: &ChecklistReview) -> String {
        let mut output = String::new();
        let project = &review.project;

        output.push_str(&Self::header(&project.name));
        output.push('\n');

        output.push_str(&Self::field("Entity:", &review.entity_id.to_uppercase()));
        output.push_str(&Self::field("Reference:", &project.reference));
        output.push_str(&Self::field(
            "Status:",
            &Self::project_status(project.status).to_string(),
        ));
        output.push_str(&Self::field(
            "Deadline:",
            &Self::deadline(&project.deadline.to_string(), review.days_until_deadline),
        ));
        if !project.description.is_empty() {
            output.push_str(&format!("\n{}\n", project.description.dimmed()));
        }

        output.push('\n');
        output.push_str(&Self::summary_block(&review.summary));

        for section in &review.sections {
            output.push_str(&Self::section_header(&format!(
                "{}  ({}/{} submitted)",
                section.title, section.summary.submitted_count, section.summary.total_count
            )));
            for doc in &section.documents {
                output.push_str(&Self::document_line(doc));
            }
        }

        if !review.anomalies.is_empty() {
            output.push_str(&Self::section_header("Anomalies"));
            for anomaly in &review.anomalies {
                output.push_str(&Self::anomaly_line(anomaly));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the anomaly report for `validate`
    pub fn format_validation(&self, review: &ChecklistReview) -> String {
        let mut output = format!(
            "{} {}/{}\n",
            "Validating".cyan().bold(),
            review.entity_id,
            review.project.id
        );

        if review.anomalies.is_empty() {
            output.push_str(&format!(
                "{} {} documents, no anomalies\n",
                "OK".green().bold(),
                review.summary.total_count
            ));
            return output;
        }

        for anomaly in &review.anomalies {
            output.push_str(&Self::anomaly_line(anomaly));
        }

        let warnings = review
            .anomalies
            .iter()
            .filter(|a| a.severity == Severity::Warning)
            .count();
        let verdict = if warnings > 0 {
            format!("{warnings} warning(s)").red().bold()
        } else {
            "OK".green().bold()
        };
        output.push_str(&format!(
            "\n{} ({} anomalies total)\n",
            verdict,
            review.anomalies.len()
        ));
        output
    }

    /// Format the entity directory
    pub fn format_directory(&self, directory: &EntityDirectory) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Procurement Entities"));
        output.push('\n');

        output.push_str(&format!(
            "{}\n",
            format!(
                "{:<8} {:<48} {:<13} {:>6} {:>9}  {}",
                "ACRONYM", "NAME", "TEMPLATE", "ACTIVE", "COMPLETED", "UPDATED"
            )
            .dimmed()
        ));
        for entity in &directory.entities {
            output.push_str(&format!(
                "{} {:<48} {} {:>6} {:>9}  {}\n",
                format!("{:<8}", entity.acronym).bold(),
                entity.name,
                Self::template_status(entity.template_status, 13),
                entity.active_projects,
                entity.completed_bids,
                entity.last_updated
            ));
        }

        let totals = &directory.totals;
        output.push_str(&Self::section_header("Totals"));
        output.push_str(&Self::field("Entities:", &totals.total_entities.to_string()));
        output.push_str(&Self::field(
            "Active projects:",
            &totals.active_projects.to_string(),
        ));
        output.push_str(&Self::field(
            "Completed bids:",
            &totals.completed_bids.to_string(),
        ));
        output.push_str(&Self::field(
            "Needs update:",
            &totals.needs_update.to_string(),
        ));

        output.push_str(&Self::footer());
        output
    }

    /// Format one entity's projects and template
    pub fn format_overview(&self, overview: &EntityOverview) -> String {
        let mut output = String::new();
        let entity = &overview.entity;

        output.push_str(&Self::header(&format!("{} - {}", entity.acronym, entity.name)));
        output.push('\n');

        if !entity.description.is_empty() {
            output.push_str(&format!("{}\n\n", entity.description.dimmed()));
        }
        output.push_str(&Self::field(
            "Template:",
            &format!(
                "{} {}",
                entity.template_version.as_deref().unwrap_or("(unversioned)"),
                Self::template_status(entity.template_status, 0)
            ),
        ));
        output.push_str(&Self::field("Updated:", &entity.last_updated.to_string()));

        output.push_str(&Self::section_header(&format!(
            "Projects ({})",
            overview.projects.len()
        )));
        if overview.projects.is_empty() {
            output.push_str(&format!("  {}\n", "No projects".dimmed()));
        }
        for row in &overview.projects {
            let project = &row.project;
            output.push_str(&format!(
                "\n  {} {}\n",
                project.name.bold(),
                format!("({})", project.id).dimmed()
            ));
            output.push_str(&format!(
                "    {} {}  {}  {}/{} documents\n",
                Self::project_status(project.status),
                project.reference,
                Self::rate_bar(row.completion_rate),
                project.progress.documents_submitted(),
                project.progress.total_documents()
            ));
            let deadline = Self::deadline(&project.deadline.to_string(), row.days_until_deadline);
            if row.overdue {
                output.push_str(&format!("    Deadline: {}\n", deadline.red()));
            } else {
                output.push_str(&format!("    Deadline: {}\n", deadline));
            }
        }

        output.push_str(&Self::section_header(&format!(
            "Document Template ({} required, {} optional)",
            overview.required_documents, overview.optional_documents
        )));
        let mut current_group: Option<String> = None;
        for requirement in &overview.template {
            let group = match &requirement.subcategory {
                Some(sub) => format!("{} - {}", requirement.category, sub),
                None => requirement.category.clone(),
            };
            if current_group.as_ref() != Some(&group) {
                output.push_str(&format!("\n  {}\n", group.yellow().bold()));
                current_group = Some(group);
            }
            let label = if requirement.required {
                requirement.requirement_label().normal()
            } else {
                requirement.requirement_label().dimmed()
            };
            output.push_str(&format!(
                "    * {}  [{}] {}\n",
                requirement.name,
                label,
                requirement.format.dimmed()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the bid dashboard
    pub fn format_dashboard(&self, dashboard: &BidDashboard) -> String {
        let mut output = String::new();
        let portfolio = &dashboard.portfolio;

        output.push_str(&Self::header("Bid Dashboard"));
        output.push('\n');

        output.push_str(&Self::field(
            "Bids:",
            &format!(
                "{} total, {} won, {} lost, {} pending",
                portfolio.total_bids, portfolio.won, portfolio.lost, portfolio.pending
            ),
        ));
        output.push_str(&Self::field(
            "Total value:",
            &self.money.format_compact(portfolio.total_value),
        ));
        output.push_str(&Self::field(
            "Won value:",
            &self.money.format_compact(portfolio.won_value),
        ));
        output.push_str(&Self::field(
            "Avg margin:",
            &format_margin(portfolio.average_margin),
        ));
        output.push_str(&Self::field(
            "Win rate:",
            &format_percent(dashboard.overall_win_rate()),
        ));

        let source = match dashboard.win_rate_source {
            WinRateSource::Reported => "reported",
            WinRateSource::Derived => "from bid records",
        };
        output.push_str(&Self::section_header(&format!(
            "Win Rate by Entity ({source})"
        )));
        for rate in &dashboard.win_rates {
            output.push_str(&format!(
                "  {} {}  {:>3}/{:<3} won\n",
                format!("{:<8}", rate.entity).bold(),
                Self::rate_bar(rate.win_rate()),
                rate.won_bids,
                rate.total_bids
            ));
        }

        if !dashboard.monthly.is_empty() {
            output.push_str(&Self::section_header("Monthly Performance"));
            for month in &dashboard.monthly {
                output.push_str(&format!(
                    "  {:<5} {:>3} submitted {:>3} won  {}\n",
                    month.month,
                    month.submitted,
                    month.won,
                    format_percent(month.win_rate()).dimmed()
                ));
            }
        }

        output.push_str(&Self::section_header("Recent Activity"));
        if dashboard.recent.is_empty() {
            output.push_str(&format!("  {}\n", "No bids".dimmed()));
        }
        for bid in &dashboard.recent {
            output.push_str(&format!(
                "\n  {} {} {}\n",
                bid.id.bold(),
                Self::bid_outcome(bid.status),
                format!("{} - {}", bid.entity, bid.project).dimmed()
            ));
            output.push_str(&format!(
                "    Submitted {}  Value {}  Margin {}",
                bid.submission_date,
                self.money.format_amount(bid.bid_value),
                format_margin(bid.margin)
            ));
            if let Some(awarded) = bid.award_date {
                output.push_str(&format!("  Awarded {}", awarded));
            }
            output.push('\n');
        }

        output.push_str(&Self::footer());
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    fn field(label: &str, value: &str) -> String {
        format!("{} {}\n", format!("{:<17}", label).cyan().bold(), value)
    }

    fn summary_block(summary: &ChecklistSummary) -> String {
        let mut output = Self::field("Progress:", &Self::rate_bar(summary.completion_rate));
        output.push_str(&Self::field(
            "Documents:",
            &format!(
                "{} total, {} submitted, {} verified",
                summary.total_count, summary.submitted_count, summary.verified_count
            ),
        ));
        output.push_str(&Self::field(
            "Outstanding:",
            &format!(
                "{} awaiting verification, {} missing ({} required)",
                summary.pending_count, summary.missing_count, summary.required_missing_count
            ),
        ));
        output
    }

    fn rate_bar(rate: u32) -> String {
        format!("{} {:>4}", progress_bar(rate, BAR_WIDTH), format_percent(rate))
    }

    fn deadline(date: &str, days: Option<i64>) -> String {
        match days {
            Some(d) if d > 0 => format!("{date} ({d} days left)"),
            Some(0) => format!("{date} (due today)"),
            Some(d) => format!("{date} ({} days past)", -d),
            None => date.to_string(),
        }
    }

    fn document_line(doc: &DocumentReview) -> String {
        let status = Self::document_status(doc.status);
        let marker = if doc.anomaly {
            "!".red().bold()
        } else {
            " ".normal()
        };
        let optional = if doc.required {
            String::new()
        } else {
            format!(" {}", "(optional)".dimmed())
        };

        let mut line = format!("  {}{} {}{}\n", marker, status, doc.name, optional);
        if let Some(notes) = &doc.notes {
            line.push_str(&format!("              {}\n", notes.dimmed()));
        }
        line
    }

    fn anomaly_line(anomaly: &ChecklistAnomaly) -> String {
        let label = format!("{:<8}", anomaly.severity.to_string());
        let severity = match anomaly.severity {
            Severity::Warning => label.yellow().bold(),
            Severity::Info => label.blue(),
        };
        format!(
            "  {} {} {}\n",
            severity,
            format!("[{}]", anomaly.code).dimmed(),
            anomaly.message
        )
    }

    fn document_status(status: DocumentStatus) -> ColoredString {
        let label = format!("{:<9}", status.label());
        match status {
            DocumentStatus::Verified => label.green(),
            DocumentStatus::Pending => label.yellow(),
            DocumentStatus::Missing => label.red(),
        }
    }

    fn project_status(status: ProjectStatus) -> ColoredString {
        match status {
            ProjectStatus::Active => status.label().green(),
            ProjectStatus::Completed => status.label().blue(),
            ProjectStatus::Draft => status.label().dimmed(),
        }
    }

    fn template_status(status: TemplateStatus, width: usize) -> ColoredString {
        let label = format!("{:<width$}", status.label());
        if status.needs_update() {
            label.yellow()
        } else {
            label.green()
        }
    }

    fn bid_outcome(outcome: BidOutcome) -> ColoredString {
        match outcome {
            BidOutcome::Won => outcome.label().green().bold(),
            BidOutcome::Lost => outcome.label().red(),
            BidOutcome::Pending => outcome.label().yellow(),
        }
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn directory(&self, directory: &EntityDirectory) -> String {
        self.format_directory(directory)
    }

    fn overview(&self, overview: &EntityOverview) -> String {
        self.format_overview(overview)
    }

    fn review(&self, review: &ChecklistReview) -> String {
        self.format_review(review)
    }

    fn validation(&self, review: &ChecklistReview) -> String {
        self.format_validation(review)
    }

    fn dashboard(&self, dashboard: &BidDashboard) -> String {
        self.format_dashboard(dashboard)
    }
}
