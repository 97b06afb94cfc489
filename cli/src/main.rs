//! CLI entrypoint for bidtrack
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use bidtrack_application::{
    BidDashboardUseCase, EntityOverviewUseCase, ListEntitiesUseCase, ProcurementRepository,
    ReportParams, ReviewChecklistInput, ReviewChecklistUseCase,
};
use bidtrack_domain::{MoneyFormat, Severity};
use bidtrack_infrastructure::{ConfigLoader, DatasetRepository, FileConfig};
use bidtrack_presentation::{Cli, Command, OutputConfig, ReportFormatter};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr so reports on stdout stay pipeable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = cli.config.as_ref().filter(|p| !p.exists()) {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    for issue in config.validate() {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Info => info!("{}", issue.message),
        }
    }
    let (money, _) = config.format.to_money_format();

    let Some(command) = cli.command.clone() else {
        bail!("No command given. Run `bidtrack --help` for usage.");
    };

    let params = report_params(&cli, &config, money.clone());

    let output = OutputConfig::default()
        .with_format(cli.output.or(config.output.format).unwrap_or_default())
        .with_color(config.output.color && !cli.no_color);
    output.apply_color();
    let formatter = output.formatter(money.clone());

    // === Dependency Injection ===
    // The dataset is only opened by commands that read it
    let data_path = cli.data.clone().or_else(|| config.data.path.clone());
    let open_repository = || -> Result<Arc<dyn ProcurementRepository>> {
        let dataset = DatasetRepository::open(data_path.as_deref()).with_context(|| {
            match &data_path {
                Some(path) => format!("Failed to load dataset {}", path.display()),
                None => "Failed to load built-in sample dataset".to_string(),
            }
        })?;
        info!("Using dataset: {}", dataset.source());
        let repository: Arc<dyn ProcurementRepository> = Arc::new(dataset);
        Ok(repository)
    };

    run(command, &money, params, formatter.as_ref(), open_repository)
}

fn report_params(cli: &Cli, config: &FileConfig, money: MoneyFormat) -> ReportParams {
    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    ReportParams::default()
        .with_money(money)
        .with_show_notes(config.output.show_notes)
        .with_today(today)
        .with_recent_limit(config.output.recent_limit)
}

fn run(
    command: Command,
    money: &MoneyFormat,
    params: ReportParams,
    formatter: &dyn ReportFormatter,
    open_repository: impl FnOnce() -> Result<Arc<dyn ProcurementRepository>>,
) -> Result<ExitCode> {
    match command {
        Command::Entities => {
            let directory = ListEntitiesUseCase::new(open_repository()?).execute()?;
            println!("{}", formatter.directory(&directory));
        }
        Command::Entity { id } => {
            let overview = EntityOverviewUseCase::new(open_repository()?).execute(&id, &params)?;
            println!("{}", formatter.overview(&overview));
        }
        Command::Project { entity, project } => {
            let input = ReviewChecklistInput::new(entity, project).with_params(params);
            let review = ReviewChecklistUseCase::new(open_repository()?).execute(input)?;
            println!("{}", formatter.review(&review));
        }
        Command::Bids { limit } => {
            let params = match limit {
                Some(limit) => params.with_recent_limit(limit),
                None => params,
            };
            let dashboard = BidDashboardUseCase::new(open_repository()?).execute(&params)?;
            println!("{}", formatter.dashboard(&dashboard));
        }
        Command::Validate { entity, project } => {
            let input = ReviewChecklistInput::new(entity, project).with_params(params);
            let review = ReviewChecklistUseCase::new(open_repository()?).execute(input)?;
            println!("{}", formatter.validation(&review));
            if review.has_warnings() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Money { amount, compact } => {
            let text = if compact {
                money.format_compact(amount)
            } else {
                money.format_amount(amount)
            };
            println!("{}", text);
        }
    }

    Ok(ExitCode::SUCCESS)
}
