//! CLI command definitions

use bidtrack_domain::OutputFormat;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for bidtrack
#[derive(Parser, Debug)]
#[command(name = "bidtrack")]
#[command(author, version, about = "Bid document tracking for government procurement")]
#[command(long_about = r#"
bidtrack reports on bid document checklists for government procurement
projects: which documents are missing, which are submitted and awaiting
verification, and how complete each project is.

Without --data the built-in sample dataset (Department of Health) is used.

Configuration files are loaded from (in priority order):
1. BIDTRACK_* environment variables (e.g. BIDTRACK_FORMAT__CURRENCY=USD)
2. --config <path>     Explicit config file
3. ./bidtrack.toml or ./.bidtrack.toml   Project-level config
4. ~/.config/bidtrack/config.toml   Global config

Example:
  bidtrack entities
  bidtrack project doh proj-001
  bidtrack --today 2024-02-01 entity doh
  bidtrack -o json bids --limit 5
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Dataset file (.toml or .json)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, global = true, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Reference date for deadline countdowns (defaults to the local date)
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List procurement entities with directory totals
    Entities,

    /// Show one entity's projects and document template
    Entity {
        /// Entity id (e.g. doh)
        id: String,
    },

    /// Review a project's document checklist
    Project {
        entity: String,
        project: String,
    },

    /// Bid dashboard: win rates, totals and recent activity
    Bids {
        /// Number of recent bids to list
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Check a project's checklist for data anomalies (exit code 1 on warnings)
    Validate {
        entity: String,
        project: String,
    },

    /// Format an amount with the configured currency settings
    Money {
        #[arg(allow_negative_numbers = true)]
        amount: i64,

        /// Short form (₱125M)
        #[arg(long)]
        compact: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_long_about_lists_both_project_config_names() {
        let about = Cli::command().get_long_about().unwrap().to_string();
        assert!(about.contains("./bidtrack.toml"));
        assert!(about.contains("./.bidtrack.toml"));
    }

    #[test]
    fn test_parse_project_with_globals() {
        let cli = Cli::try_parse_from([
            "bidtrack", "project", "doh", "proj-001", "-o", "json", "--today", "2024-02-01",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Project {
                entity: "doh".to_string(),
                project: "proj-001".to_string(),
            })
        );
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["bidtrack", "-vv", "entities"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_negative_money_amount() {
        let cli = Cli::try_parse_from(["bidtrack", "money", "-1500", "--compact"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Money {
                amount: -1500,
                compact: true
            })
        );
    }

    #[test]
    fn test_invalid_output_format_is_rejected() {
        assert!(Cli::try_parse_from(["bidtrack", "-o", "yaml", "bids"]).is_err());
    }
}
