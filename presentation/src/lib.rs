//! Presentation layer for bidtrack
//!
//! This crate contains the CLI definition and the text and JSON
//! formatters for every report.

pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::ReportFormatter;
pub use output::json::JsonFormatter;
