//! Infrastructure layer for bidtrack
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: configuration file loading and the
//! dataset-backed procurement repository.

pub mod config;
pub mod dataset;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileDataConfig, FileFormatConfig, FileOutputConfig,
};
pub use dataset::{DataSource, Dataset, DatasetError, DatasetRepository};
