//! Dataset loading errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML dataset: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported dataset format '{extension}' (expected .toml or .json)")]
    UnsupportedFormat { extension: String },

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("{kind} '{id}' references unknown {target} '{reference}'")]
    DanglingReference {
        kind: &'static str,
        id: String,
        target: &'static str,
        reference: String,
    },
}
