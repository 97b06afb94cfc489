//! Dataset-backed [`ProcurementRepository`](bidtrack_application::ProcurementRepository)
//!
//! Reads a whole dataset (entities, projects, checklists, templates, bids)
//! from a TOML or JSON file, or from the sample compiled into the binary.

mod error;
mod model;
mod repository;

pub use error::DatasetError;
pub use model::{Dataset, EntityTemplate, ProjectChecklist};
pub use repository::{DataSource, DatasetRepository};
