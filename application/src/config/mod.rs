//! Application-level configuration.
//!
//! - [`ReportParams`]: what the use cases compute for display

pub mod report_params;

pub use report_params::ReportParams;
