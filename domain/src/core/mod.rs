//! Core domain primitives shared by every module
//!
//! - [`error`]: domain-level error type
//! - [`percent`]: integer percentage rounding used for completion and win rates
//! - [`severity`]: severity of non-fatal issues

pub mod error;
pub mod percent;
pub mod severity;
