//! Configuration file loading for bidtrack
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `BIDTRACK_`-prefixed environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./bidtrack.toml` or `./.bidtrack.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/bidtrack/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileDataConfig, FileFormatConfig, FileOutputConfig};
pub use loader::{ConfigLoader, ENV_PREFIX};
