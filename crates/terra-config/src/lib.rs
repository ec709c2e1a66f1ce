//! Configuration system for Terra.
//!
//! Provides runtime-configurable settings that persist to disk as RON files.
//! Supports CLI overrides via clap, validation of caller-enforced limits,
//! hot-reload detection, and change classification for minimal rebuilds.

mod cli;
mod config;
mod error;

use std::path::PathBuf;

pub use cli::CliArgs;
pub use config::{Config, ConfigChanges, DebugConfig, OutputConfig, PlanetConfig};
pub use error::ConfigError;

/// Default configuration directory, `<platform config dir>/terra`.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("terra"))
}
