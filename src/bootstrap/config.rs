//! # Configuration Loader
//!
//! Reads the TOML file into `AppConfig`. A missing file is not an error:
//! every key has a default. Command-line flags are applied on top.

use std::path::{Path, PathBuf};

use anyhow::Context;
use fl_core::AppConfig;
use tracing::info;

/// Load configuration from a TOML file, or defaults when it does not exist.
///
/// # Errors
///
/// Returns error if the file exists but cannot be read, or is not valid
/// TOML for `AppConfig`.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        info!(path = %config_path.display(), "No config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    AppConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}

/// Values given on the command line; each replaces its config key.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub operator: Option<String>,
    pub database: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

pub fn apply_overrides(config: &mut AppConfig, overrides: ConfigOverrides) {
    if let Some(operator) = overrides.operator {
        config.general.operator = operator;
    }
    if let Some(database) = overrides.database {
        config.storage.database_path = database;
    }
    if let Some(dir) = overrides.output_dir {
        config.output.directory = dir;
    }
}
