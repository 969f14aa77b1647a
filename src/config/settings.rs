// src/config/settings.rs
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ::config::{Config, File};
use serde::Deserialize;

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const SETTINGS_FILE: &str = "settings.toml";

/// Local preferences only. The analysis endpoint is fixed at compile time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// `<config dir>/scenario-analyzer/settings.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scenario-analyzer").join(SETTINGS_FILE))
    }

    /// Compiled defaults, overlaid with the file at `path` when it exists.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("log_filter", DEFAULT_LOG_FILTER)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        let settings = builder
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")?;

        Ok(settings)
    }
}
