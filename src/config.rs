//! Run configuration helpers.
//!
//! The config is an optional JSON file. Command-line flags override any value
//! it sets, and a missing file means [`default_config`].
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_SCHEMA_VERSION: u32 = 1;
pub const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_COUNTRY: &str = "DE";
pub const DEFAULT_TOP: usize = 10;
pub const DEFAULT_OUTPUT_DIR: &str = "exports";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub schema_version: u32,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_top")]
    pub top: usize,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

fn default_top() -> usize {
    DEFAULT_TOP
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

/// Build the config used when no file is supplied.
pub fn default_config() -> RunConfig {
    RunConfig {
        schema_version: CONFIG_SCHEMA_VERSION,
        country: default_country(),
        data_dir: None,
        top: DEFAULT_TOP,
        output_dir: default_output_dir(),
    }
}

/// Load and validate a config file.
pub fn load_config(path: &Path) -> Result<RunConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: RunConfig = serde_json::from_slice(&bytes).context("parse config JSON")?;
    validate_config(&config)?;
    Ok(config)
}

/// Persist a config in a stable JSON format.
pub fn write_config(path: &Path, config: &RunConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create config dir")?;
    }
    let text = serde_json::to_string_pretty(config).context("serialize config")?;
    fs::write(path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn validate_config(config: &RunConfig) -> Result<()> {
    if config.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported config schema_version {}",
            config.schema_version
        ));
    }
    if config.country.trim().is_empty() {
        return Err(anyhow!("country must be non-empty"));
    }
    if config.top == 0 {
        return Err(anyhow!("top must be at least 1"));
    }
    Ok(())
}
