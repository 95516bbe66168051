use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level dashkit configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// API client settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Settings for the list-data API client.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the list-data server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    dashkit_api::DEFAULT_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Loads the TOML config, falling back to defaults when the file is
    /// absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}
