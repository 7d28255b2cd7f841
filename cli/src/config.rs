//! Configuration management for the teamdex CLI

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use teamdex_client::ClientConfig;

const DEFAULT_ROSTER_LIMIT: usize = 151;

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub base_url: Option<String>,
    pub team_file: Option<PathBuf>,
    pub roster_limit: Option<usize>,
}

impl Config {
    /// Get the path to the default config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("teamdex");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from `path` (or the default location); a missing
    /// file yields the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path()?,
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Team file location, falling back to `<data dir>/teamdex/team.json`
    pub fn team_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.team_file {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir().context("Could not determine data directory")?;
        Ok(data_dir.join("teamdex").join("team.json"))
    }

    pub fn roster_limit(&self) -> usize {
        self.roster_limit.unwrap_or(DEFAULT_ROSTER_LIMIT)
    }

    pub fn client_config(&self) -> ClientConfig {
        match &self.base_url {
            Some(url) => ClientConfig::with_base_url(url.clone()),
            None => ClientConfig::default(),
        }
    }
}
