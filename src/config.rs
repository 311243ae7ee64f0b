//! Configuration loading and saving.
//!
//! TOML file in the platform config directory. Missing file means
//! defaults; missing fields fall back per-field.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Coarse offset step for the +/- keys, milliseconds.
    pub sync_step_ms: i64,
    /// Fine offset step for the arrow keys, milliseconds.
    pub fine_step_ms: i64,
    /// Engine tick period for the player loop, milliseconds.
    pub tick_interval_ms: u64,
    /// Where saved words go.
    pub vocabulary_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sync_step_ms: 500,
            fine_step_ms: 100,
            tick_interval_ms: 100,
            vocabulary_file: default_vocabulary_path(),
        }
    }
}

fn default_vocabulary_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("subsync").join("vocabulary.json"))
        .unwrap_or_else(|| PathBuf::from("vocabulary.json"))
}

impl Config {
    /// Path of the config file (`<config dir>/subsync/config.toml`).
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("could not determine config directory")?;
        Ok(dir.join("subsync").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when absent.
    pub fn load() -> Result<Config> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Write the config file, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
