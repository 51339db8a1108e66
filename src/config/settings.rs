//! JSON settings file
//!
//! Every field has a default, so a partial (or absent) file is valid.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::common::font::FontSpec;
use crate::constants::defaults;
use crate::scheduler::SchedulerMode;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scheduler: SchedulerMode,
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    #[serde(default = "default_debounce_delay_ms")]
    pub debounce_delay_ms: u64,
    #[serde(default)]
    pub font: FontSpec,
}

fn default_frame_interval_ms() -> u64 {
    defaults::scheduling::FRAME_INTERVAL_MS
}

fn default_debounce_delay_ms() -> u64 {
    defaults::scheduling::DEBOUNCE_DELAY_MS
}

impl Config {
    /// Default location under the XDG config directory
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON from {:?}", path))?;

        config
            .validate()
            .with_context(|| format!("Invalid config in {:?}", path))?;

        info!(path = %path.display(), scheduler = ?config.scheduler, "Loaded config");
        Ok(config)
    }

    /// Write pretty JSON to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let json_string =
            serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;

        fs::write(path, json_string)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reject values the frame loop cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.frame_interval_ms == 0 {
            bail!("frame_interval_ms must be at least 1");
        }
        Ok(())
    }

    /// Frame loop period, never shorter than one millisecond
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheduler: SchedulerMode::default(),
            frame_interval_ms: default_frame_interval_ms(),
            debounce_delay_ms: default_debounce_delay_ms(),
            font: FontSpec::default(),
        }
    }
}
