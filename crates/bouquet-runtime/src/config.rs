//! Runtime configuration
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use bouquet_core::{
    BouquetError, EngineConfig, Epoch, Flower, FlowerCatalog, MilestoneSet, DEFAULT_MILESTONES,
};

use crate::{DisplayOptions, PlaybackSettings, MAX_PERIOD_REFRESH, MIN_PERIOD_REFRESH};

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),

    #[error(transparent)]
    Core(#[from] BouquetError),
}

/// Display runtime configuration
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Start date, `YYYY-MM-DD`
    pub epoch: NaiveDate,
    /// Celebratory day counts
    pub milestones: Vec<u64>,
    /// Replacement flower catalog; the built-in one when absent
    pub catalog: Option<Vec<Flower>>,
    /// How often the time-of-day band is re-checked, e.g. `"60s"`
    #[serde(deserialize_with = "deserialize_duration")]
    pub period_refresh: Duration,
    /// Reduced mode for small screens: no autoplay
    pub compact: bool,
    /// Attempt playback at startup
    pub autoplay: bool,
    /// Playback volume, 0.0 to 1.0
    pub volume: f32,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            epoch: Epoch::default().date(),
            milestones: DEFAULT_MILESTONES.to_vec(),
            catalog: None,
            period_refresh: Duration::from_secs(60),
            compact: false,
            autoplay: true,
            volume: 0.3,
            log_json: false,
        }
    }
}

impl RuntimeConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RuntimeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(ConfigError::Invalid(format!(
                "volume {} outside 0.0..=1.0",
                self.volume
            )));
        }
        if !(MIN_PERIOD_REFRESH..=MAX_PERIOD_REFRESH).contains(&self.period_refresh) {
            return Err(ConfigError::Invalid(format!(
                "period_refresh {:?} outside 1s..=24h",
                self.period_refresh
            )));
        }
        // Rejects an empty or malformed catalog
        self.engine_config()?;
        Ok(())
    }

    /// Immutable engine inputs derived from this config
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let catalog = match &self.catalog {
            Some(flowers) => FlowerCatalog::new(flowers.clone())?,
            None => FlowerCatalog::default(),
        };
        Ok(EngineConfig::new(
            Epoch::from_date(self.epoch),
            catalog,
            MilestoneSet::new(self.milestones.iter().copied()),
        ))
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            period_refresh: self.period_refresh,
            playback: PlaybackSettings {
                volume: self.volume,
                autoplay: self.autoplay,
                compact: self.compact,
            },
        }
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    humantime::parse_duration(&raw).map_err(serde::de::Error::custom)
}
