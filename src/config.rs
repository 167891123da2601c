use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::core::render::{CARDS_PER_BATCH, SCROLL_THRESHOLD_PX};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub library: LibraryConfig,

    #[serde(default)]
    pub browser: BrowserConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Path to the exported feed document.
    #[serde(default = "default_feed_path")]
    pub feed_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold_px: f32,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            feed_path: default_feed_path(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            scroll_threshold_px: default_scroll_threshold(),
        }
    }
}

fn default_feed_path() -> PathBuf {
    PathBuf::from("media.json")
}

fn default_batch_size() -> usize {
    CARDS_PER_BATCH
}

fn default_scroll_threshold() -> f32 {
    SCROLL_THRESHOLD_PX
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            debug!("Loading config from {:?}", config_path);
            let contents =
                fs::read_to_string(&config_path).context("Failed to read config file")?;
            let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;
            info!("Config loaded successfully");
            Ok(config)
        } else {
            info!("No config file found, using defaults");
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_path, contents).context("Failed to write config file")?;

        debug!("Config saved to {:?}", config_path);
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("marquee").join("config.toml"))
    }
}
