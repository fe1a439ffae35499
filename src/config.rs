//! Configuration file support for nutriplan.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/nutriplan/config.toml`.
//! Domain constants (activity factors, the 3500 kcal/lb conversion, the
//! unhealthy-rate threshold) are fixed and deliberately not configurable.

use crate::types::DEFAULT_CALORIE_BASELINE;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub planner: PlannerConfig,
}

/// Planner defaults
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Calorie baseline used to derive fiber and saturated-fat budgets for
    /// profiles built via [`crate::PersonProfile::from_config`].
    #[serde(default = "default_calorie_baseline")]
    pub calorie_baseline: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            calorie_baseline: default_calorie_baseline(),
        }
    }
}

fn default_calorie_baseline() -> f64 {
    DEFAULT_CALORIE_BASELINE
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("nutriplan").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
