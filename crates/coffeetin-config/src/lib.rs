//! Configuration management for coffeetin
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the binary)
//! 2. Environment variables (COFFEETIN_* prefix)
//! 3. coffeetin.local.toml (gitignored, local overrides)
//! 4. coffeetin.toml (project config)
//! 5. ~/.config/coffeetin/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)

use anyhow::Result;
use coffeetin::{Scenario, TrialConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main coffeetin configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoffeetinConfig {
    pub game: GameConfig,
    pub trials: TrialsConfig,
    pub output: OutputConfig,
    pub tins: Vec<TinDefinition>,
}

/// Settings for `play`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed seed; `None` draws from OS randomness.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialsConfig {
    pub seed: u64,
    pub iterations: u64,
}

impl Default for TrialsConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            iterations: 100,
        }
    }
}

impl From<&TrialsConfig> for TrialConfig {
    fn from(trials: &TrialsConfig) -> Self {
        TrialConfig {
            seed: trials.seed,
            iterations: trials.iterations,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Tin definition from config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TinDefinition {
    pub name: String,
    /// Bean string such as "BBBGG"
    pub beans: String,
}

impl TinDefinition {
    /// Parses the bean string into a playable scenario
    pub fn to_scenario(&self) -> Result<Scenario, ConfigError> {
        let tin = self.beans.parse().map_err(|e| {
            ConfigError::ValidationError(format!("tin '{}': {e}", self.name))
        })?;
        Ok(Scenario::new(&self.name, tin))
    }
}

impl CoffeetinConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Read a single TOML file, without merging any other source
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials.iterations == 0 {
            return Err(ConfigError::ValidationError(
                "trials.iterations must be at least 1".to_string(),
            ));
        }

        for tin in &self.tins {
            if tin.name.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "tin with beans '{}' has an empty name",
                    tin.beans
                )));
            }
            tin.to_scenario()?;
        }

        Ok(())
    }

    /// Configured tins, or `None` when the config defines none
    pub fn scenarios(&self) -> Result<Option<Vec<Scenario>>, ConfigError> {
        if self.tins.is_empty() {
            return Ok(None);
        }
        self.tins
            .iter()
            .map(TinDefinition::to_scenario)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}
