use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_MAX_RESULTS: usize = 100;
pub const DEFAULT_DISPLAY_LIMIT: usize = 5;

/// User-facing configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub interface: InterfaceSettings,
}

impl AppConfig {
    /// Returns the config file path within the given config directory.
    pub fn path(config_dir: &Path) -> PathBuf {
        config_dir.join("config.toml")
    }

    /// Platform default location, `None` when the platform has no config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| Self::path(&dir.join("lockr")))
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.search.max_results < 1 {
            errors.push("search.max_results must be at least 1".to_string());
        }

        if self.interface.display_limit < 1 {
            errors.push("interface.display_limit must be at least 1".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        for problem in self.validate() {
            warn!(%problem, "using default for invalid config value");
        }

        let defaults = Self::default();
        Self {
            search: SearchSettings {
                max_results: if self.search.max_results < 1 {
                    defaults.search.max_results
                } else {
                    self.search.max_results
                },
                ..self.search.clone()
            },
            interface: InterfaceSettings {
                display_limit: if self.interface.display_limit < 1 {
                    defaults.interface.display_limit
                } else {
                    self.interface.display_limit
                },
            },
        }
    }
}

/// Scoring behavior.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub case_sensitive: bool,
    /// Signed; negative values parse and are clamped on use.
    #[serde(default = "default_max_results")]
    pub max_results: i64,
    #[serde(default = "default_true")]
    pub highlight_matches: bool,
}

impl SearchSettings {
    /// `max_results` as a usize, falling back to the default when out of range.
    pub fn max_results(&self) -> usize {
        usize::try_from(self.max_results)
            .ok()
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_MAX_RESULTS)
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            max_results: default_max_results(),
            highlight_matches: true,
        }
    }
}

/// Interactive picker settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterfaceSettings {
    #[serde(default = "default_display_limit")]
    pub display_limit: i64,
}

impl InterfaceSettings {
    pub fn display_limit(&self) -> usize {
        usize::try_from(self.display_limit)
            .ok()
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_DISPLAY_LIMIT)
    }
}

impl Default for InterfaceSettings {
    fn default() -> Self {
        Self {
            display_limit: default_display_limit(),
        }
    }
}

fn default_max_results() -> i64 {
    DEFAULT_MAX_RESULTS as i64
}

fn default_display_limit() -> i64 {
    DEFAULT_DISPLAY_LIMIT as i64
}

fn default_true() -> bool {
    true
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
