//! Configuration loading and management
//!
//! Handles parsing of `.taskopia.toml` configuration files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::query::SortKey;
use crate::task::{Category, Priority};

const CONFIG_FILE: &str = ".taskopia.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Dataset file override; falls back to the platform data dir
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Default values applied by the CLI
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            defaults: DefaultsConfig::default(),
        }
    }
}

/// Defaults for new tasks and for listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default sort key for `taskopia list`
    #[serde(default = "default_sort")]
    pub sort: String,

    /// Default priority for new tasks
    #[serde(default = "default_priority")]
    pub priority: String,

    /// Default category for new tasks
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_sort() -> String {
    "due-date".to_string()
}

fn default_priority() -> String {
    "medium".to_string()
}

fn default_category() -> String {
    "other".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            sort: default_sort(),
            priority: default_priority(),
            category: default_category(),
        }
    }
}

impl Config {
    /// Load configuration from a `.taskopia.toml` file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory, or return defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            match Self::load(&config_path) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!(
                        path = %config_path.display(),
                        error = %err,
                        "ignoring unreadable config, using defaults"
                    );
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    pub fn default_sort(&self) -> SortKey {
        self.defaults
            .sort
            .parse()
            .unwrap_or(SortKey::DueDate)
    }

    pub fn default_priority(&self) -> Priority {
        self.defaults
            .priority
            .parse()
            .unwrap_or(Priority::Medium)
    }

    pub fn default_category(&self) -> Category {
        self.defaults
            .category
            .parse()
            .unwrap_or(Category::Other)
    }

    fn validate(&self) -> crate::error::Result<()> {
        self.defaults.sort.parse::<SortKey>().map_err(|_| {
            crate::error::Error::InvalidConfig(format!(
                "defaults.sort: unknown sort key '{}'",
                self.defaults.sort
            ))
        })?;
        self.defaults.priority.parse::<Priority>().map_err(|_| {
            crate::error::Error::InvalidConfig(format!(
                "defaults.priority: unknown priority '{}'",
                self.defaults.priority
            ))
        })?;
        self.defaults.category.parse::<Category>().map_err(|_| {
            crate::error::Error::InvalidConfig(format!(
                "defaults.category: unknown category '{}'",
                self.defaults.category
            ))
        })?;
        Ok(())
    }
}
