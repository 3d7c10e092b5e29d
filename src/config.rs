use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{InventoryError, Result};

/// Key the item collection is stored under by default
pub const DEFAULT_STORAGE_KEY: &str = "snappy_items";

/// Artificial latency applied to every store operation by default
pub const DEFAULT_LATENCY_MS: u64 = 300;

const CONFIG_FILE_NAME: &str = "config.json";

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory holding the storage area
    pub data_dir: PathBuf,

    /// Key the item collection is stored under
    pub storage_key: String,

    /// Delay applied before every store operation (in milliseconds)
    pub latency_ms: u64,

    /// Whether to seed demo items into an empty storage area
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".snappy"));

        Self {
            data_dir,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            latency_ms: DEFAULT_LATENCY_MS,
            seed_demo_data: true,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "snappy-inventory")
}

impl Config {
    /// Default location of the configuration file
    pub fn default_path() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(".snappy").join(CONFIG_FILE_NAME))
    }

    /// Loads the configuration from `path` (or the default location).
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_path);

        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| InventoryError::ConfigError {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        let config = serde_json::from_str(&content).map_err(|e| InventoryError::ConfigError {
            message: format!("Failed to parse {}: {}", path.display(), e),
        })?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Writes the configuration as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|_| InventoryError::DirectoryError {
                    path: parent.to_path_buf(),
                })?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Applies a single `key=value` style setting.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |expected: &str| InventoryError::ConfigError {
            message: format!("Invalid value '{}' for {}: expected {}", value, key, expected),
        };

        match key.trim() {
            "data_dir" => self.data_dir = PathBuf::from(value),
            "storage_key" => {
                if value.is_empty() {
                    return Err(invalid("a non-empty key"));
                }
                self.storage_key = value.to_string();
            }
            "latency_ms" => {
                self.latency_ms = value.parse().map_err(|_| invalid("milliseconds"))?;
            }
            "seed_demo_data" => {
                self.seed_demo_data = value.parse().map_err(|_| invalid("true or false"))?;
            }
            other => {
                return Err(InventoryError::ConfigError {
                    message: format!("Unknown configuration key: {}", other),
                })
            }
        }

        Ok(())
    }
}
