//! Configuration management
//!
//! Optional settings file with system constant overrides and a default output format.
//! Format priority: CLI argument > WARDROBE_FORMAT environment variable > config.toml

use super::Result;
use crate::core::constants::SystemConstants;
use crate::error::StorageError;
use crate::utils::input::EnvConfigReader;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Default output format for `calc` (table, csv or json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,

    /// Overrides for the built-in system constants. Omitted fields keep their defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constants: Option<SystemConstants>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| StorageError::ParseError {
            path: config_path.to_string_lossy().to_string(),
            message: format!("Failed to parse config file: {}", e),
        })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::SerializeFailed {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        let app_config_dir = home_dir.join(".config").join("wardrobe-cli");
        let config_file = app_config_dir.join(CONFIG_FILE_NAME);

        Ok(config_file)
    }

    /// Config file inside an explicit directory (`--config-dir`)
    pub fn file_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }

    /// Get default format, preferring the environment variable over the file
    pub fn get_default_format(&self) -> Option<String> {
        EnvConfigReader::read_format().or_else(|| self.default_format.clone())
    }

    /// Effective constants: file overrides merged over the built-ins
    pub fn constants(&self) -> SystemConstants {
        self.constants.clone().unwrap_or_default()
    }
}
