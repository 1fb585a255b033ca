//! Configuration service for settings and system constants

use crate::AppError;
use crate::core::constants::SystemConstants;
use crate::error::ConfigError;
use crate::storage::config::Config;
use crate::utils::validation::{validate_non_negative, validate_output_format, validate_positive};
use std::path::PathBuf;

/// Configuration service for managing application configuration
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    /// Create new ConfigService instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Effective system constants, validated
    pub fn constants(&self) -> Result<SystemConstants, AppError> {
        let constants = self.config.constants();
        validate_constants(&constants)?;
        Ok(constants)
    }

    /// Default output format from environment or file, validated
    pub fn default_format(&self) -> Result<Option<String>, AppError> {
        match self.config.get_default_format() {
            Some(format) => {
                validate_output_format(&format)?;
                Ok(Some(format.to_ascii_lowercase()))
            }
            None => Ok(None),
        }
    }

    /// Write the built-in constants into the settings file, keeping other settings
    pub fn init_constants(&mut self) {
        self.config.constants = Some(SystemConstants::default());
    }

    /// Save configuration to file
    pub fn save_config(&self, path: Option<PathBuf>) -> Result<(), AppError> {
        self.config.save(path).map_err(|e| e.into())
    }
}

/// Reject constants that would make the geometry meaningless.
pub fn validate_constants(constants: &SystemConstants) -> Result<(), AppError> {
    validate_non_negative("bottom_liner_thickness_mm", constants.bottom_liner_thickness_mm)?;
    validate_non_negative("side_liner_thickness_mm", constants.side_liner_thickness_mm)?;
    validate_non_negative("trackset_tolerance_mm", constants.trackset_tolerance_mm)?;
    validate_positive("max_door_height_mm", constants.max_door_height_mm)?;
    validate_non_negative("max_dropdown_mm", constants.max_dropdown_mm)?;
    validate_positive("fixed_door_height_mm", constants.fixed_door_height_mm)?;
    validate_non_negative("door_overlap_mm", constants.door_overlap_mm)?;
    validate_non_negative(
        "default_overlap_tolerance_mm",
        constants.default_overlap_tolerance_mm,
    )?;

    for entry in &constants.overlap_tolerances {
        if entry.doors == 0 {
            return Err(ConfigError::InvalidValue {
                field: "overlap_tolerances.doors".to_string(),
                value: entry.doors.to_string(),
                reason: "door count must be at least 1".to_string(),
            }
            .into());
        }
        validate_non_negative("overlap_tolerances.tolerance_mm", entry.tolerance_mm)?;
    }

    Ok(())
}
