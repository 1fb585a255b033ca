//! Validation helpers for configuration values and command arguments

use crate::error::{CliError, ConfigError};

pub const OUTPUT_FORMATS: [&str; 3] = ["table", "csv", "json"];

/// Validate that a configured millimetre value is finite and not negative
pub fn validate_non_negative(field: &str, value: f64) -> crate::Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: format!("{} must be a non-negative number of millimetres", field),
        }
        .into());
    }
    Ok(())
}

/// Validate that a configured millimetre value is finite and above zero
pub fn validate_positive(field: &str, value: f64) -> crate::Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: format!("{} must be greater than zero", field),
        }
        .into());
    }
    Ok(())
}

/// Validate an output format name (case-insensitive)
pub fn validate_output_format(format: &str) -> crate::Result<()> {
    let normalized = format.trim().to_ascii_lowercase();
    if !OUTPUT_FORMATS.contains(&normalized.as_str()) {
        return Err(ConfigError::InvalidValue {
            field: "default_format".to_string(),
            value: format.to_string(),
            reason: format!("format must be one of: {}", OUTPUT_FORMATS.join(", ")),
        }
        .into());
    }
    Ok(())
}

/// Validate a 1-based row number given on the command line
pub fn validate_row_number(row: usize) -> crate::Result<()> {
    if row == 0 {
        return Err(
            CliError::InvalidArguments("Row numbers start at 1".to_string()).into(),
        );
    }
    Ok(())
}
