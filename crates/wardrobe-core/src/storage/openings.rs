//! Openings files
//!
//! A batch of openings is kept in a TOML file (`[[openings]]` tables) or a
//! JSON file (a bare array, or an object with an `openings` array). The format
//! follows the file extension.

use super::Result;
use crate::core::opening::{InputPolicy, OpeningInput, OpeningRecord};
use crate::error::{InputError, StorageError};
use crate::utils::file::{ensure_directory_exists, file_extension};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningsFormat {
    Toml,
    Json,
}

impl OpeningsFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match file_extension(path).as_deref() {
            Some("toml") => Ok(OpeningsFormat::Toml),
            Some("json") => Ok(OpeningsFormat::Json),
            _ => Err(StorageError::UnsupportedFormat {
                path: path.to_string_lossy().to_string(),
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
struct OpeningsFile {
    #[serde(default)]
    openings: Vec<OpeningRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonOpenings {
    List(Vec<OpeningRecord>),
    Wrapped(OpeningsFile),
}

/// Read raw rows from an openings file.
pub fn load_openings(path: &Path) -> Result<Vec<OpeningRecord>> {
    let format = OpeningsFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| StorageError::FileIo {
        path: path.to_string_lossy().to_string(),
        source,
    })?;
    let records = parse_content(&content, format).map_err(|message| StorageError::ParseError {
        path: path.to_string_lossy().to_string(),
        message,
    })?;

    log::debug!("Loaded {} rows from {}", records.len(), path.display());
    Ok(records)
}

fn parse_content(
    content: &str,
    format: OpeningsFormat,
) -> std::result::Result<Vec<OpeningRecord>, String> {
    match format {
        OpeningsFormat::Toml => toml::from_str::<OpeningsFile>(content)
            .map(|file| file.openings)
            .map_err(|e| e.to_string()),
        OpeningsFormat::Json => match serde_json::from_str::<JsonOpenings>(content) {
            Ok(JsonOpenings::List(records)) => Ok(records),
            Ok(JsonOpenings::Wrapped(file)) => Ok(file.openings),
            Err(e) => Err(e.to_string()),
        },
    }
}

/// Validate raw rows into typed openings. Rows are numbered from 1.
pub fn parse_openings(
    records: &[OpeningRecord],
    policy: InputPolicy,
) -> std::result::Result<Vec<OpeningInput>, InputError> {
    if records.is_empty() {
        return Err(InputError::Empty);
    }
    records
        .iter()
        .enumerate()
        .map(|(index, record)| OpeningInput::from_record(index + 1, record, policy))
        .collect()
}

/// Load and validate an openings file in one step.
pub fn load_inputs(path: &Path, policy: InputPolicy) -> crate::Result<Vec<OpeningInput>> {
    let records = load_openings(path)?;
    Ok(parse_openings(&records, policy)?)
}

/// Starter openings file content in the given format.
pub fn template_content(format: OpeningsFormat) -> Result<String> {
    let file = OpeningsFile {
        openings: vec![OpeningRecord::starter()],
    };
    let content = match format {
        OpeningsFormat::Toml => toml::to_string(&file).map_err(|e| e.to_string()),
        OpeningsFormat::Json => serde_json::to_string_pretty(&file).map_err(|e| e.to_string()),
    };
    content.map_err(|message| StorageError::SerializeFailed {
        message: format!("Failed to serialize template: {}", message),
    })
}

/// Write a starter openings file; the format follows the extension.
pub fn write_template(path: &Path) -> crate::Result<()> {
    let format = OpeningsFormat::from_path(path)?;
    let content = template_content(format)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }
    fs::write(path, content).map_err(|source| StorageError::FileIo {
        path: path.to_string_lossy().to_string(),
        source,
    })?;
    Ok(())
}
