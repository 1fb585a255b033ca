//! File system and path helpers

use crate::error::ConfigError;
use std::path::Path;

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists<P: AsRef<Path>>(path: P) -> crate::Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| ConfigError::InvalidValue {
            field: "directory_path".to_string(),
            value: path.to_string_lossy().to_string(),
            reason: format!("Failed to create directory: {}", e),
        })?;
    }
    Ok(())
}

/// Lower-cased file extension, if any
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}
