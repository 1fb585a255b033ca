use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("InputError: {0}")]
    Input(#[from] InputError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Structurally invalid opening rows. These are caller bugs, not domain outcomes:
/// an opening that cannot be fitted is reported through its height status instead.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Row {row}: unknown door system '{value}'")]
    UnknownDoorSystem { row: usize, value: String },
    #[error("Row {row}: unknown top liner option '{value}'")]
    UnknownTopLiner { row: usize, value: String },
    #[error("Row {row}: field '{field}' must be a finite number")]
    NonFiniteValue { row: usize, field: String },
    #[error("Row {row}: {field} = {value} is outside {min}..={max}")]
    OutOfRange {
        row: usize,
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("Row {row} not found ({total} openings loaded)")]
    RowNotFound { row: usize, total: usize },
    #[error("No openings found")]
    Empty,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },
    #[error("Unsupported file format: {path}")]
    UnsupportedFormat { path: String },
    #[error("Serialization failed: {message}")]
    SerializeFailed { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Table formatting failed: {0}")]
    TableFormat(String),
    #[error("Terminal output error: {0}")]
    TerminalOutput(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Input(input_error) => match input_error {
                InputError::RowNotFound { .. } | InputError::Empty => ErrorSeverity::Medium,
                _ => ErrorSeverity::High,
            },
            AppError::Storage(StorageError::ConfigDirNotFound) => ErrorSeverity::Critical,
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Display(_) => ErrorSeverity::Low,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Input(InputError::UnknownDoorSystem { .. }) => Some(
                "door_system must be 'made-to-measure' or 'fixed-2223'".to_string(),
            ),
            AppError::Input(InputError::UnknownTopLiner { .. }) => Some(
                "top_liner_option must be one of 108, 90, 50, 0 or 'bespoke'".to_string(),
            ),
            AppError::Input(InputError::OutOfRange { .. }) => {
                Some("drop --strict to clamp under-range values instead".to_string())
            }
            AppError::Input(InputError::RowNotFound { .. }) => {
                Some("'wardrobe-cli calc <file>' lists rows with their numbers".to_string())
            }
            AppError::Storage(StorageError::UnsupportedFormat { .. }) => {
                Some("openings files must end in .toml or .json".to_string())
            }
            AppError::Config(ConfigError::InvalidValue { reason, .. }) => Some(reason.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_display() {
        let err = InputError::UnknownDoorSystem {
            row: 3,
            value: "pocket".to_string(),
        };
        assert_eq!(format!("{}", err), "Row 3: unknown door system 'pocket'");

        let err = InputError::OutOfRange {
            row: 1,
            field: "width_mm".to_string(),
            value: 120.0,
            min: 300.0,
            max: f64::MAX,
        };
        assert!(format!("{}", err).starts_with("Row 1: width_mm = 120"));
    }

    #[test]
    fn test_config_error_display() {
        let config_err = ConfigError::InvalidValue {
            field: "max_dropdown".to_string(),
            value: "-1".to_string(),
            reason: "must not be negative".to_string(),
        };
        assert!(matches!(config_err, ConfigError::InvalidValue { .. }));
        if let ConfigError::InvalidValue {
            field,
            value,
            reason,
        } = config_err
        {
            assert_eq!(field, "max_dropdown");
            assert_eq!(value, "-1");
            assert_eq!(reason, "must not be negative");
        }
    }

    #[test]
    fn test_app_error_from_conversions() {
        let app_err: AppError = InputError::Empty.into();
        assert!(matches!(app_err, AppError::Input(InputError::Empty)));

        let app_err: AppError = StorageError::ConfigDirNotFound.into();
        assert!(matches!(
            app_err,
            AppError::Storage(StorageError::ConfigDirNotFound)
        ));

        let app_err: AppError = CliError::InvalidArguments("bad".to_string()).into();
        assert_eq!(format!("{}", app_err), "CliError: Invalid arguments: bad");
    }

    #[test]
    fn test_error_severity() {
        let app_err = AppError::Input(InputError::UnknownTopLiner {
            row: 1,
            value: "x".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::High);

        let app_err = AppError::Input(InputError::RowNotFound { row: 9, total: 2 });
        assert_eq!(app_err.severity(), ErrorSeverity::Medium);

        let app_err = AppError::Display(DisplayError::TableFormat("x".to_string()));
        assert_eq!(app_err.severity(), ErrorSeverity::Low);
        assert_eq!(ErrorSeverity::Critical.emoji(), "🚨");
    }

    #[test]
    fn test_troubleshooting_hints() {
        let app_err = AppError::Input(InputError::UnknownDoorSystem {
            row: 1,
            value: "x".to_string(),
        });
        assert!(
            app_err
                .troubleshooting_hint()
                .is_some_and(|h| h.contains("fixed-2223"))
        );

        let app_err = AppError::Display(DisplayError::TerminalOutput("x".to_string()));
        assert!(app_err.troubleshooting_hint().is_none());
    }
}
