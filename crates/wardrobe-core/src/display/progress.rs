//! Status lines for CLI operations

/// Outcome of an operation as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    InProgress,
    Success,
    Warning,
    Error,
}

impl OperationStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            OperationStatus::InProgress => "⏳",
            OperationStatus::Success => "✅",
            OperationStatus::Warning => "⚠️",
            OperationStatus::Error => "❌",
        }
    }
}

/// Format an operation status line
pub fn format_status(operation: &str, status: OperationStatus) -> String {
    let message = match status {
        OperationStatus::InProgress => format!("In progress: {}", operation),
        OperationStatus::Success => format!("Completed: {}", operation),
        OperationStatus::Warning => format!("Warning: {}", operation),
        OperationStatus::Error => format!("Error: {}", operation),
    };
    // Add space before emoji to prevent terminal clipping
    format!(" {} {}", status.symbol(), message)
}

/// Display operation status on stderr, keeping stdout for results
pub fn display_status(operation: &str, status: OperationStatus) {
    eprintln!("{}", format_status(operation, status));
}
