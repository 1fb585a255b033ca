pub mod export;
pub mod progress;
pub mod table;

pub use export::{CSV_COLUMNS, OutputFormat, export_report, to_csv, to_json};
pub use progress::{OperationStatus, display_status, format_status};
pub use table::{HEIGHT_LIMIT_WARNING, TableDisplay};
