//! CSV and JSON serialisation of batch results

use crate::core::opening::DoorSystem;
use crate::core::services::types::{BatchReport, BatchRow};
use crate::error::{CliError, StorageError};
use crate::utils::text::format_mm;
use std::fmt;
use std::str::FromStr;

/// CSV columns: the input echo first, then every result field.
pub const CSV_COLUMNS: [&str; 26] = [
    "row",
    "job",
    "opening",
    "width_mm",
    "height_mm",
    "doors",
    "door_system",
    "top_liner_option",
    "fixed_door_width_mm",
    "door_height_mm",
    "door_width_mm",
    "doors_used",
    "dropdown_height_mm",
    "recommended_dropdown_mm",
    "side_liner_thickness_mm",
    "buildout_per_side_mm",
    "net_width_mm",
    "door_span_mm",
    "overlap_tolerance_mm",
    "span_diff_mm",
    "bottom_liner_length_mm",
    "side_liner_length_mm",
    "dropdown_length_mm",
    "trackset_tolerance_mm",
    "height_status",
    "issue",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidArguments(format!(
                "Unknown format '{}': expected table, csv or json",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// One CSV record for a row, in [`CSV_COLUMNS`] order.
pub fn csv_values(row: &BatchRow) -> Vec<String> {
    let input = &row.input;
    let result = &row.result;
    let (top_liner, fixed_width) = match input.door_system() {
        DoorSystem::MadeToMeasure { top_liner } => (top_liner.label().to_string(), String::new()),
        DoorSystem::Fixed2223 { door_width } => (String::new(), format_mm(door_width.mm())),
    };

    vec![
        row.row.to_string(),
        input.job().unwrap_or_default().to_string(),
        input.opening().unwrap_or_default().to_string(),
        format_mm(input.width_mm()),
        format_mm(input.height_mm()),
        input.door_count().to_string(),
        input.door_system().label().to_string(),
        top_liner,
        fixed_width,
        result.door_height_mm.to_string(),
        result.door_width_mm.to_string(),
        result.doors_used.to_string(),
        result.dropdown_height_mm.to_string(),
        result
            .recommended_dropdown_mm
            .map(|mm| mm.to_string())
            .unwrap_or_default(),
        format_mm(result.side_liner_thickness_mm),
        format_mm(result.buildout_per_side_mm),
        result.net_width_mm.to_string(),
        result.door_span_mm.to_string(),
        result.overlap_tolerance_mm.to_string(),
        format_mm(result.span_diff_mm),
        result.bottom_liner_length_mm.to_string(),
        result.side_liner_length_mm.to_string(),
        result.dropdown_length_mm.to_string(),
        result.trackset_tolerance_mm.to_string(),
        result.height_status.to_string(),
        result.issue.to_string(),
    ]
}

/// Header line plus one line per opening, newline terminated.
pub fn to_csv<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = &'a BatchRow>,
{
    let header: Vec<String> = CSV_COLUMNS.iter().map(|c| c.to_string()).collect();
    let mut output = escape_csv_row(&header);
    output.push('\n');
    for row in rows {
        output.push_str(&escape_csv_row(&csv_values(row)));
        output.push('\n');
    }
    output
}

/// Pretty JSON array of `{ row, input, result }` objects.
pub fn to_json<'a, I>(rows: I) -> Result<String, StorageError>
where
    I: IntoIterator<Item = &'a BatchRow>,
{
    let rows: Vec<&BatchRow> = rows.into_iter().collect();
    serde_json::to_string_pretty(&rows).map_err(|e| StorageError::SerializeFailed {
        message: format!("Failed to serialize results: {}", e),
    })
}

/// Render a whole report in a machine-readable format.
pub fn export_report(
    report: &BatchReport,
    format: OutputFormat,
    problems_only: bool,
) -> Result<String, StorageError> {
    let rows: Vec<&BatchRow> = if problems_only {
        report.problem_rows().collect()
    } else {
        report.rows.iter().collect()
    };
    match format {
        OutputFormat::Csv => Ok(to_csv(rows)),
        OutputFormat::Json | OutputFormat::Table => to_json(rows),
    }
}

/// Quote fields containing separators, quotes or line breaks (RFC 4180)
fn escape_csv_row(values: &[String]) -> String {
    values
        .iter()
        .map(|v| {
            if v.contains(',') || v.contains('"') || v.contains('\n') || v.contains('\r') {
                format!("\"{}\"", v.replace('"', "\"\""))
            } else {
                v.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
