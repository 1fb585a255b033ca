use crate::core::constants::SystemConstants;
use crate::core::opening::{DoorSystem, TopLinerOption};
use crate::core::result::Issue;
use crate::core::services::types::{BatchReport, BatchRow, BatchSummary};
use crate::utils::text::{format_mm, truncate_text_unicode};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, presets};
use crossterm::terminal;

pub const HEIGHT_LIMIT_WARNING: &str = "Some openings exceed height limits or need a different / larger dropdown to fit perfectly \
     (after allowing for bottom liners and 54mm trackset tolerance).";

const DETAIL_CAPACITY: usize = 256;

struct ColumnWidths {
    opening: usize,
}

pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _)) => {
                let width = cols as usize;
                Some(width.clamp(40, 400))
            }
            Err(_) => Some(120),
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn bold_header(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).add_attribute(Attribute::Bold).fg(color)
        } else {
            Cell::new(text).add_attribute(Attribute::Bold)
        }
    }

    fn colored_cell(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).fg(color)
        } else {
            Cell::new(text)
        }
    }

    fn number_cell(&self, value: impl ToString) -> Cell {
        Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
    }

    fn issue_cell(&self, issue: Issue) -> Cell {
        let color = match issue {
            Issue::Ok => Color::Green,
            Issue::Check => Color::Red,
        };
        self.colored_cell(issue.badge(), color)
    }

    fn set_colored_headers(&self, table: &mut Table, headers: &[&str], color: Color) {
        let cells: Vec<Cell> = headers.iter().map(|h| self.bold_header(h, color)).collect();
        table.set_header(cells);
    }

    fn new_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        self.configure_table_width(&mut table);
        table
    }

    /// Every opening with its input echo and computed dimensions
    pub fn render_results(&self, rows: &[BatchRow]) -> String {
        let mut table = self.new_table();
        self.set_colored_headers(
            &mut table,
            &[
                "#",
                "Opening",
                "System",
                "W x H",
                "Doors",
                "Door H",
                "Door W",
                "Dropdown",
                "Side liner",
                "Build-out",
                "Net W",
                "Span",
                "Overlap/Tol",
                "Span diff",
                "Liners B/S/D",
                "Trackset",
                "Issue",
            ],
            Color::Cyan,
        );

        let widths = self.get_responsive_column_widths();

        for row in rows {
            let input = &row.input;
            let result = &row.result;
            let dropdown = match result.recommended_dropdown_mm {
                Some(mm) => format!("{} (bespoke)", mm),
                None => result.dropdown_height_mm.to_string(),
            };

            table.add_row(vec![
                self.colored_cell(&row.row.to_string(), Color::Cyan),
                Cell::new(truncate_text_unicode(&input.display_name(), widths.opening)),
                Cell::new(system_summary(input.door_system())),
                Cell::new(format!(
                    "{} x {}",
                    format_mm(input.width_mm()),
                    format_mm(input.height_mm())
                )),
                self.number_cell(input.door_count()),
                self.number_cell(result.door_height_mm),
                self.number_cell(result.door_width_mm),
                self.number_cell(dropdown),
                self.number_cell(format_mm(result.side_liner_thickness_mm)),
                self.number_cell(format_mm(result.buildout_per_side_mm)),
                self.number_cell(result.net_width_mm),
                self.number_cell(result.door_span_mm),
                self.number_cell(result.overlap_tolerance_mm),
                self.number_cell(format_mm(result.span_diff_mm)),
                Cell::new(format!(
                    "{} / {} / {}",
                    result.bottom_liner_length_mm,
                    result.side_liner_length_mm,
                    result.dropdown_length_mm
                )),
                self.number_cell(result.trackset_tolerance_mm),
                self.issue_cell(result.issue),
            ]);
        }

        table.to_string()
    }

    /// Rows whose issue is CHECK, with the full height status. `None` when every row is OK.
    pub fn render_problems(&self, report: &BatchReport) -> Option<String> {
        if report.all_ok() {
            return None;
        }

        let mut table = self.new_table();
        self.set_colored_headers(
            &mut table,
            &["#", "Opening", "System", "Height status"],
            Color::Red,
        );

        let widths = self.get_responsive_column_widths();
        for row in report.problem_rows() {
            table.add_row(vec![
                self.colored_cell(&row.row.to_string(), Color::Cyan),
                Cell::new(truncate_text_unicode(
                    &row.input.display_name(),
                    widths.opening,
                )),
                Cell::new(system_summary(row.input.door_system())),
                self.colored_cell(&row.result.height_status.to_string(), Color::Yellow),
            ]);
        }

        Some(format!("Openings to check\n{}", table))
    }

    pub fn render_summary(&self, summary: &BatchSummary) -> String {
        format!(
            "📊 {} openings ({} made to measure, {} fixed) | ✅ {} OK | 🔴 {} to check",
            summary.total, summary.made_to_measure, summary.fixed, summary.ok, summary.check
        )
    }

    /// Door sizes sheet for one opening
    pub fn render_detail(&self, row: &BatchRow, constants: &SystemConstants) -> String {
        let input = &row.input;
        let result = &row.result;
        let mut entries: Vec<(String, String)> = vec![
            ("Door system".into(), input.door_system().label().into()),
            ("Issue".into(), result.issue.badge().into()),
            ("Height status".into(), result.height_status.to_string()),
        ];

        match input.door_system() {
            DoorSystem::Fixed2223 { door_width } => {
                entries.push((
                    "Fixed door width selected".into(),
                    format!("{} mm", format_mm(door_width.mm())),
                ));
            }
            DoorSystem::MadeToMeasure { top_liner } => {
                entries.push(("Top liner option".into(), top_liner.label().into()));
                entries.push((
                    "Per-meeting overlap".into(),
                    format!("{} mm", format_mm(constants.door_overlap_mm)),
                ));
                if top_liner == TopLinerOption::Bespoke {
                    entries.push((
                        "Bespoke dropdown used".into(),
                        format!("{} mm (auto-calculated)", result.dropdown_height_mm),
                    ));
                }
            }
        }

        entries.extend([
            ("Number of doors".into(), result.doors_used.to_string()),
            ("Door height".into(), format!("{} mm", result.door_height_mm)),
            ("Door width (each)".into(), format!("{} mm", result.door_width_mm)),
            ("Door span (total)".into(), format!("{} mm", result.door_span_mm)),
            (
                "Net opening width".into(),
                format!("{} mm", result.net_width_mm),
            ),
            (
                "Side liner thickness (each)".into(),
                format!("{} mm", format_mm(result.side_liner_thickness_mm)),
            ),
            (
                "Build-out per side".into(),
                format!(
                    "{} mm (above {}mm default)",
                    format_mm(result.buildout_per_side_mm),
                    format_mm(constants.side_liner_thickness_mm)
                ),
            ),
            (
                "Total overlap / tolerance".into(),
                format!("{} mm", result.overlap_tolerance_mm),
            ),
        ]);

        if input.door_system().is_fixed() {
            entries.push((
                "Span difference".into(),
                format!("{} mm", format_mm(result.span_diff_mm)),
            ));
        }

        entries.extend([
            (
                "Trackset tolerance".into(),
                format!("{} mm", result.trackset_tolerance_mm),
            ),
            (
                "Height components".into(),
                format!(
                    "{}mm bottom liners + {}mm trackset tolerance + {}mm dropdown + {}mm door",
                    format_mm(constants.bottom_liner_thickness_mm),
                    result.trackset_tolerance_mm,
                    result.dropdown_height_mm,
                    result.door_height_mm
                ),
            ),
            (
                "Liner lengths".into(),
                format!(
                    "bottom {} mm, side {} mm, dropdown {} mm",
                    result.bottom_liner_length_mm,
                    result.side_liner_length_mm,
                    result.dropdown_length_mm
                ),
            ),
        ]);

        let mut output = String::with_capacity(DETAIL_CAPACITY);
        output.push_str(&format!(
            "🚪 Row {}: {} ({} x {} mm, {} doors)\n",
            row.row,
            input.display_name(),
            format_mm(input.width_mm()),
            format_mm(input.height_mm()),
            input.door_count()
        ));
        output.push_str(&self.render_key_value_table(&["Door sizes", "Value"], &entries));
        output
    }

    /// Effective system constants and settings
    pub fn render_constants(
        &self,
        constants: &SystemConstants,
        default_format: Option<&str>,
        config_path: Option<&str>,
    ) -> String {
        let mut entries: Vec<(String, String)> = vec![
            (
                "Config file".into(),
                config_path.unwrap_or("(not found)").into(),
            ),
            (
                "Default format".into(),
                default_format.unwrap_or("table").into(),
            ),
            (
                "Bottom liner thickness".into(),
                format!("{} mm", format_mm(constants.bottom_liner_thickness_mm)),
            ),
            (
                "Side liner thickness".into(),
                format!("{} mm", format_mm(constants.side_liner_thickness_mm)),
            ),
            (
                "Trackset tolerance".into(),
                format!("{} mm", format_mm(constants.trackset_tolerance_mm)),
            ),
            (
                "Max door height".into(),
                format!("{} mm", format_mm(constants.max_door_height_mm)),
            ),
            (
                "Max dropdown".into(),
                format!("{} mm", format_mm(constants.max_dropdown_mm)),
            ),
            (
                "Fixed door height".into(),
                format!("{} mm", format_mm(constants.fixed_door_height_mm)),
            ),
            (
                "Made-to-measure overlap per meeting".into(),
                format!("{} mm", format_mm(constants.door_overlap_mm)),
            ),
        ];

        let mut tolerances = constants.overlap_tolerances.clone();
        tolerances.sort_by_key(|entry| entry.doors);
        for entry in &tolerances {
            entries.push((
                format!("Fixed overlap tolerance, {} doors", entry.doors),
                format!("{} mm", format_mm(entry.tolerance_mm)),
            ));
        }
        entries.push((
            "Fixed overlap tolerance, other".into(),
            format!("{} mm", format_mm(constants.default_overlap_tolerance_mm)),
        ));

        self.render_key_value_table(&["Setting", "Value"], &entries)
    }

    fn render_key_value_table(&self, headers: &[&str], entries: &[(String, String)]) -> String {
        let mut table = self.new_table();
        self.set_colored_headers(&mut table, headers, Color::Cyan);
        for (key, value) in entries {
            table.add_row(vec![self.colored_cell(key, Color::DarkGrey), Cell::new(value)]);
        }
        table.to_string()
    }

    fn configure_table_width(&self, table: &mut Table) {
        let width = self
            .max_width
            .map(|w| if w > 20 { w - 2 } else { w.max(40) })
            .unwrap_or(120);
        table.set_width(width as u16);
    }

    fn get_responsive_column_widths(&self) -> ColumnWidths {
        match self.max_width.unwrap_or(120) {
            0..=79 => ColumnWidths { opening: 12 },
            80..=159 => ColumnWidths { opening: 24 },
            _ => ColumnWidths { opening: 40 },
        }
    }
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

/// Short door system description for table cells
pub fn system_summary(door_system: DoorSystem) -> String {
    match door_system {
        DoorSystem::MadeToMeasure { top_liner } => format!("MTM, {}", top_liner.label()),
        DoorSystem::Fixed2223 { door_width } => {
            format!("Fixed 2223, {}mm", format_mm(door_width.mm()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::opening::{FixedDoorWidth, OpeningInput};
    use crate::core::services::batch_service::BatchService;

    fn display() -> TableDisplay {
        TableDisplay::new().with_max_width(400).with_colors(false)
    }

    fn report() -> BatchReport {
        let inputs = vec![
            OpeningInput::new(
                2200.0,
                2600.0,
                3,
                DoorSystem::MadeToMeasure {
                    top_liner: TopLinerOption::Dropdown108,
                },
            )
            .with_labels(Some("Job 1".to_string()), Some("Wardrobe A".to_string())),
            OpeningInput::new(
                2200.0,
                2200.0,
                3,
                DoorSystem::Fixed2223 {
                    door_width: FixedDoorWidth::W914,
                },
            ),
        ];
        BatchService::default().evaluate(&inputs)
    }

    #[test]
    fn test_table_display_creation() {
        let display = TableDisplay::new();
        assert!(display.max_width.is_some());
        assert!(display.use_colors);
    }

    #[test]
    fn test_render_results() {
        let output = display().render_results(&report().rows);
        assert!(output.contains("Job 1 – Wardrobe A"));
        assert!(output.contains("2402"));
        assert!(output.contains("2164"));
        assert!(output.contains("✅ OK"));
        assert!(output.contains("🔴 Check height"));
    }

    #[test]
    fn test_render_problems() {
        let report = report();
        let output = display().render_problems(&report).expect("one problem row");
        assert!(output.starts_with("Openings to check"));
        assert!(output.contains("Opening too small"));
        assert!(!output.contains("Wardrobe A"));
    }

    #[test]
    fn test_render_problems_none_when_all_ok() {
        let inputs = vec![OpeningInput::new(
            2200.0,
            2600.0,
            3,
            DoorSystem::default(),
        )];
        let report = BatchService::default().evaluate(&inputs);
        assert!(display().render_problems(&report).is_none());
    }

    #[test]
    fn test_render_summary() {
        let summary = report().summary;
        assert_eq!(
            display().render_summary(&summary),
            "📊 2 openings (1 made to measure, 1 fixed) | ✅ 1 OK | 🔴 1 to check"
        );
    }

    #[test]
    fn test_render_detail_made_to_measure() {
        let report = report();
        let output = display().render_detail(&report.rows[0], &SystemConstants::default());
        assert!(output.starts_with("🚪 Row 1: Job 1 – Wardrobe A (2200 x 2600 mm, 3 doors)"));
        assert!(output.contains("108mm Dropdown"));
        assert!(output.contains(
            "36mm bottom liners + 54mm trackset tolerance + 108mm dropdown + 2402mm door"
        ));
        assert!(!output.contains("Span difference"));
    }

    #[test]
    fn test_render_detail_fixed() {
        let report = report();
        let output = display().render_detail(&report.rows[1], &SystemConstants::default());
        assert!(output.contains("Fixed door width selected"));
        assert!(output.contains("914 mm"));
        assert!(output.contains("Span difference"));
        assert!(!output.contains("Per-meeting overlap"));
    }

    #[test]
    fn test_render_constants() {
        let output = display().render_constants(&SystemConstants::default(), Some("csv"), None);
        assert!(output.contains("2431 mm"));
        assert!(output.contains("Fixed overlap tolerance, 2 doors"));
        assert!(output.contains("75 mm"));
        assert!(output.contains("csv"));
        assert!(output.contains("(not found)"));
    }

    #[test]
    fn test_system_summary() {
        assert_eq!(
            system_summary(DoorSystem::MadeToMeasure {
                top_liner: TopLinerOption::Bespoke
            }),
            "MTM, Bespoke dropdown (auto)"
        );
        assert_eq!(
            system_summary(DoorSystem::Fixed2223 {
                door_width: FixedDoorWidth::W610
            }),
            "Fixed 2223, 610mm"
        );
    }
}
