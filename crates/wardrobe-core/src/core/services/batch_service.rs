//! Batch evaluation of openings
//!
//! Rows are independent, so they are dimensioned in parallel. The service
//! borrows the caller's rows for the duration of one call and keeps nothing.

use super::types::{BatchReport, BatchRow, BatchSummary};
use crate::core::constants::SystemConstants;
use crate::core::engine::DimensioningEngine;
use crate::core::layout::{DiagramLayout, LayoutGenerator};
use crate::core::opening::OpeningInput;
use crate::error::InputError;
use rayon::prelude::*;

pub struct BatchService {
    engine: DimensioningEngine,
    layout: LayoutGenerator,
}

impl Default for BatchService {
    fn default() -> Self {
        Self::new(SystemConstants::default())
    }
}

impl BatchService {
    pub fn new(constants: SystemConstants) -> Self {
        let layout = LayoutGenerator::new(&constants);
        Self {
            engine: DimensioningEngine::new(constants),
            layout,
        }
    }

    pub fn engine(&self) -> &DimensioningEngine {
        &self.engine
    }

    /// Dimension every opening, preserving input order.
    pub fn evaluate(&self, openings: &[OpeningInput]) -> BatchReport {
        let rows: Vec<BatchRow> = openings
            .par_iter()
            .enumerate()
            .map(|(index, input)| BatchRow {
                row: index + 1,
                input: input.clone(),
                result: self.engine.dimension(input),
            })
            .collect();

        let summary = summarize(&rows);
        log::debug!(
            "Evaluated {} openings: {} OK, {} to check",
            summary.total,
            summary.ok,
            summary.check
        );

        BatchReport { rows, summary }
    }

    /// Dimension a single 1-based row.
    pub fn evaluate_row(&self, openings: &[OpeningInput], row: usize) -> crate::Result<BatchRow> {
        let input = select_row(openings, row)?;
        Ok(BatchRow {
            row,
            input: input.clone(),
            result: self.engine.dimension(input),
        })
    }

    /// Dimension a single 1-based row and lay out its diagram.
    pub fn layout_row(
        &self,
        openings: &[OpeningInput],
        row: usize,
    ) -> crate::Result<(BatchRow, DiagramLayout)> {
        let batch_row = self.evaluate_row(openings, row)?;
        let layout = self.layout.layout(&batch_row.input, &batch_row.result);
        Ok((batch_row, layout))
    }
}

fn select_row(openings: &[OpeningInput], row: usize) -> Result<&OpeningInput, InputError> {
    row.checked_sub(1)
        .and_then(|index| openings.get(index))
        .ok_or(InputError::RowNotFound {
            row,
            total: openings.len(),
        })
}

fn summarize(rows: &[BatchRow]) -> BatchSummary {
    rows.iter().fold(
        BatchSummary {
            total: rows.len(),
            ..BatchSummary::default()
        },
        |mut summary, row| {
            if row.is_ok() {
                summary.ok += 1;
            } else {
                summary.check += 1;
            }
            if row.input.door_system().is_fixed() {
                summary.fixed += 1;
            } else {
                summary.made_to_measure += 1;
            }
            summary
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;
    use crate::core::opening::{DoorSystem, FixedDoorWidth, TopLinerOption};
    use crate::core::result::Issue;

    fn openings() -> Vec<OpeningInput> {
        vec![
            OpeningInput::new(
                2200.0,
                2600.0,
                3,
                DoorSystem::MadeToMeasure {
                    top_liner: TopLinerOption::Dropdown108,
                },
            ),
            // infeasible: fixed doors in a short opening
            OpeningInput::new(
                2200.0,
                2200.0,
                3,
                DoorSystem::Fixed2223 {
                    door_width: FixedDoorWidth::W914,
                },
            ),
            OpeningInput::new(
                2200.0,
                2600.0,
                3,
                DoorSystem::Fixed2223 {
                    door_width: FixedDoorWidth::W762,
                },
            ),
        ]
    }

    #[test]
    fn test_evaluate_preserves_order() {
        let service = BatchService::default();
        let inputs = openings();
        let report = service.evaluate(&inputs);

        assert_eq!(report.rows.len(), 3);
        for (index, row) in report.rows.iter().enumerate() {
            assert_eq!(row.row, index + 1);
            assert_eq!(row.input, inputs[index]);
        }
        assert_eq!(report.rows[0].result.door_height_mm, 2402);
        assert_eq!(report.rows[2].result.dropdown_height_mm, 287);
    }

    #[test]
    fn test_infeasible_row_does_not_stop_the_batch() {
        let service = BatchService::default();
        let report = service.evaluate(&openings());

        assert_eq!(report.rows[1].result.issue, Issue::Check);
        assert_eq!(report.rows[2].result.issue, Issue::Ok);
        assert_eq!(
            report.summary,
            BatchSummary {
                total: 3,
                ok: 2,
                check: 1,
                made_to_measure: 1,
                fixed: 2,
            }
        );
        assert!(!report.all_ok());
        let problems: Vec<usize> = report.problem_rows().map(|r| r.row).collect();
        assert_eq!(problems, vec![2]);
    }

    #[test]
    fn test_evaluate_matches_single_row_evaluation() {
        let service = BatchService::default();
        let inputs = openings();
        let report = service.evaluate(&inputs);
        for row in &report.rows {
            let single = service
                .evaluate_row(&inputs, row.row)
                .expect("row exists");
            assert_eq!(&single, row);
            assert_eq!(report.row(row.row), Some(row));
        }
    }

    #[test]
    fn test_empty_batch() {
        let report = BatchService::default().evaluate(&[]);
        assert!(report.rows.is_empty());
        assert_eq!(report.summary.total, 0);
        assert!(report.all_ok());
    }

    #[test]
    fn test_row_out_of_range() {
        let service = BatchService::default();
        let inputs = openings();
        for row in [0, 4] {
            let err = service
                .evaluate_row(&inputs, row)
                .expect_err("row is out of range");
            assert!(matches!(
                err,
                AppError::Input(InputError::RowNotFound { total: 3, .. })
            ));
        }
    }

    #[test]
    fn test_layout_row() {
        let service = BatchService::default();
        let (row, layout) = service.layout_row(&openings(), 3).expect("row exists");
        assert_eq!(row.result.dropdown_height_mm, 287);
        assert_eq!(layout.dropdown_label, "287mm DROPDOWN");
        assert_eq!(layout.doors.len(), 3);
    }
}
