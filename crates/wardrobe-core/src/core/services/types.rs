use crate::core::opening::OpeningInput;
use crate::core::result::DimensionResult;
use serde::Serialize;

/// One evaluated opening. `row` is 1-based, matching the openings file order.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BatchRow {
    pub row: usize,
    pub input: OpeningInput,
    pub result: DimensionResult,
}

impl BatchRow {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Aggregate counts over a batch
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub ok: usize,
    pub check: usize,
    pub made_to_measure: usize,
    pub fixed: usize,
}

impl BatchSummary {
    pub fn needs_attention(&self) -> bool {
        self.check > 0
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct BatchReport {
    pub rows: Vec<BatchRow>,
    pub summary: BatchSummary,
}

impl BatchReport {
    pub fn problem_rows(&self) -> impl Iterator<Item = &BatchRow> {
        self.rows.iter().filter(|row| !row.is_ok())
    }

    pub fn all_ok(&self) -> bool {
        !self.summary.needs_attention()
    }

    /// Look up a row by its 1-based number.
    pub fn row(&self, row: usize) -> Option<&BatchRow> {
        row.checked_sub(1).and_then(|index| self.rows.get(index))
    }
}
