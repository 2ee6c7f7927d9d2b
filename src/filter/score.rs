//! Score-thresholded selection for link tables

use log::debug;

use crate::dataset::SCORE_COLUMN;
use crate::error::{or_empty, QueryError, Result};
use crate::model::{CellType, CellValue, Table};

use super::{column_index, RowFilter};

/// Threshold applied when the caller does not pick one
pub const DEFAULT_MIN_SCORE: u16 = 900;

const MAX_SCORE: u16 = 1000;

/// [`RowFilter`] selection plus an inclusive lower bound on a `0..=1000`
/// score column, which is rescaled to a `0.0..=1.0` fraction in the result.
#[derive(Debug, Clone)]
pub struct ScoreFilter {
    rows: RowFilter,
    score_column: String,
    min_score: u16,
}

impl ScoreFilter {
    pub fn new<I, V>(by: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        Self {
            rows: RowFilter::new(by, items),
            score_column: SCORE_COLUMN.to_string(),
            min_score: DEFAULT_MIN_SCORE,
        }
    }

    pub fn with_min_score(mut self, min_score: u16) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_score_column(mut self, column: impl Into<String>) -> Self {
        self.score_column = column.into();
        self
    }

    pub fn try_apply(&self, table: &Table) -> Result<Table> {
        if self.min_score > MAX_SCORE {
            return Err(QueryError::ScoreOutOfRange(self.min_score));
        }
        let score_idx = column_index(table, &self.score_column)?;

        let mut result = self.rows.try_apply(table)?;
        let min = f64::from(self.min_score);
        result.rows.retain(|row| {
            row.get(score_idx)
                .and_then(CellValue::as_f64)
                .is_some_and(|score| score >= min)
        });

        for row in &mut result.rows {
            if let Some(cell) = row.cells.get_mut(score_idx) {
                *cell = match cell.as_f64() {
                    Some(score) => CellValue::Float(score / f64::from(MAX_SCORE)),
                    None => CellValue::Null,
                };
            }
        }
        result.columns[score_idx].cell_type = CellType::Float;

        debug!(
            "{} row(s) scored at least {} on {}",
            result.row_count(),
            self.min_score,
            self.score_column
        );
        Ok(result)
    }

    pub fn apply(&self, table: &Table) -> Table {
        or_empty(self.try_apply(table))
    }
}
