//! Row selection over a loaded table

mod score;

use log::debug;
use rustc_hash::FxHashSet;

use crate::error::{or_empty, QueryError, Result};
use crate::model::{CellValue, Column, KeyBuilder, Table};

pub use score::{ScoreFilter, DEFAULT_MIN_SCORE};

/// Selects the rows whose `by` column holds one of `items`.
///
/// Survivors keep their source order and are optionally deduplicated on a
/// subset of columns, keeping the first row of each duplicate group.
#[derive(Debug, Clone)]
pub struct RowFilter {
    by: String,
    items: Vec<CellValue>,
    drop_duplicates: Option<Vec<String>>,
}

impl RowFilter {
    pub fn new<I, V>(by: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        Self {
            by: by.into(),
            items: items.into_iter().map(Into::into).collect(),
            drop_duplicates: None,
        }
    }

    /// Remove rows that repeat an earlier row's values on `columns`
    pub fn with_drop_duplicates<S: AsRef<str>>(mut self, columns: &[S]) -> Self {
        self.drop_duplicates = Some(columns.iter().map(|c| c.as_ref().to_string()).collect());
        self
    }

    /// Apply to `table`, surfacing a missing column as an error
    pub fn try_apply(&self, table: &Table) -> Result<Table> {
        let by_idx = column_index(table, &self.by)?;
        let keys = self.key_set(&table.columns[by_idx]);

        let dedup = match &self.drop_duplicates {
            Some(cols) => Some(KeyBuilder::with_column_names(table, cols)?),
            None => None,
        };

        let mut result = table.with_same_columns();
        let mut seen = FxHashSet::default();
        for row in &table.rows {
            let selected = row.get(by_idx).is_some_and(|cell| keys.contains(cell));
            if !selected {
                continue;
            }
            if let Some(key) = &dedup {
                if !seen.insert(key.build_key(row)) {
                    continue;
                }
            }
            result.rows.push(row.clone());
        }

        debug!(
            "{} of {} rows matched {} on {} key(s)",
            result.row_count(),
            table.row_count(),
            self.by,
            keys.len()
        );
        Ok(result)
    }

    /// Apply to `table`; a missing column yields an empty table
    pub fn apply(&self, table: &Table) -> Table {
        or_empty(self.try_apply(table))
    }

    /// Items converted to the column's type; items with no such form are dropped
    fn key_set(&self, column: &Column) -> FxHashSet<CellValue> {
        self.items
            .iter()
            .filter_map(|item| column.cell_type.coerce(item))
            .collect()
    }
}

fn column_index(table: &Table, name: &str) -> Result<usize> {
    table
        .column_index(name)
        .ok_or_else(|| QueryError::MissingColumn {
            column: name.to_string(),
        })
}
