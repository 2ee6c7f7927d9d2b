//! Error types for table loading and filtering

use std::path::PathBuf;

use log::{debug, warn};
use thiserror::Error;

use crate::model::{CellType, Table};

/// Everything that can stop a query from producing rows.
///
/// The default query API absorbs these into an empty [`Table`](crate::Table);
/// the `try_*` variants hand them back to the caller.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("table source not found: {}", path.display())]
    MissingSource { path: PathBuf },

    #[error("column not found: {column}")]
    MissingColumn { column: String },

    #[error("failed to read {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: required column `{column}` is absent", path.display())]
    SchemaMismatch { path: PathBuf, column: String },

    #[error("column `{column}` line {line}: `{value}` is not a valid {expected}")]
    InvalidCell {
        column: String,
        line: usize,
        value: String,
        expected: CellType,
    },

    #[error("{}: line {line} has {found} fields, header has {expected}", path.display())]
    RaggedRow {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("minimum score {0} is outside 0..=1000")]
    ScoreOutOfRange(u16),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl QueryError {
    /// Missing tables and columns are expected outcomes of a lookup, not faults
    /// in the data.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            QueryError::MissingSource { .. } | QueryError::MissingColumn { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;

/// Collapse a strict result into the soft-fail default: an empty table.
pub fn or_empty(result: Result<Table>) -> Table {
    match result {
        Ok(table) => table,
        Err(e) if e.is_expected() => {
            debug!("{e}; returning empty table");
            Table::empty()
        }
        Err(e) => {
            warn!("{e}; returning empty table");
            Table::empty()
        }
    }
}
