//! Composite keys over a subset of columns

use crate::error::{QueryError, Result};

use super::table::{CellValue, Row, Table};

/// Builds the duplicate-identity key of a row from a fixed set of columns
#[derive(Debug, Clone)]
pub struct KeyBuilder {
    column_indices: Vec<usize>,
}

impl KeyBuilder {
    /// Resolve key columns by name; every name must exist in `table`
    pub fn with_column_names<S: AsRef<str>>(table: &Table, names: &[S]) -> Result<Self> {
        let column_indices = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                table
                    .column_index(name)
                    .ok_or_else(|| QueryError::MissingColumn {
                        column: name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { column_indices })
    }

    /// Key of `row`: its cells at the key columns, in key-column order
    pub fn build_key<'r>(&self, row: &'r Row) -> Vec<&'r CellValue> {
        self.column_indices
            .iter()
            .filter_map(|&i| row.get(i))
            .collect()
    }

    /// Get the column indices
    pub fn column_indices(&self) -> &[usize] {
        &self.column_indices
    }
}
