//! JSON output format

use std::io::Write;

use anyhow::Result;
use indexmap::IndexMap;

use crate::model::{CellValue, Table};

use super::OutputFormatter;

/// JSON array of records, one object per row with keys in column order
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows as ordered column-name to value maps
pub fn records(table: &Table) -> Vec<IndexMap<&str, &CellValue>> {
    table
        .rows
        .iter()
        .map(|row| table.column_names().zip(row.cells.iter()).collect())
        .collect()
}

impl OutputFormatter for JsonOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        let output = records(table);

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &output)?;
        } else {
            serde_json::to_writer(&mut *writer, &output)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
