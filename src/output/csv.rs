//! CSV output format

use std::io::Write;

use anyhow::Result;

use crate::model::Table;

use super::OutputFormatter;

/// Header row plus one record per row, missing values as empty fields
pub struct CsvOutput;

impl OutputFormatter for CsvOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        if table.column_count() == 0 {
            return Ok(());
        }

        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(table.column_names())?;
        for row in &table.rows {
            csv_writer.write_record(row.cells.iter().map(|c| c.display().into_owned()))?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
