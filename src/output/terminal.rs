//! Aligned table output for terminals

use std::io::Write;

use anyhow::Result;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::model::Table;

use super::OutputFormatter;

/// Box-drawn table followed by a `[rows x columns]` footer
pub struct TerminalOutput {
    max_rows: Option<usize>,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self { max_rows: None }
    }

    /// Print at most `max_rows` rows; the footer still reports the full count
    pub fn with_max_rows(max_rows: usize) -> Self {
        Self {
            max_rows: Some(max_rows),
        }
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        if table.column_count() > 0 {
            let mut builder = Builder::default();
            let mut header = vec![String::new()];
            header.extend(table.column_names().map(str::to_string));
            builder.push_record(header);

            let shown = self.max_rows.unwrap_or(table.row_count());
            for (pos, row) in table.rows.iter().take(shown).enumerate() {
                let mut record = vec![pos.to_string()];
                record.extend(row.cells.iter().map(|c| c.display().into_owned()));
                builder.push_record(record);
            }

            let mut display = builder.build();
            display.with(Style::sharp());
            writeln!(writer, "{}", display)?;
        }

        writeln!(
            writer,
            "[{} rows x {} columns]",
            table.row_count(),
            table.column_count()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellType, Column};

    fn render(output: &TerminalOutput, table: &Table) -> String {
        let mut buf = Vec::new();
        output.render(table, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_renders_positions_and_footer() {
        let mut table = Table::new(vec![Column::with_type("HVMID", 0, CellType::String)]);
        table.add_row(vec!["HVM0367".into()], 2);
        table.add_row(vec!["HVM0735".into()], 7);

        let text = render(&TerminalOutput::new(), &table);
        assert!(text.contains("HVMID"));
        assert!(text.contains("HVM0735"));
        assert!(text.ends_with("[2 rows x 1 columns]\n"));

        let truncated = render(&TerminalOutput::with_max_rows(1), &table);
        assert!(!truncated.contains("HVM0735"));
        assert!(truncated.ends_with("[2 rows x 1 columns]\n"));
    }

    #[test]
    fn test_empty_table_prints_only_footer() {
        assert_eq!(
            render(&TerminalOutput::new(), &Table::empty()),
            "[0 rows x 0 columns]\n"
        );
    }
}
