//! Output formatting for query results

mod csv;
mod json;
mod terminal;

use std::io::Write;

use anyhow::Result;

use crate::config::OutputFormat;
use crate::model::Table;

pub use self::csv::CsvOutput;
pub use json::JsonOutput;
pub use terminal::TerminalOutput;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render a result table to a writer
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Table => Box::new(TerminalOutput::new()),
            OutputFormat::Json => Box::new(JsonOutput::new()),
            OutputFormat::Csv => Box::new(CsvOutput),
        }
    }
}

/// Render a result table to stdout
pub fn render_to_stdout(table: &Table, format: OutputFormat) -> Result<()> {
    let formatter = OutputFactory::create(format);
    let mut stdout = std::io::stdout().lock();
    formatter.render(table, &mut stdout)
}
