//! Configuration handling for herbiv

use std::path::PathBuf;

use crate::filter::DEFAULT_MIN_SCORE;

/// Environment variable consulted by the CLI for the data directory
pub const DATA_DIR_ENV: &str = "HERBIV_DATA_DIR";

/// Output format for query results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Configuration for query operations
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the `HerbiV_*.csv` tables
    pub data_dir: PathBuf,
    /// Output format
    pub output_format: OutputFormat,
    /// Threshold for chemical-protein link queries that don't pass one
    pub min_score: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_format: OutputFormat::default(),
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

impl Config {
    /// Create a new Config reading tables from `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set the default link score threshold
    pub fn with_min_score(mut self, min_score: u16) -> Self {
        self.min_score = min_score;
        self
    }
}
