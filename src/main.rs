//! herbiv - Query the HerbiV reference tables

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use herbiv::config::{Config, OutputFormat, DATA_DIR_ENV};
use herbiv::output::render_to_stdout;
use herbiv::{Dataset, Herbiv, Table, DEFAULT_MIN_SCORE};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliDataset {
    Formula,
    FormulaTcmLinks,
    Tcm,
    TcmChemicalLinks,
    Chemicals,
    ChemicalProteinLinks,
    Proteins,
}

impl From<CliDataset> for Dataset {
    fn from(d: CliDataset) -> Self {
        match d {
            CliDataset::Formula => Dataset::Formula,
            CliDataset::FormulaTcmLinks => Dataset::FormulaTcmLinks,
            CliDataset::Tcm => Dataset::Tcm,
            CliDataset::TcmChemicalLinks => Dataset::TcmChemicalLinks,
            CliDataset::Chemicals => Dataset::Chemicals,
            CliDataset::ChemicalProteinLinks => Dataset::ChemicalProteinLinks,
            CliDataset::Proteins => Dataset::Proteins,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Table,
    Json,
    Csv,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Csv => OutputFormat::Csv,
        }
    }
}

/// Look up rows of a HerbiV table by column value
#[derive(Parser, Debug)]
#[command(name = "herbiv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Table to query
    #[arg(value_enum)]
    dataset: CliDataset,

    /// Column to match the items against
    #[arg(short, long)]
    by: String,

    /// Value to look up; repeat for several. Commas are part of the value
    #[arg(short, long = "item", required = true)]
    items: Vec<String>,

    /// Minimum combined score (0-1000) for chemical-protein-links
    #[arg(long, default_value_t = DEFAULT_MIN_SCORE, value_parser = clap::value_parser!(u16).range(0..=1000))]
    min_score: u16,

    /// Directory holding the HerbiV_*.csv tables
    #[arg(long, env = DATA_DIR_ENV, default_value = "data")]
    data_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: CliOutputFormat,

    /// Only print the result's row and column counts
    #[arg(long)]
    shape: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(found) => {
            if found {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1) // Nothing matched
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();

    let config = Config::new(cli.data_dir)
        .with_output_format(cli.format.into())
        .with_min_score(cli.min_score);
    let dataset: Dataset = cli.dataset.into();
    info!(
        "querying {} by {} in {}",
        dataset,
        cli.by,
        config.data_dir.display()
    );

    let herbiv = Herbiv::new(&config);
    let result: Table = match dataset {
        Dataset::ChemicalProteinLinks => {
            herbiv.chemical_protein_links(&cli.by, &cli.items, config.min_score)
        }
        other => herbiv.query(other, &cli.by, &cli.items),
    };

    if cli.shape {
        let (rows, columns) = result.shape();
        println!("{} rows x {} columns", rows, columns);
        return Ok(!result.is_empty());
    }

    render_to_stdout(&result, config.output_format)
        .with_context(|| format!("Failed to write {} result", dataset))?;

    Ok(!result.is_empty())
}
