//! Public queries over the HerbiV tables
//!
//! Each query loads its table fresh, selects the rows whose `by` column
//! holds one of `items`, and returns them re-indexed from zero. Nothing is
//! cached between calls. Results can be chained by feeding
//! [`Table::column_values`] of one query into the next:
//!
//! ```no_run
//! use herbiv::{Config, Herbiv};
//!
//! let herbiv = Herbiv::new(&Config::new("data"));
//! let chai_hu = herbiv.tcm_chemical_links("HVMID", ["HVM0367"]);
//! let chemicals = herbiv.chemicals("HVCID", chai_hu.column_values("HVCID"));
//! println!("{:?}", chemicals.shape());
//! ```

use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::{or_empty, Result};
use crate::filter::{RowFilter, ScoreFilter};
use crate::model::{CellValue, Table};
use crate::source::{CsvDirectory, TableLoader, TableSource};

/// Query handle bound to one table source
#[derive(Debug, Clone)]
pub struct Herbiv<S = CsvDirectory> {
    loader: TableLoader<S>,
    min_score: u16,
}

impl Herbiv<CsvDirectory> {
    /// Read tables from the configured data directory
    pub fn new(config: &Config) -> Self {
        Self::with_source(CsvDirectory::new(&config.data_dir)).with_min_score(config.min_score)
    }
}

impl<S: TableSource> Herbiv<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            loader: TableLoader::new(source),
            min_score: crate::filter::DEFAULT_MIN_SCORE,
        }
    }

    /// Threshold used by [`Herbiv::default_chemical_protein_links`]
    pub fn with_min_score(mut self, min_score: u16) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn loader(&self) -> &TableLoader<S> {
        &self.loader
    }

    /// Select from a known dataset with its standard dedup columns
    pub fn try_query<I, V>(&self, dataset: Dataset, by: &str, items: I) -> Result<Table>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let table = self.loader.try_load(dataset)?;
        let mut filter = RowFilter::new(by, items);
        if let Some(cols) = dataset.drop_duplicates() {
            filter = filter.with_drop_duplicates(cols);
        }
        filter.try_apply(&table)
    }

    pub fn query<I, V>(&self, dataset: Dataset, by: &str, items: I) -> Table
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        or_empty(self.try_query(dataset, by, items))
    }

    /// Select from any table under the source, with inferred column types
    pub fn try_query_file<I, V>(
        &self,
        name: &str,
        by: &str,
        items: I,
        drop_duplicates: Option<&[&str]>,
    ) -> Result<Table>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let table = self.loader.try_load_file(name)?;
        let mut filter = RowFilter::new(by, items);
        if let Some(cols) = drop_duplicates {
            filter = filter.with_drop_duplicates(cols);
        }
        filter.try_apply(&table)
    }

    pub fn query_file<I, V>(
        &self,
        name: &str,
        by: &str,
        items: I,
        drop_duplicates: Option<&[&str]>,
    ) -> Table
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        or_empty(self.try_query_file(name, by, items, drop_duplicates))
    }

    /// Formula records, e.g. `formulas("HVPID", ["HVP1625"])`
    pub fn formulas<I, V>(&self, by: &str, items: I) -> Table
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.query(Dataset::Formula, by, items)
    }

    /// Formula-TCM pairs (`HVPID`, `HVMID`) for the given formulas or TCM
    pub fn formula_tcm_links<I, V>(&self, by: &str, items: I) -> Table
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.query(Dataset::FormulaTcmLinks, by, items)
    }

    /// TCM (herb) records
    pub fn tcm<I, V>(&self, by: &str, items: I) -> Table
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.query(Dataset::Tcm, by, items)
    }

    /// TCM-ingredient pairs (`HVMID`, `HVCID`)
    pub fn tcm_chemical_links<I, V>(&self, by: &str, items: I) -> Table
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.query(Dataset::TcmChemicalLinks, by, items)
    }

    /// Chemical records, one per `HVCID`
    pub fn chemicals<I, V>(&self, by: &str, items: I) -> Table
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.query(Dataset::Chemicals, by, items)
    }

    pub fn try_chemical_protein_links<I, V>(&self, by: &str, items: I, min_score: u16) -> Result<Table>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let table = self.loader.try_load(Dataset::ChemicalProteinLinks)?;
        ScoreFilter::new(by, items)
            .with_min_score(min_score)
            .try_apply(&table)
    }

    /// Chemical-target links scoring at least `min_score` (out of 1000).
    ///
    /// `Combined_score` in the result is divided by 1000.
    pub fn chemical_protein_links<I, V>(&self, by: &str, items: I, min_score: u16) -> Table
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        or_empty(self.try_chemical_protein_links(by, items, min_score))
    }

    /// [`Herbiv::chemical_protein_links`] at the configured threshold
    pub fn default_chemical_protein_links<I, V>(&self, by: &str, items: I) -> Table
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.chemical_protein_links(by, items, self.min_score)
    }

    /// Protein records, one per `Ensembl_ID`
    pub fn proteins<I, V>(&self, by: &str, items: I) -> Table
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.query(Dataset::Proteins, by, items)
    }
}
