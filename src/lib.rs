//! herbiv - Query layer over the HerbiV reference tables
//!
//! Looks up rows of the HerbiV formula, TCM, chemical and protein tables
//! (and the link tables between them) by membership of one column in a key
//! set. Missing tables or columns produce an empty result rather than an
//! error; the `try_*` APIs expose the underlying [`QueryError`].

pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod model;
pub mod output;
pub mod query;
pub mod source;

pub use config::Config;
pub use dataset::Dataset;
pub use error::QueryError;
pub use filter::{RowFilter, ScoreFilter, DEFAULT_MIN_SCORE};
pub use model::{CellValue, Table};
pub use query::Herbiv;
