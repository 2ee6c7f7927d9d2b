//! Table, Row, and Cell data structures

use std::borrow::Cow;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::schema::Column;

/// A cell value with type information
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Int(i64),
    Float(f64),
    String(String),
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => true,
            (CellValue::Int(a), CellValue::Int(b)) => a == b,
            (CellValue::Float(a), CellValue::Float(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (CellValue::String(a), CellValue::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for CellValue {}

impl Hash for CellValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::Null => {}
            CellValue::Int(i) => i.hash(state),
            // 0.0 and -0.0 compare equal, so they must hash equal
            CellValue::Float(f) if *f == 0.0 => 0.0f64.to_bits().hash(state),
            CellValue::Float(f) if f.is_nan() => f64::NAN.to_bits().hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::String(s) => s.hash(state),
        }
    }
}

impl CellValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Numeric view of the value, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Convert to a display string
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed(""),
            CellValue::Int(i) => Cow::Owned(i.to_string()),
            CellValue::Float(f) => Cow::Owned(f.to_string()),
            CellValue::String(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        CellValue::String(s.clone())
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<&CellValue> for CellValue {
    fn from(v: &CellValue) -> Self {
        v.clone()
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

/// A row in the table
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Cell values in column order
    pub cells: Vec<CellValue>,
    /// Original line number in the source file (1-indexed, header is line 1)
    pub source_line: usize,
}

impl Row {
    pub fn new(cells: Vec<CellValue>, source_line: usize) -> Self {
        Self { cells, source_line }
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }
}

/// A table containing columns and rows.
///
/// A row's position is its index in `rows`, so any table built by this crate
/// is indexed `0..row_count()` with no gaps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Column definitions
    pub columns: Vec<Column>,
    /// All rows in the table
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a new table with column definitions and no rows
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// The soft-fail result: no rows and no columns
    pub fn empty() -> Self {
        Self::default()
    }

    /// A table with the same columns as this one and no rows
    pub fn with_same_columns(&self) -> Self {
        Self::new(self.columns.clone())
    }

    /// Add a row to the table
    pub fn add_row(&mut self, cells: Vec<CellValue>, source_line: usize) {
        self.rows.push(Row::new(cells, source_line));
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Get column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at a row position in the named column
    pub fn get(&self, row: usize, column: &str) -> Option<&CellValue> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }

    /// All values of one column in row order, for feeding into another query
    pub fn column_values(&self, column: &str) -> Vec<CellValue> {
        match self.column_index(column) {
            Some(idx) => self
                .rows
                .iter()
                .filter_map(|r| r.get(idx).cloned())
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellType;

    fn links() -> Table {
        let mut table = Table::new(vec![
            Column::with_type("HVPID", 0, CellType::String),
            Column::with_type("HVMID", 1, CellType::String),
        ]);
        table.add_row(vec!["HVP1625".into(), "HVM0367".into()], 2);
        table.add_row(vec!["HVP1625".into(), "HVM0735".into()], 3);
        table
    }

    #[test]
    fn test_shape_and_lookup() {
        let table = links();
        assert_eq!(table.shape(), (2, 2));
        assert_eq!(table.get(1, "HVMID"), Some(&CellValue::from("HVM0735")));
        assert_eq!(table.get(2, "HVMID"), None);
        assert_eq!(table.get(0, "missing"), None);
    }

    #[test]
    fn test_column_values() {
        let table = links();
        assert_eq!(
            table.column_values("HVMID"),
            vec![CellValue::from("HVM0367"), CellValue::from("HVM0735")]
        );
        assert!(table.column_values("nope").is_empty());
    }

    #[test]
    fn test_empty() {
        assert_eq!(Table::empty().shape(), (0, 0));
        assert_eq!(links().with_same_columns().shape(), (0, 2));
    }

    #[test]
    fn test_float_zero_hash_consistent() {
        use rustc_hash::FxHashSet;
        let set: FxHashSet<CellValue> = [CellValue::Float(0.0)].into_iter().collect();
        assert!(set.contains(&CellValue::Float(-0.0)));
    }
}
