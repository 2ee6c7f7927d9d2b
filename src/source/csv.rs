//! CSV directory source

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{QueryError, Result};
use crate::model::{CellType, ColumnSpec, Column, Table};

use super::TableSource;

/// Reads `<root>/<name>` as a comma-delimited file with a header row
#[derive(Debug, Clone)]
pub struct CsvDirectory {
    root: PathBuf,
}

impl CsvDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TableSource for CsvDirectory {
    fn read(&self, name: &str, pinned: &[ColumnSpec]) -> Result<Table> {
        let path = self.root.join(name);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(QueryError::MissingSource { path });
            }
            Err(e) => return Err(e.into()),
        };

        let table = read_table(BufReader::new(file), &path, pinned)?;
        debug!(
            "loaded {} rows x {} columns from {}",
            table.row_count(),
            table.column_count(),
            path.display()
        );
        Ok(table)
    }
}

/// Parse CSV text into a [`Table`].
///
/// Pinned columns must be present and every value must parse as the declared
/// type. Every other column gets the narrowest type that holds all of its
/// values, and its cells are parsed as that type.
pub fn read_table<R: Read>(reader: R, path: &Path, pinned: &[ColumnSpec]) -> Result<Table> {
    let csv_error = |source| QueryError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(csv_error)?.clone();
    let width = headers.len();

    for spec in pinned {
        if !headers.iter().any(|h| h == spec.name) {
            return Err(QueryError::SchemaMismatch {
                path: path.to_path_buf(),
                column: spec.name.to_string(),
            });
        }
    }

    // Read rows
    let mut records = Vec::new();
    for (line_num, result) in csv_reader.records().enumerate() {
        let record = result.map_err(csv_error)?;
        let line = line_num + 2; // +2 for 1-indexing and header
        if record.len() > width {
            return Err(QueryError::RaggedRow {
                path: path.to_path_buf(),
                line,
                expected: width,
                found: record.len(),
            });
        }
        records.push((line, record));
    }

    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let cell_type = match pinned.iter().find(|spec| spec.name == name) {
                Some(spec) => spec.cell_type,
                None => records
                    .iter()
                    .filter_map(|(_, record)| record.get(i))
                    .fold(CellType::Null, |acc, field| acc.widen(CellType::of_text(field))),
            };
            Column::with_type(name, i, cell_type)
        })
        .collect();

    let mut table = Table::new(columns);
    for (line, record) in records {
        let cells = table
            .columns
            .iter()
            .map(|col| {
                // Short rows are padded with missing values
                let field = record.get(col.index).unwrap_or("");
                col.cell_type
                    .parse(field)
                    .ok_or_else(|| QueryError::InvalidCell {
                        column: col.name.clone(),
                        line,
                        value: field.to_string(),
                        expected: col.cell_type,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        table.add_row(cells, line);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;

    fn parse(text: &str, pinned: &[ColumnSpec]) -> Result<Table> {
        read_table(text.as_bytes(), Path::new("test.csv"), pinned)
    }

    #[test]
    fn test_infers_column_types() {
        let table = parse(
            "HVMID,cn_name,TCM_ID_id,SymMap_id\nHVM0367,柴胡,3396,58.0\nHVM1695,黄芩,,188\n",
            &[],
        )
        .unwrap();

        let types: Vec<_> = table.columns.iter().map(|c| c.cell_type).collect();
        assert_eq!(
            types,
            vec![CellType::String, CellType::String, CellType::Int, CellType::Float]
        );
        assert_eq!(table.get(1, "TCM_ID_id"), Some(&CellValue::Null));
        assert_eq!(table.get(1, "SymMap_id"), Some(&CellValue::Float(188.0)));
        assert_eq!(table.rows[1].source_line, 3);
    }

    #[test]
    fn test_mixed_column_keeps_original_text() {
        let table = parse("code\n007\nabc\n", &[]).unwrap();
        assert_eq!(table.columns[0].cell_type, CellType::String);
        assert_eq!(table.get(0, "code"), Some(&CellValue::from("007")));
    }

    #[test]
    fn test_text_fields_kept_as_stored() {
        let table = parse("Ensembl_ID,gene_name,n\nENSP1, PDCD1 PD1 , 7 \n", &[]).unwrap();
        assert_eq!(table.get(0, "gene_name"), Some(&CellValue::from(" PDCD1 PD1 ")));
        assert_eq!(table.get(0, "n"), Some(&CellValue::Int(7)));
    }

    #[test]
    fn test_pinned_column_type_wins() {
        let pinned = [ColumnSpec::string("HVPID")];
        let table = parse("HVPID,n\n1625,1\n", &pinned).unwrap();
        assert_eq!(table.get(0, "HVPID"), Some(&CellValue::from("1625")));
    }

    #[test]
    fn test_pinned_column_missing() {
        let pinned = [ColumnSpec::string("HVPID")];
        let err = parse("id\nHVP1\n", &pinned).unwrap_err();
        assert!(matches!(err, QueryError::SchemaMismatch { column, .. } if column == "HVPID"));
    }

    #[test]
    fn test_pinned_column_bad_value() {
        let pinned = [ColumnSpec::new("Combined_score", CellType::Int)];
        let err = parse("Combined_score\n900\nhigh\n", &pinned).unwrap_err();
        assert!(matches!(err, QueryError::InvalidCell { line: 3, .. }));
    }

    #[test]
    fn test_short_row_padded_long_row_rejected() {
        let table = parse("a,b\n1\n", &[]).unwrap();
        assert_eq!(table.get(0, "b"), Some(&CellValue::Null));

        let err = parse("a,b\n1,2,3\n", &[]).unwrap_err();
        assert!(matches!(err, QueryError::RaggedRow { found: 3, .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = CsvDirectory::new("/nonexistent/herbiv");
        let err = dir.read("HerbiV_formula.csv", &[]).unwrap_err();
        assert!(matches!(err, QueryError::MissingSource { .. }));
    }
}
