//! The fixed set of HerbiV reference tables

use serde::{Deserialize, Serialize};

use crate::model::{CellType, ColumnSpec};

/// Score column of the chemical-protein link table
pub const SCORE_COLUMN: &str = "Combined_score";

/// One of the seven HerbiV tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dataset {
    Formula,
    FormulaTcmLinks,
    Tcm,
    TcmChemicalLinks,
    Chemicals,
    ChemicalProteinLinks,
    Proteins,
}

const FORMULA: &[ColumnSpec] = &[ColumnSpec::string("HVPID")];
const FORMULA_TCM_LINKS: &[ColumnSpec] = &[ColumnSpec::string("HVPID"), ColumnSpec::string("HVMID")];
const TCM: &[ColumnSpec] = &[ColumnSpec::string("HVMID"), ColumnSpec::string("cn_name")];
const TCM_CHEMICAL_LINKS: &[ColumnSpec] = &[ColumnSpec::string("HVMID"), ColumnSpec::string("HVCID")];
const CHEMICALS: &[ColumnSpec] = &[ColumnSpec::string("HVCID")];
const CHEMICAL_PROTEIN_LINKS: &[ColumnSpec] = &[
    ColumnSpec::string("HVCID"),
    ColumnSpec::string("Ensembl_ID"),
    ColumnSpec::new(SCORE_COLUMN, CellType::Int),
];
const PROTEINS: &[ColumnSpec] = &[ColumnSpec::string("Ensembl_ID")];

impl Dataset {
    pub const ALL: [Dataset; 7] = [
        Dataset::Formula,
        Dataset::FormulaTcmLinks,
        Dataset::Tcm,
        Dataset::TcmChemicalLinks,
        Dataset::Chemicals,
        Dataset::ChemicalProteinLinks,
        Dataset::Proteins,
    ];

    /// File name under the data directory
    pub fn file_name(self) -> &'static str {
        match self {
            Dataset::Formula => "HerbiV_formula.csv",
            Dataset::FormulaTcmLinks => "HerbiV_formula_tcm_links.csv",
            Dataset::Tcm => "HerbiV_tcm.csv",
            Dataset::TcmChemicalLinks => "HerbiV_tcm_chemical_links.csv",
            Dataset::Chemicals => "HerbiV_chemicals.csv",
            Dataset::ChemicalProteinLinks => "HerbiV_chemical_protein_links.csv",
            Dataset::Proteins => "HerbiV_proteins.csv",
        }
    }

    /// Columns whose type is fixed regardless of what the data looks like.
    ///
    /// Identifier columns are always text so that IDs are never reparsed as
    /// numbers; the link score is always an integer in `0..=1000`.
    pub fn pinned_columns(self) -> &'static [ColumnSpec] {
        match self {
            Dataset::Formula => FORMULA,
            Dataset::FormulaTcmLinks => FORMULA_TCM_LINKS,
            Dataset::Tcm => TCM,
            Dataset::TcmChemicalLinks => TCM_CHEMICAL_LINKS,
            Dataset::Chemicals => CHEMICALS,
            Dataset::ChemicalProteinLinks => CHEMICAL_PROTEIN_LINKS,
            Dataset::Proteins => PROTEINS,
        }
    }

    /// Columns that identify duplicate rows in query results
    pub fn drop_duplicates(self) -> Option<&'static [&'static str]> {
        match self {
            Dataset::Chemicals => Some(&["HVCID"]),
            Dataset::Proteins => Some(&["Ensembl_ID"]),
            _ => None,
        }
    }

    /// Short name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Dataset::Formula => "formula",
            Dataset::FormulaTcmLinks => "formula-tcm-links",
            Dataset::Tcm => "tcm",
            Dataset::TcmChemicalLinks => "tcm-chemical-links",
            Dataset::Chemicals => "chemicals",
            Dataset::ChemicalProteinLinks => "chemical-protein-links",
            Dataset::Proteins => "proteins",
        }
    }
}

impl std::str::FromStr for Dataset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase().replace('_', "-");
        Dataset::ALL
            .into_iter()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| format!("Unknown dataset: {}", s))
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("tcm".parse::<Dataset>(), Ok(Dataset::Tcm));
        assert_eq!(
            "chemical_protein_links".parse::<Dataset>(),
            Ok(Dataset::ChemicalProteinLinks)
        );
        assert!("herbs".parse::<Dataset>().is_err());
    }

    #[test]
    fn test_dedup_only_for_entity_tables() {
        let with_dedup: Vec<_> = Dataset::ALL
            .into_iter()
            .filter(|d| d.drop_duplicates().is_some())
            .collect();
        assert_eq!(with_dedup, vec![Dataset::Chemicals, Dataset::Proteins]);
    }

    #[test]
    fn test_score_column_is_pinned_int() {
        let spec = Dataset::ChemicalProteinLinks
            .pinned_columns()
            .iter()
            .find(|c| c.name == SCORE_COLUMN)
            .unwrap();
        assert_eq!(spec.cell_type, CellType::Int);
    }
}
