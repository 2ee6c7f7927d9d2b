//! Column metadata and type information

use serde::{Deserialize, Serialize};

use super::table::CellValue;

/// Resolved cell type for a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    /// Every value in the column is missing
    #[default]
    Null,
    Int,
    Float,
    String,
}

impl CellType {
    /// Widen the type to accommodate another type
    pub fn widen(self, other: CellType) -> CellType {
        if self == other {
            return self;
        }

        match (self, other) {
            (CellType::Null, t) | (t, CellType::Null) => t,
            (CellType::Int, CellType::Float) | (CellType::Float, CellType::Int) => CellType::Float,
            _ => CellType::String,
        }
    }

    /// Narrowest type that can hold a raw field
    pub fn of_text(text: &str) -> CellType {
        let trimmed = text.trim();
        if is_missing(trimmed) {
            CellType::Null
        } else if trimmed.parse::<i64>().is_ok() {
            CellType::Int
        } else if trimmed.parse::<f64>().is_ok() {
            CellType::Float
        } else {
            CellType::String
        }
    }

    /// Parse a raw field as this type.
    ///
    /// Text cells keep the field exactly as stored; surrounding whitespace is
    /// ignored only for numbers and missing markers. Missing markers always
    /// parse to [`CellValue::Null`]; `None` means the text is present but does
    /// not fit the type.
    pub fn parse(self, text: &str) -> Option<CellValue> {
        let trimmed = text.trim();
        if is_missing(trimmed) {
            return Some(CellValue::Null);
        }

        match self {
            CellType::Null => None,
            CellType::Int => trimmed.parse().ok().map(CellValue::Int),
            CellType::Float => trimmed.parse().ok().map(CellValue::Float),
            CellType::String => Some(CellValue::String(text.to_string())),
        }
    }

    /// Convert a caller-supplied value into this column type for comparison.
    ///
    /// Returns `None` when the value has no representation in the type, which
    /// callers treat as "matches nothing".
    pub fn coerce(self, value: &CellValue) -> Option<CellValue> {
        match (self, value) {
            (_, CellValue::Null) | (CellType::Null, _) => None,
            (CellType::String, CellValue::String(s)) => Some(CellValue::String(s.clone())),
            (CellType::String, CellValue::Int(i)) => Some(CellValue::String(i.to_string())),
            (CellType::String, CellValue::Float(f)) => Some(CellValue::String(f.to_string())),
            (CellType::Int, CellValue::Int(i)) => Some(CellValue::Int(*i)),
            (CellType::Int, CellValue::Float(f)) => {
                // `as` saturates, so out-of-range floats must not reach the cast
                let in_range = *f >= i64::MIN as f64 && *f < i64::MAX as f64;
                (in_range && f.fract() == 0.0).then(|| CellValue::Int(*f as i64))
            }
            (CellType::Int, CellValue::String(s)) => s.trim().parse().ok().map(CellValue::Int),
            (CellType::Float, CellValue::Int(i)) => Some(CellValue::Float(*i as f64)),
            (CellType::Float, CellValue::Float(f)) => Some(CellValue::Float(*f)),
            (CellType::Float, CellValue::String(s)) => s.trim().parse().ok().map(CellValue::Float),
        }
    }
}

/// Markers the reference tables use for an absent value
fn is_missing(trimmed: &str) -> bool {
    trimmed.is_empty()
        || trimmed == "NA"
        || trimmed == "NaN"
        || trimmed.eq_ignore_ascii_case("null")
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellType::Null => write!(f, "null"),
            CellType::Int => write!(f, "int"),
            CellType::Float => write!(f, "float"),
            CellType::String => write!(f, "string"),
        }
    }
}

/// Column metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name (from header)
    pub name: String,
    /// Column index (0-based position)
    pub index: usize,
    /// Declared or inferred type
    pub cell_type: CellType,
}

impl Column {
    /// Create a new column with name and index
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
            cell_type: CellType::Null,
        }
    }

    /// Create a column with a specified type
    pub fn with_type(name: impl Into<String>, index: usize, cell_type: CellType) -> Self {
        Self {
            name: name.into(),
            index,
            cell_type,
        }
    }
}

/// A column whose type is fixed ahead of loading rather than inferred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub cell_type: CellType,
}

impl ColumnSpec {
    pub const fn new(name: &'static str, cell_type: CellType) -> Self {
        Self { name, cell_type }
    }

    pub const fn string(name: &'static str) -> Self {
        Self::new(name, CellType::String)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen() {
        assert_eq!(CellType::Null.widen(CellType::Int), CellType::Int);
        assert_eq!(CellType::Int.widen(CellType::Float), CellType::Float);
        assert_eq!(CellType::Float.widen(CellType::String), CellType::String);
        assert_eq!(CellType::Int.widen(CellType::String), CellType::String);
    }

    #[test]
    fn test_of_text() {
        assert_eq!(CellType::of_text(""), CellType::Null);
        assert_eq!(CellType::of_text("NA"), CellType::Null);
        assert_eq!(CellType::of_text("42"), CellType::Int);
        assert_eq!(CellType::of_text("3396.0"), CellType::Float);
        assert_eq!(CellType::of_text("HVP1625"), CellType::String);
    }

    #[test]
    fn test_parse_keeps_text_of_numeric_looking_ids() {
        assert_eq!(
            CellType::String.parse("00123"),
            Some(CellValue::String("00123".into()))
        );
        assert_eq!(CellType::Int.parse("abc"), None);
        assert_eq!(CellType::Int.parse(" "), Some(CellValue::Null));
        assert_eq!(CellType::Int.parse(" 42 "), Some(CellValue::Int(42)));
        assert_eq!(
            CellType::String.parse(" PDCD1 PD1 "),
            Some(CellValue::String(" PDCD1 PD1 ".into()))
        );
    }

    #[test]
    fn test_coerce() {
        assert_eq!(
            CellType::String.coerce(&CellValue::Int(58)),
            Some(CellValue::String("58".into()))
        );
        assert_eq!(
            CellType::Int.coerce(&CellValue::from("900")),
            Some(CellValue::Int(900))
        );
        assert_eq!(CellType::Int.coerce(&CellValue::Float(0.5)), None);
        assert_eq!(CellType::Int.coerce(&CellValue::Float(1e300)), None);
        assert_eq!(CellType::Int.coerce(&CellValue::Float(-1e300)), None);
        assert_eq!(CellType::Int.coerce(&CellValue::Float(f64::INFINITY)), None);
        assert_eq!(
            CellType::Int.coerce(&CellValue::Float(-9_007_199_254_740_992.0)),
            Some(CellValue::Int(-9_007_199_254_740_992))
        );
        assert_eq!(
            CellType::Float.coerce(&CellValue::Int(2)),
            Some(CellValue::Float(2.0))
        );
        assert_eq!(CellType::Float.coerce(&CellValue::from("strange")), None);
        assert_eq!(CellType::String.coerce(&CellValue::Null), None);
    }
}
