use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// tokens a tabular reader treats as a missing value. mirrors the default
/// missing-value list of common dataframe readers so that census annotation
/// cells like "N/A" land as null in the JSON mirrors.
pub const MISSING_VALUE_TOKENS: [&str; 16] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "nan",
];

/// a single cell value read from a delimited text file or a spreadsheet.
///
/// serialized untagged so that JSON mirrors of source tables carry plain
/// values, with [`CellValue::Empty`] written as `null`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl CellValue {
    /// true for cells that carry no value, including float NaN cells
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// true if the raw text of a delimited file should be read as a missing value
    pub fn is_missing_token(text: &str) -> bool {
        MISSING_VALUE_TOKENS.contains(&text)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::String(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Empty => write!(f, "nan"),
            CellValue::Bool(true) => write!(f, "True"),
            CellValue::Bool(false) => write!(f, "False"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(v) if v.is_nan() => write!(f, "nan"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::String(s) => write!(f, "{s}"),
        }
    }
}
