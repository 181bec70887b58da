use super::{CellValue, RowError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// one record of a source table: column name to cell value, in source column order.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Row(IndexMap<String, CellValue>);

impl Row {
    pub fn new() -> Row {
        Row(IndexMap::new())
    }

    pub fn insert<S: Into<String>, V: Into<CellValue>>(&mut self, column: S, value: V) {
        self.0.insert(column.into(), value.into());
    }

    /// gets the value at some column, or an error if this row does not have the column.
    pub fn get(&self, column: &str) -> Result<&CellValue, RowError> {
        self.0
            .get(column)
            .ok_or_else(|| RowError::MissingColumn(column.to_string()))
    }

    pub fn get_optional(&self, column: &str) -> Option<&CellValue> {
        self.0.get(column)
    }

    /// text form of the value at some column. missing cells render as "nan".
    pub fn get_text(&self, column: &str) -> Result<String, RowError> {
        self.get(column).map(|v| v.to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, CellValue)> for Row {
    fn from_iter<T: IntoIterator<Item = (S, CellValue)>>(iter: T) -> Self {
        Row(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
