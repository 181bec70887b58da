use super::{Row, RowError};
use itertools::Itertools;
use std::collections::HashMap;

/// an in-memory, row-oriented table loaded from a delimited text file or workbook.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Table {
        Table { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// positional row lookup, counting from the first row after the header.
    pub fn row(&self, index: usize) -> Result<&Row, RowError> {
        self.rows.get(index).ok_or(RowError::MissingRow(index))
    }

    /// finds the first row whose text value at `column` equals `value`.
    pub fn find_row(&self, column: &str, value: &str) -> Option<(usize, &Row)> {
        self.rows.iter().enumerate().find(|(_, row)| {
            row.get_optional(column)
                .map(|v| v.to_string() == value)
                .unwrap_or_default()
        })
    }

    /// builds unique column names from raw header cells. blank headers become
    /// "Unnamed: {index}" and repeated names get a ".{n}" suffix, so that no
    /// column is lost when rows are keyed by column name.
    pub fn unique_columns<S: AsRef<str>>(header: &[S]) -> Vec<String> {
        let mut seen: HashMap<String, usize> = HashMap::new();
        header
            .iter()
            .enumerate()
            .map(|(idx, raw)| {
                let name = match raw.as_ref().trim() {
                    "" => format!("Unnamed: {idx}"),
                    _ => raw.as_ref().to_string(),
                };
                let count = seen.entry(name.clone()).or_insert(0);
                let unique = match *count {
                    0 => name,
                    n => format!("{name}.{n}"),
                };
                *count += 1;
                unique
            })
            .collect_vec()
    }
}
