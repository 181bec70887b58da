#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("row is missing expected column '{0}'")]
    MissingColumn(String),
    #[error("table has no row at index {0}")]
    MissingRow(usize),
    #[error("table has no row where '{column}' is '{value}'")]
    NoMatchingRow { column: String, value: String },
}
