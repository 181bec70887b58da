#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("failed reading delimited file '{filepath}': {source}")]
    DelimitedReadError {
        filepath: String,
        source: csv::Error,
    },
    #[error("failed reading workbook '{filepath}': {source}")]
    WorkbookReadError {
        filepath: String,
        source: calamine::Error,
    },
    #[error("workbook '{0}' has no worksheets")]
    EmptyWorkbook(String),
    #[error("source '{0}' has no header row")]
    MissingHeader(String),
    #[error("unsupported source file type: {0}")]
    UnsupportedFormat(String),
}
