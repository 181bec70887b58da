#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    #[error("error building output directory '{filepath}': {source}")]
    CreateDirectoryError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failure opening output file '{filepath}': {source}")]
    OpenFileError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failure writing JSON to '{filepath}': {source}")]
    JsonWriteError {
        filepath: String,
        source: serde_json::Error,
    },
    #[error("failure writing CSV to '{filepath}': {source}")]
    CsvWriteError {
        filepath: String,
        source: csv::Error,
    },
}
