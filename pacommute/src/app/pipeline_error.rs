use crate::output::OutputError;
use pacommute_core::{model::RowError, source::SourceError};

#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("failure loading source table: {source}")]
    SourceError {
        #[from]
        source: SourceError,
    },
    #[error("failure writing output: {source}")]
    OutputError {
        #[from]
        source: OutputError,
    },
    #[error("failure reading statewide totals: {source}")]
    StatewideRowError {
        #[from]
        source: RowError,
    },
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("failure writing report: {source}")]
    ReportError {
        #[from]
        source: std::io::Error,
    },
    #[error("{0}")]
    InternalError(String),
}
