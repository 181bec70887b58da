use super::SourceError;
use std::{fmt::Display, path::Path};

/// the kinds of tabular source files that can be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// comma-delimited text with a header line
    Delimited,
    /// a spreadsheet workbook, read from its first worksheet
    Workbook,
}

impl Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Delimited => write!(f, "delimited text"),
            SourceFormat::Workbook => write!(f, "workbook"),
        }
    }
}

impl TryFrom<&Path> for SourceFormat {
    type Error = SourceError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(SourceFormat::Delimited),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(SourceFormat::Workbook),
            _ => Err(SourceError::UnsupportedFormat(path.display().to_string())),
        }
    }
}
