mod delimited_source;
mod source_error;
mod source_format;
mod workbook_source;

pub use delimited_source::{read_delimited, read_delimited_table};
pub use source_error::SourceError;
pub use source_format::SourceFormat;
pub use workbook_source::read_workbook_table;

use crate::model::Table;
use std::path::Path;

/// reads a tabular source file into a [`Table`], choosing the reader by file extension.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table, SourceError> {
    let path = path.as_ref();
    let format = SourceFormat::try_from(path)?;
    log::debug!("reading {} as {format}", path.display());
    let table = match format {
        SourceFormat::Delimited => read_delimited_table(path)?,
        SourceFormat::Workbook => read_workbook_table(path)?,
    };
    log::info!(
        "loaded {} with {} rows and {} columns",
        path.display(),
        table.len(),
        table.columns().len()
    );
    Ok(table)
}
