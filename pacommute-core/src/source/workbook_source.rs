use super::SourceError;
use crate::model::{CellValue, Row, Table};
use calamine::{open_workbook_auto, Data, Range, Reader};
use itertools::Itertools;
use std::path::Path;

/// reads the first worksheet of a workbook into a [`Table`]. the first row of
/// the used range is the header.
pub fn read_workbook_table(path: &Path) -> Result<Table, SourceError> {
    let filepath = path.display().to_string();
    let mut workbook =
        open_workbook_auto(path).map_err(|source| SourceError::WorkbookReadError {
            filepath: filepath.clone(),
            source,
        })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SourceError::EmptyWorkbook(filepath.clone()))?
        .map_err(|source| SourceError::WorkbookReadError {
            filepath: filepath.clone(),
            source,
        })?;
    table_from_range(&range, &filepath)
}

fn table_from_range(range: &Range<Data>, filepath: &str) -> Result<Table, SourceError> {
    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| SourceError::MissingHeader(filepath.to_string()))?;
    let header_text = header
        .iter()
        .map(|cell| match cell {
            Data::Empty => String::new(),
            other => other.to_string(),
        })
        .collect_vec();
    let columns = Table::unique_columns(&header_text);

    let mut records = rows
        .map(|cells| {
            columns
                .iter()
                .enumerate()
                .map(|(idx, column)| {
                    let value = cells.get(idx).map(cell_value).unwrap_or_default();
                    (column.clone(), value)
                })
                .collect::<Row>()
        })
        .collect_vec();
    for column in columns.iter() {
        harmonize_numeric_column(&mut records, column);
    }

    Ok(Table::new(columns, records))
}

/// gives a numeric column one number type, as the delimited reader does.
/// workbooks store every number as a float, so a column of whole numbers with
/// no missing cells is read as integers, and a column with a missing or
/// fractional cell is read as floats. columns holding text or booleans keep
/// their cells as read.
fn harmonize_numeric_column(rows: &mut [Row], column: &str) {
    let mut has_number = false;
    let mut has_missing = false;
    let mut all_whole = true;
    for cell in rows.iter().filter_map(|row| row.get_optional(column)) {
        match cell {
            c if c.is_missing() => has_missing = true,
            CellValue::Int(_) => has_number = true,
            CellValue::Float(f) => {
                has_number = true;
                all_whole &= is_whole_number(*f);
            }
            _ => return,
        }
    }
    if !has_number {
        return;
    }
    let as_int = all_whole && !has_missing;
    for row in rows.iter_mut() {
        let converted = match row.get_optional(column) {
            Some(CellValue::Float(f)) if as_int => CellValue::Int(*f as i64),
            Some(CellValue::Int(i)) if !as_int => CellValue::Float(*i as f64),
            _ => continue,
        };
        row.insert(column, converted);
    }
}

fn is_whole_number(value: f64) -> bool {
    value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64
}

/// converts a workbook cell. dates are rendered as ISO-8601 text and error
/// cells are read as missing.
fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| CellValue::String(d.format("%Y-%m-%dT%H:%M:%S").to_string()))
            .unwrap_or(CellValue::Float(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
    }
}
