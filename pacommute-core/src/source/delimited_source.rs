use super::SourceError;
use crate::model::{CellValue, Row, Table};
use csv::StringRecord;
use itertools::Itertools;
use std::{io::Read, path::Path};

/// reads a comma-delimited file with a header line into a [`Table`].
///
/// every line after the header becomes a row, including descriptive lines
/// such as the second header line of census downloads. cell types are
/// inferred per column, see [`ColumnKind`].
pub fn read_delimited_table(path: &Path) -> Result<Table, SourceError> {
    let filepath = path.display().to_string();
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| SourceError::DelimitedReadError {
            filepath: filepath.clone(),
            source,
        })?;
    read_records(reader, &filepath)
}

/// reads comma-delimited data from any reader. `name` is used in error messages.
pub fn read_delimited<R: Read>(data: R, name: &str) -> Result<Table, SourceError> {
    let reader = csv::ReaderBuilder::new().flexible(true).from_reader(data);
    read_records(reader, name)
}

fn read_records<R: Read>(mut reader: csv::Reader<R>, filepath: &str) -> Result<Table, SourceError> {
    let to_error = |source: csv::Error| SourceError::DelimitedReadError {
        filepath: filepath.to_string(),
        source,
    };
    let header = reader.headers().map_err(to_error)?.clone();
    if header.is_empty() {
        return Err(SourceError::MissingHeader(filepath.to_string()));
    }
    let columns = Table::unique_columns(&header.iter().collect_vec());
    let records = reader
        .records()
        .collect::<Result<Vec<StringRecord>, _>>()
        .map_err(to_error)?;

    let kinds = (0..columns.len())
        .map(|col| ColumnKind::infer(records.iter().map(|r| r.get(col).unwrap_or_default())))
        .collect_vec();

    let rows = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .zip(kinds.iter())
                .enumerate()
                .map(|(idx, (column, kind))| {
                    (column.clone(), kind.read(record.get(idx).unwrap_or_default()))
                })
                .collect::<Row>()
        })
        .collect_vec();

    Ok(Table::new(columns, rows))
}

/// column-level type of a delimited file. a column is integer-valued only if
/// every cell parses as an integer and no cell is missing; a column with
/// missing cells among integers is read as floats. any non-numeric cell makes
/// the whole column text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Int,
    Float,
    Text,
}

impl ColumnKind {
    fn infer<'a, I>(cells: I) -> ColumnKind
    where
        I: Iterator<Item = &'a str>,
    {
        let mut kind = ColumnKind::Int;
        let mut has_missing = false;
        for cell in cells {
            if CellValue::is_missing_token(cell) {
                has_missing = true;
                continue;
            }
            if kind == ColumnKind::Int && cell.parse::<i64>().is_err() {
                kind = ColumnKind::Float;
            }
            if kind == ColumnKind::Float && cell.parse::<f64>().is_err() {
                return ColumnKind::Text;
            }
        }
        match (kind, has_missing) {
            (ColumnKind::Int, true) => ColumnKind::Float,
            (k, _) => k,
        }
    }

    fn read(&self, cell: &str) -> CellValue {
        if CellValue::is_missing_token(cell) {
            return CellValue::Empty;
        }
        match self {
            ColumnKind::Int => cell.parse().map(CellValue::Int).unwrap_or_default(),
            ColumnKind::Float => cell.parse().map(CellValue::Float).unwrap_or_default(),
            ColumnKind::Text => CellValue::String(cell.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const S0802_SAMPLE: &str = "\
GEO_ID,NAME,S0802_C01_001E,S0802_C01_013E
Geography,Geographic Area Name,Estimate!!Total!!Workers 16 years and over,Estimate!!Total!!Mean travel time
0400000US42,Pennsylvania,\"6,105,542\",27.2
0500000US42001,\"Adams County, Pennsylvania\",\"50,321\",29.4
";

    #[test]
    fn test_description_line_is_a_row() {
        let table = read_delimited(S0802_SAMPLE.as_bytes(), "sample").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.columns(),
            &["GEO_ID", "NAME", "S0802_C01_001E", "S0802_C01_013E"]
        );
        let state = table.row(1).unwrap();
        assert_eq!(state.get_text("NAME").unwrap(), "Pennsylvania");
        // the description line makes every column text
        assert_eq!(
            state.get("S0802_C01_001E").unwrap(),
            &CellValue::from("6,105,542")
        );
    }

    #[test]
    fn test_column_type_inference() {
        let data = "county,workers,minutes,note\nErie,100,21.5,N/A\nYork,,24,ok\nBerks,300,26,\n";
        let table = read_delimited(data.as_bytes(), "inference").unwrap();
        let york = table.row(1).unwrap();
        assert_eq!(york.get("county").unwrap(), &CellValue::from("York"));
        // missing cell among integers promotes the column to floats
        assert_eq!(york.get("workers").unwrap(), &CellValue::Empty);
        let erie = table.row(0).unwrap();
        assert_eq!(erie.get("workers").unwrap(), &CellValue::Float(100.0));
        assert_eq!(erie.get("minutes").unwrap(), &CellValue::Float(21.5));
        assert_eq!(erie.get("note").unwrap(), &CellValue::Empty);
        assert_eq!(york.get("note").unwrap(), &CellValue::from("ok"));
    }

    #[test]
    fn test_integer_column() {
        let data = "id,count\na,1\nb,-2\n";
        let table = read_delimited(data.as_bytes(), "ints").unwrap();
        assert_eq!(table.row(1).unwrap().get("count").unwrap(), &CellValue::Int(-2));
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let data = "a,b,c\n1,2\n";
        let table = read_delimited(data.as_bytes(), "ragged").unwrap();
        let row = table.row(0).unwrap();
        assert_eq!(row.len(), 3);
        assert_eq!(row.get("c").unwrap(), &CellValue::Empty);
    }

    #[test]
    fn test_empty_file_has_no_header() {
        let result = read_delimited("".as_bytes(), "empty");
        assert!(matches!(result, Err(SourceError::MissingHeader(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = read_delimited_table(Path::new("does/not/exist.csv"));
        assert!(matches!(
            result,
            Err(SourceError::DelimitedReadError { .. })
        ));
    }
}
