use super::OutputError;
use crate::emissions::CountyRecord;
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), OutputError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if !dirspath.is_dir() {
        std::fs::create_dir_all(dirspath).map_err(|source| OutputError::CreateDirectoryError {
            filepath: dirspath.display().to_string(),
            source,
        })
    } else {
        Ok(())
    }
}

/// writes a value as pretty-printed JSON with 2-space indentation, replacing
/// any existing file.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), OutputError> {
    let filepath = path.display().to_string();
    let file = File::create(path).map_err(|source| OutputError::OpenFileError {
        filepath: filepath.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| {
        OutputError::JsonWriteError {
            filepath: filepath.clone(),
            source,
        }
    })?;
    writer.flush().map_err(|source| OutputError::OpenFileError {
        filepath: filepath.clone(),
        source,
    })?;
    log::debug!("wrote {filepath}");
    Ok(())
}

/// writes county records as CSV with a header row. an empty record list
/// still produces the header.
pub fn write_county_csv(path: &Path, records: &[CountyRecord]) -> Result<(), OutputError> {
    let filepath = path.display().to_string();
    let to_error = |source: csv::Error| OutputError::CsvWriteError {
        filepath: filepath.clone(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(to_error)?;
    if records.is_empty() {
        writer
            .write_record(CountyRecord::COLUMNS)
            .map_err(to_error)?;
    }
    for record in records.iter() {
        writer.serialize(record).map_err(to_error)?;
    }
    writer.flush().map_err(|source| OutputError::OpenFileError {
        filepath: filepath.clone(),
        source,
    })?;
    log::debug!("wrote {filepath}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emissions::estimate_county;
    use tempfile::tempdir;

    #[test]
    fn test_create_dirs() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        create_dirs(&nested).unwrap();
        assert!(nested.is_dir());
        // existing directories are fine
        create_dirs(&nested).unwrap();
    }

    #[test]
    fn test_write_json_two_space_indent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&path, &serde_json::json!({"a": [1]})).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n  \"a\": [\n    1\n  ]\n}");
    }

    #[test]
    fn test_write_county_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pa_county_emissions.csv");
        let records = vec![estimate_county(String::from("Test"), 100_000, 30.0, 80.5)];
        write_county_csv(&path, &records).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), CountyRecord::COLUMNS.join(","));
        assert!(lines.next().unwrap().starts_with("Test,100000,30.0,80.5,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_write_empty_county_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        write_county_csv(&path, &[]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim_end(), CountyRecord::COLUMNS.join(","));
    }
}
