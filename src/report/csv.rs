//! CSV export of a collected selection.

use polars::prelude::*;
use std::fs::File;
use std::path::Path;

use super::error::ReportError;

/// Collects the frame and writes it as CSV with a header row. Timestamps are
/// serialized in ISO format by polars.
pub fn write_csv(path: &Path, frame: &LazyFrame) -> Result<(), ReportError> {
    let mut df = frame
        .clone()
        .collect()
        .map_err(|e| ReportError::CsvWrite(path.to_path_buf(), e))?;
    if df.height() == 0 {
        return Err(ReportError::EmptySelection);
    }

    let mut file = File::create(path).map_err(|e| ReportError::Write(path.to_path_buf(), e))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .map_err(|e| ReportError::CsvWrite(path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let df = df!(
            "station" => ["STG", "STG"],
            "temp" => [20.0f64, 30.0],
        )
        .unwrap();

        write_csv(&path, &df.lazy()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("station,temp"));
        assert_eq!(lines.next(), Some("STG,20.0"));
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn empty_frame_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let df = df!("station" => Vec::<String>::new()).unwrap();
        assert!(matches!(
            write_csv(&path, &df.lazy()),
            Err(ReportError::EmptySelection)
        ));
        assert!(!path.exists());
    }
}
