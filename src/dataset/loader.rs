//! Reads an observation spreadsheet export (CSV) and maps it onto the
//! canonical schema. No value coercion happens here; that is the cleaner's
//! job. The loader only renames headers, verifies the required columns and
//! fills in the measurement columns the file does not carry.

use log::info;
use polars::prelude::*;
use std::path::Path;

use super::error::DatasetError;
use super::schema::{
    header_aliases, COL_DAY, COL_MONTH, COL_STATION, COL_TIME, COL_YEAR, MEASUREMENT_COLUMNS,
};
use crate::types::period::Month;

pub(crate) fn load_csv(path: &Path, base_month: Option<Month>) -> Result<LazyFrame, DatasetError> {
    std::fs::metadata(path).map_err(|e| DatasetError::FileOpen(path.to_path_buf(), e))?;

    // Every column is read as String; dtype inference would error out the
    // whole load on the first non-numeric cell past its sample window. The
    // cleaner owns all value coercion.
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| DatasetError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?
        .finish()
        .map_err(|e| DatasetError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    info!(
        "Read {} rows, {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );

    rename_headers(&mut df)?;

    let mut frame = df.lazy();
    let names = column_names(&frame)?;

    // The AWS export has no year/month columns; a caller-supplied base month
    // stands in for them.
    if let Some(base) = base_month {
        if !names.contains(&COL_YEAR.to_string()) {
            frame = frame
                .with_column(lit(base.year() as i64).cast(DataType::Int64).alias(COL_YEAR));
        }
        if !names.contains(&COL_MONTH.to_string()) {
            frame = frame
                .with_column(lit(base.month() as i64).cast(DataType::Int64).alias(COL_MONTH));
        }
    }

    let names = column_names(&frame)?;
    let missing = missing_required(&names);
    if !missing.is_empty() {
        return Err(DatasetError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        });
    }

    // Absent measurement columns become all-null so the cleaned frame always
    // has the full canonical schema.
    let fill: Vec<Expr> = MEASUREMENT_COLUMNS
        .iter()
        .filter(|m| !names.contains(&m.to_string()))
        .map(|m| lit(NULL).cast(DataType::Float64).alias(*m))
        .collect();
    if !fill.is_empty() {
        frame = frame.with_columns(fill);
    }

    Ok(frame)
}

fn rename_headers(df: &mut DataFrame) -> Result<(), DatasetError> {
    for (raw, canonical) in header_aliases() {
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        if names.iter().any(|n| n == raw) && !names.iter().any(|n| n == canonical) {
            df.rename(raw, (*canonical).into())?;
        }
    }
    // rename() mutates columns in place but leaves the DataFrame's cached
    // schema stale; downstream lazy() would otherwise see the old names.
    df.clear_schema();
    Ok(())
}

fn column_names(frame: &LazyFrame) -> Result<Vec<String>, DatasetError> {
    let schema = frame.clone().collect_schema()?;
    Ok(schema.iter_names().map(|n| n.to_string()).collect())
}

fn missing_required(names: &[String]) -> Vec<String> {
    let mut missing = Vec::new();
    for required in [COL_STATION, COL_YEAR, COL_MONTH, COL_DAY, COL_TIME] {
        if !names.contains(&required.to_string()) {
            missing.push(required.to_string());
        }
    }
    if !MEASUREMENT_COLUMNS
        .iter()
        .any(|m| names.contains(&m.to_string()))
    {
        missing.push(format!(
            "a measurement column ({})",
            MEASUREMENT_COLUMNS.join(", ")
        ));
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::period::Month;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn climate_layout_maps_to_canonical_columns() {
        let file = write_csv(
            "StationID,Year,Month,Day,Time,DryBulb T.,RH,Pressure,Wind Velocity,Wind direction,Total Cloud Coverage\n\
             STG,2025,10,2,07:00:00,26.4,88,1011.2,4,120,6\n",
        );
        let df = load_csv(file.path(), None).unwrap().collect().unwrap();
        for c in ["station", "year", "month", "day", "time", "temp", "rhum"] {
            assert!(df.column(c).is_ok(), "missing column {c}");
        }
        // rainfall was not in the file but is present as nulls
        assert_eq!(df.column("prcp").unwrap().null_count(), 1);
    }

    #[test]
    fn aws_layout_requires_a_base_month() {
        let content = "StationID,Dag,Tijd,Temperature\nAWS-01,2,07:00:00,27.1\n";
        let file = write_csv(content);

        let Err(err) = load_csv(file.path(), None) else {
            panic!("expected a missing-columns error");
        };
        match err {
            DatasetError::MissingColumns { columns, .. } => {
                assert!(columns.contains(&"year".to_string()));
                assert!(columns.contains(&"month".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }

        let df = load_csv(file.path(), Some(Month::new(2025, 10)))
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(
            df.column("year").unwrap().i64().unwrap().get(0),
            Some(2025)
        );
        assert_eq!(df.column("month").unwrap().i64().unwrap().get(0), Some(10));
    }

    #[test]
    fn missing_station_column_is_reported() {
        let file = write_csv("Year,Month,Day,Time,DryBulb T.\n2025,10,2,07:00:00,26.4\n");
        let Err(err) = load_csv(file.path(), None) else {
            panic!("expected a missing-columns error");
        };
        match err {
            DatasetError::MissingColumns { columns, .. } => {
                assert_eq!(columns, vec!["station".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn no_measurements_is_reported() {
        let file = write_csv("StationID,Year,Month,Day,Time\nSTG,2025,10,2,07:00:00\n");
        let Err(err) = load_csv(file.path(), None) else {
            panic!("expected a missing-columns error");
        };
        match err {
            DatasetError::MissingColumns { columns, .. } => {
                assert_eq!(columns.len(), 1);
                assert!(columns[0].starts_with("a measurement column"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn nonexistent_file_is_an_open_error() {
        let Err(err) = load_csv(Path::new("/definitely/not/here.csv"), None) else {
            panic!("expected a file-open error");
        };
        assert!(matches!(err, DatasetError::FileOpen(..)));
    }

    #[test]
    fn non_numeric_cell_far_into_the_file_becomes_null() {
        // A temperature column that looks numeric for hundreds of rows and
        // then holds text must not fail the load; the cell nulls out and the
        // row stays.
        let mut content = String::from("StationID,Year,Month,Day,Time,DryBulb T.\n");
        for i in 0..250 {
            content.push_str(&format!(
                "STG,2025,10,{},{:02}:00:00,20.5\n",
                i % 28 + 1,
                i % 24
            ));
        }
        content.push_str("STG,2025,10,28,23:00:00,n/a\n");
        let file = write_csv(&content);

        let df = crate::dataset::clean(load_csv(file.path(), None).unwrap())
            .collect()
            .unwrap();
        assert_eq!(df.height(), 251);
        assert_eq!(df.column("temp").unwrap().null_count(), 1);
    }
}
