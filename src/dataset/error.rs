use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to open observation file '{0}'")]
    FileOpen(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse observation file '{path}' as CSV")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Observation file '{path}' is missing required columns: {}", columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    #[error("Observation file '{0}' contains no rows with a valid station and timestamp")]
    NoValidObservations(PathBuf),

    #[error("Failed processing observation data")]
    DataFrameProcessing(#[from] PolarsError),
}
