use polars::error::PolarsError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to create output directory {0}")]
    OutputDir(PathBuf, #[source] io::Error),

    #[error("Failed to write {0}")]
    Write(PathBuf, #[source] io::Error),

    #[error("Failed to render chart {path}: {message}")]
    Chart { path: PathBuf, message: String },

    #[error("Failed to write CSV {0}")]
    CsvWrite(PathBuf, #[source] PolarsError),

    #[error("Nothing to report: the selection holds no observations")]
    EmptySelection,
}
