use crate::dataset::DatasetError;
use crate::report::ReportError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KlimaatError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Unknown station '{station}'; available stations: {}", available.join(", "))]
    UnknownStation {
        station: String,
        available: Vec<String>,
    },

    #[error("Could not resolve the given date or period")]
    DateParsing,

    #[error("Failed processing DataFrame")]
    DataFrameProcessing(#[from] PolarsError),
}
