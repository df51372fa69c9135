//! Loading and cleaning of observation spreadsheet exports.

mod cleaner;
mod error;
mod loader;
mod schema;

pub use error::DatasetError;
pub use schema::{
    COL_CLOUD, COL_PRCP, COL_PRES, COL_RHUM, COL_STATION, COL_TEMP, COL_TIMESTAMP, COL_WDIR,
    COL_WSPD, MEASUREMENT_COLUMNS,
};

pub(crate) use cleaner::clean;
pub(crate) use loader::load_csv;
