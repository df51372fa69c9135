//! Report artifacts: charts, CSV exports and the Markdown summary.

mod builder;
mod charts;
mod csv;
mod error;

pub use builder::{Report, ReportArtifacts};
pub use charts::{
    cloud_cover_chart, rainfall_chart, temperature_chart, wind_speed_chart, windrose_chart,
};
pub use csv::write_csv;
pub use error::ReportError;
