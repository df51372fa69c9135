mod dataset;
mod error;
mod frames;
mod klimaat;
mod report;
mod types;
mod utils;

pub use error::KlimaatError;
pub use klimaat::*;

pub use dataset::DatasetError;
pub use dataset::MEASUREMENT_COLUMNS;

pub use types::period::AnyDate;
pub use types::period::DatePeriod;
pub use types::period::Month;
pub use types::period::MonthPeriod;
pub use types::period::Year;
pub use types::station::Station;

pub use types::records::daily::DailySummary;
pub use types::records::monthly::MonthlySummary;
pub use types::records::observation::Observation;
pub use types::records::summary::SelectionSummary;
pub use types::records::windrose::{WindroseSector, SECTOR_LABELS};

pub use frames::daily::DailyLazyFrame;
pub use frames::monthly::MonthlyLazyFrame;
pub use frames::observations::ObservationLazyFrame;
pub use frames::windrose::WindroseLazyFrame;

pub use report::{
    cloud_cover_chart, rainfall_chart, temperature_chart, wind_speed_chart, windrose_chart,
    write_csv, Report, ReportArtifacts, ReportError,
};
