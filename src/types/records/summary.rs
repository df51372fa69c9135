use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Headline statistics for the currently selected observations.
///
/// These are the figures the dashboards showed as metric tiles and report
/// header lines: means of the main measurements plus the rainfall total over
/// whatever station/period filter is active.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SelectionSummary {
    pub station: String,
    pub observations: u32,
    pub first: NaiveDateTime,
    pub last: NaiveDateTime,
    pub temperature_mean: Option<f64>,
    pub humidity_mean: Option<f64>,
    pub wind_speed_mean: Option<f64>,
    pub pressure_mean: Option<f64>,
    pub cloud_cover_mean: Option<f64>,
    pub rainfall_total: Option<f64>,
}
