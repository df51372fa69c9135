use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregated statistics for one station and calendar day.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    pub station: String,
    pub date: NaiveDate,
    pub temperature_mean: Option<f64>,
    pub temperature_min: Option<f64>,
    pub temperature_max: Option<f64>,
    /// Sum of all rainfall readings on the day (0.0 when none were recorded).
    pub rainfall_total: Option<f64>,
    pub wind_speed_mean: Option<f64>,
    /// Circular mean of the wind direction, degrees in `[0, 360)`.
    pub wind_direction_mean: Option<f64>,
    pub humidity_mean: Option<f64>,
    pub pressure_mean: Option<f64>,
    pub cloud_cover_mean: Option<f64>,
    /// Number of observations that fell on the day.
    pub observations: u32,
}
