use serde::{Deserialize, Serialize};

/// Aggregated statistics for one station and calendar month.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub station: String,
    pub year: i32,
    pub month: u32,
    pub temperature_mean: Option<f64>,
    pub temperature_min: Option<f64>,
    pub temperature_max: Option<f64>,
    pub rainfall_total: Option<f64>,
    pub wind_speed_mean: Option<f64>,
    pub humidity_mean: Option<f64>,
    pub pressure_mean: Option<f64>,
    pub cloud_cover_mean: Option<f64>,
    pub observations: u32,
}
