use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single cleaned observation row.
///
/// Every measurement is optional: a cell that failed numeric coercion is kept
/// as `None` rather than dropping the row.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub station: String,
    pub timestamp: NaiveDateTime,
    pub temperature: Option<f64>,    // temp (°C)
    pub humidity: Option<f64>,       // rhum (%)
    pub pressure: Option<f64>,       // pres (hPa)
    pub wind_speed: Option<f64>,     // wspd (knots)
    pub wind_direction: Option<f64>, // wdir (degrees)
    pub cloud_cover: Option<f64>,    // cloud (oktas)
    pub rainfall: Option<f64>,       // prcp (mm)
}
