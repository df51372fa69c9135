//! Canonical column names for the cleaned observation frame, and the mapping
//! from the raw spreadsheet headers onto them.

// Identity and timestamp
pub const COL_STATION: &str = "station";
pub const COL_TIMESTAMP: &str = "timestamp";

// Raw date parts, present only until the timestamp is built
pub const COL_YEAR: &str = "year";
pub const COL_MONTH: &str = "month";
pub const COL_DAY: &str = "day";
pub const COL_TIME: &str = "time";

// Measurements
pub const COL_TEMP: &str = "temp"; // dry-bulb temperature, °C
pub const COL_RHUM: &str = "rhum"; // relative humidity, %
pub const COL_PRES: &str = "pres"; // air pressure, hPa
pub const COL_WSPD: &str = "wspd"; // wind speed, knots
pub const COL_WDIR: &str = "wdir"; // wind direction, degrees
pub const COL_CLOUD: &str = "cloud"; // total cloud coverage, oktas
pub const COL_PRCP: &str = "prcp"; // rainfall, mm

/// Every measurement column of the canonical schema. Columns absent from the
/// source file are added as all-null so downstream code can rely on them.
pub const MEASUREMENT_COLUMNS: [&str; 7] = [
    COL_TEMP, COL_RHUM, COL_PRES, COL_WSPD, COL_WDIR, COL_CLOUD, COL_PRCP,
];

/// Raw spreadsheet headers mapped to canonical names. Covers both source
/// layouts: the climate export (Year/Month/Day/Time plus the long measurement
/// headers) and the AWS export (Dag/Tijd with a bare Temperature column).
pub fn header_aliases() -> &'static [(&'static str, &'static str)] {
    &[
        ("StationID", COL_STATION),
        ("Year", COL_YEAR),
        ("Month", COL_MONTH),
        ("Day", COL_DAY),
        ("Dag", COL_DAY),
        ("Time", COL_TIME),
        ("Tijd", COL_TIME),
        ("DryBulb T.", COL_TEMP),
        ("Temperature", COL_TEMP),
        ("RH", COL_RHUM),
        ("Pressure", COL_PRES),
        ("Wind Velocity", COL_WSPD),
        ("Wind Speed", COL_WSPD),
        ("Wind direction", COL_WDIR),
        ("Wind Direction", COL_WDIR),
        ("Total Cloud Coverage", COL_CLOUD),
        ("Rainfall", COL_PRCP),
        ("Precipitation", COL_PRCP),
    ]
}
