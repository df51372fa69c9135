use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A weather station as derived from the loaded observation file.
///
/// The spreadsheet exports carry nothing but the station id, so the remaining
/// fields describe the station's coverage within the dataset rather than
/// stored metadata.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Station {
    /// The station id code as it appears in the spreadsheet (e.g. "AWS-01").
    pub id: String,
    /// Number of valid observations for this station.
    pub observations: u32,
    /// Timestamp of the earliest observation.
    pub first: NaiveDateTime,
    /// Timestamp of the latest observation.
    pub last: NaiveDateTime,
}
