use serde::{Deserialize, Serialize};

/// Compass labels for the 16 windrose sectors, sector 0 centred on north.
pub const SECTOR_LABELS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Wind statistics for one 22.5° direction sector.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct WindroseSector {
    /// Sector index, 0..16; 0 covers 348.75°..11.25° (north).
    pub sector: u32,
    /// Compass label for the sector ("N", "NNE", ...).
    pub label: String,
    /// Observations whose wind direction fell in this sector.
    pub observations: u32,
    /// Fraction of all binned observations that fell in this sector.
    pub share: f64,
    pub mean_speed: Option<f64>,
    pub max_speed: Option<f64>,
}

impl WindroseSector {
    pub fn label_for(sector: u32) -> &'static str {
        SECTOR_LABELS[(sector as usize) % 16]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_labels_wrap_around() {
        assert_eq!(WindroseSector::label_for(0), "N");
        assert_eq!(WindroseSector::label_for(4), "E");
        assert_eq!(WindroseSector::label_for(8), "S");
        assert_eq!(WindroseSector::label_for(12), "W");
        assert_eq!(WindroseSector::label_for(15), "NNW");
        assert_eq!(WindroseSector::label_for(16), "N");
    }
}
