//! Windrose binning: wind observations grouped into the sixteen 22.5°
//! compass sectors.

use polars::prelude::*;

use crate::dataset::{COL_WDIR, COL_WSPD};
use crate::frames::extract::{opt_f64, opt_u32};
use crate::types::records::windrose::WindroseSector;
use crate::KlimaatError;

const COL_SECTOR: &str = "sector";

/// A wrapper around a Polars `LazyFrame` with one row per occupied windrose
/// sector.
///
/// The binning runs over the whole selection it was built from; filter the
/// observations down to one station or period first. Rows missing either the
/// wind direction or the wind speed are excluded before binning.
#[derive(Clone)]
pub struct WindroseLazyFrame {
    /// The underlying Polars LazyFrame containing the per-sector rows.
    pub frame: LazyFrame,
}

impl WindroseLazyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    pub(crate) fn from_observations(observations: LazyFrame) -> Self {
        let frame = observations
            .filter(col(COL_WDIR).is_not_null().and(col(COL_WSPD).is_not_null()))
            .with_column(sector_expr().alias(COL_SECTOR))
            .group_by_stable([col(COL_SECTOR)])
            .agg([
                len().alias("observations"),
                col(COL_WSPD).mean().alias("mean_speed"),
                col(COL_WSPD).max().alias("max_speed"),
            ])
            .sort([COL_SECTOR], SortMultipleOptions::default());
        Self::new(frame)
    }

    /// Applies an arbitrary Polars predicate, returning a new frame.
    pub fn filter(&self, predicate: Expr) -> WindroseLazyFrame {
        WindroseLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Collects into exactly sixteen [`WindroseSector`] records, north first.
    /// Sectors without observations come back with a zero count and share.
    pub fn collect_sectors(&self) -> Result<Vec<WindroseSector>, KlimaatError> {
        let df = self.frame.clone().collect()?;

        let mut sectors: Vec<WindroseSector> = (0..16)
            .map(|sector| WindroseSector {
                sector,
                label: WindroseSector::label_for(sector).to_string(),
                observations: 0,
                share: 0.0,
                mean_speed: None,
                max_speed: None,
            })
            .collect();

        let mut total = 0u32;
        for idx in 0..df.height() {
            let Some(sector) = opt_u32(&df, COL_SECTOR, idx)? else {
                continue;
            };
            let slot = &mut sectors[(sector as usize) % 16];
            slot.observations = opt_u32(&df, "observations", idx)?.unwrap_or(0);
            slot.mean_speed = opt_f64(&df, "mean_speed", idx)?;
            slot.max_speed = opt_f64(&df, "max_speed", idx)?;
            total += slot.observations;
        }

        if total > 0 {
            for slot in &mut sectors {
                slot.share = f64::from(slot.observations) / f64::from(total);
            }
        }
        Ok(sectors)
    }
}

/// Maps a direction in degrees onto its sector index. Sector 0 is centred on
/// north, so it covers 348.75° up to 11.25°; each following sector advances
/// 22.5° clockwise.
fn sector_expr() -> Expr {
    let normalized = (col(COL_WDIR) % lit(360.0) + lit(360.0)) % lit(360.0);
    ((normalized + lit(11.25)) % lit(360.0) / lit(22.5))
        .floor()
        .cast(DataType::UInt32)
}
