//! Monthly aggregation of the cleaned observations.

use polars::prelude::*;

use crate::dataset::{
    COL_CLOUD, COL_PRCP, COL_PRES, COL_RHUM, COL_STATION, COL_TEMP, COL_TIMESTAMP, COL_WSPD,
};
use crate::frames::extract::{opt_f64, opt_i32, opt_str, opt_u32};
use crate::types::period::{Month, MonthPeriod};
use crate::types::records::monthly::MonthlySummary;
use crate::KlimaatError;

const COL_YEAR: &str = "year";
const COL_MONTH: &str = "month";

/// A wrapper around a Polars `LazyFrame` with one row per station per
/// calendar month.
#[derive(Clone)]
pub struct MonthlyLazyFrame {
    /// The underlying Polars LazyFrame containing the monthly rows.
    pub frame: LazyFrame,
}

impl MonthlyLazyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    pub(crate) fn from_observations(observations: LazyFrame) -> Self {
        let frame = observations
            .group_by_stable([
                col(COL_STATION),
                col(COL_TIMESTAMP).dt().year().alias(COL_YEAR),
                col(COL_TIMESTAMP)
                    .dt()
                    .month()
                    .cast(DataType::Int32)
                    .alias(COL_MONTH),
            ])
            .agg([
                col(COL_TEMP).mean().alias("temperature_mean"),
                col(COL_TEMP).min().alias("temperature_min"),
                col(COL_TEMP).max().alias("temperature_max"),
                col(COL_PRCP).sum().alias("rainfall_total"),
                col(COL_WSPD).mean().alias("wind_speed_mean"),
                col(COL_RHUM).mean().alias("humidity_mean"),
                col(COL_PRES).mean().alias("pressure_mean"),
                col(COL_CLOUD).mean().alias("cloud_cover_mean"),
                len().alias("observations"),
            ])
            .sort(
                [COL_STATION, COL_YEAR, COL_MONTH],
                SortMultipleOptions::default(),
            );
        Self::new(frame)
    }

    /// Applies an arbitrary Polars predicate, returning a new frame.
    pub fn filter(&self, predicate: Expr) -> MonthlyLazyFrame {
        MonthlyLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Filters to a single calendar month.
    pub fn get_at(&self, month: Month) -> MonthlyLazyFrame {
        self.filter(
            col(COL_YEAR)
                .eq(lit(month.year()))
                .and(col(COL_MONTH).eq(lit(month.month() as i32))),
        )
    }

    /// Filters to months within the inclusive range.
    pub fn get_range(&self, start: Month, end: Month) -> MonthlyLazyFrame {
        // year * 100 + month orders months lexicographically
        let key = col(COL_YEAR) * lit(100) + col(COL_MONTH);
        let start_key = start.year() * 100 + start.month() as i32;
        let end_key = end.year() * 100 + end.month() as i32;
        self.filter(key.clone().gt_eq(lit(start_key)).and(key.lt_eq(lit(end_key))))
    }

    /// Filters to months within a year, a month, or an explicit month pair.
    pub fn get_for_period(
        &self,
        period: impl MonthPeriod,
    ) -> Result<MonthlyLazyFrame, KlimaatError> {
        let months = period.get_month_period().ok_or(KlimaatError::DateParsing)?;
        Ok(self.get_range(months.start, months.end))
    }

    /// Collects into typed [`MonthlySummary`] records.
    pub fn collect_monthly(&self) -> Result<Vec<MonthlySummary>, KlimaatError> {
        let df = self.frame.clone().collect()?;
        let mut rows = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            let station = opt_str(&df, COL_STATION, idx)?.unwrap_or_default();
            let (Some(year), Some(month)) = (
                opt_i32(&df, COL_YEAR, idx)?,
                opt_i32(&df, COL_MONTH, idx)?,
            ) else {
                continue;
            };
            rows.push(MonthlySummary {
                station,
                year,
                month: month as u32,
                temperature_mean: opt_f64(&df, "temperature_mean", idx)?,
                temperature_min: opt_f64(&df, "temperature_min", idx)?,
                temperature_max: opt_f64(&df, "temperature_max", idx)?,
                rainfall_total: opt_f64(&df, "rainfall_total", idx)?,
                wind_speed_mean: opt_f64(&df, "wind_speed_mean", idx)?,
                humidity_mean: opt_f64(&df, "humidity_mean", idx)?,
                pressure_mean: opt_f64(&df, "pressure_mean", idx)?,
                cloud_cover_mean: opt_f64(&df, "cloud_cover_mean", idx)?,
                observations: opt_u32(&df, "observations", idx)?.unwrap_or(0),
            });
        }
        Ok(rows)
    }
}
