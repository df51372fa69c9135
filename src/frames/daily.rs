//! Daily aggregation of the cleaned observations.

use polars::prelude::*;

use crate::dataset::{
    COL_CLOUD, COL_PRCP, COL_PRES, COL_RHUM, COL_STATION, COL_TEMP, COL_TIMESTAMP, COL_WDIR,
    COL_WSPD,
};
use crate::frames::extract::{opt_date, opt_f64, opt_str, opt_u32};
use crate::types::period::{AnyDate, DatePeriod};
use crate::types::records::daily::DailySummary;
use crate::KlimaatError;

const COL_DATE: &str = "date";

/// A wrapper around a Polars `LazyFrame` with one row per station per
/// calendar day.
///
/// Wind direction is averaged as a circular quantity: the aggregation keeps
/// the mean sine and cosine of the direction and the angle is recovered when
/// collecting, so a day with observations at 350° and 10° averages to north
/// rather than to 180°.
#[derive(Clone)]
pub struct DailyLazyFrame {
    /// The underlying Polars LazyFrame containing the daily rows.
    pub frame: LazyFrame,
}

impl DailyLazyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    pub(crate) fn from_observations(observations: LazyFrame) -> Self {
        let frame = observations
            .group_by_stable([
                col(COL_STATION),
                col(COL_TIMESTAMP).dt().date().alias(COL_DATE),
            ])
            .agg([
                col(COL_TEMP).mean().alias("temperature_mean"),
                col(COL_TEMP).min().alias("temperature_min"),
                col(COL_TEMP).max().alias("temperature_max"),
                col(COL_PRCP).sum().alias("rainfall_total"),
                col(COL_WSPD).mean().alias("wind_speed_mean"),
                col(COL_WDIR).radians().sin().mean().alias("wdir_sin"),
                col(COL_WDIR).radians().cos().mean().alias("wdir_cos"),
                col(COL_RHUM).mean().alias("humidity_mean"),
                col(COL_PRES).mean().alias("pressure_mean"),
                col(COL_CLOUD).mean().alias("cloud_cover_mean"),
                len().alias("observations"),
            ])
            .sort([COL_STATION, COL_DATE], SortMultipleOptions::default());
        Self::new(frame)
    }

    /// Applies an arbitrary Polars predicate, returning a new frame.
    pub fn filter(&self, predicate: Expr) -> DailyLazyFrame {
        DailyLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Filters to the single day `date` resolves to (the start of its range).
    pub fn get_at(&self, date: impl AnyDate) -> Result<DailyLazyFrame, KlimaatError> {
        let naive_date = date.get_date_range().ok_or(KlimaatError::DateParsing)?.start;
        Ok(self.filter(col(COL_DATE).eq(lit(naive_date))))
    }

    /// Filters to days within the inclusive range.
    pub fn get_range(
        &self,
        start: impl AnyDate,
        end: impl AnyDate,
    ) -> Result<DailyLazyFrame, KlimaatError> {
        let start_naive = start
            .get_date_range()
            .ok_or(KlimaatError::DateParsing)?
            .start;
        let end_naive = end.get_date_range().ok_or(KlimaatError::DateParsing)?.end;

        Ok(self.filter(
            col(COL_DATE)
                .gt_eq(lit(start_naive))
                .and(col(COL_DATE).lt_eq(lit(end_naive))),
        ))
    }

    /// Filters to days within a year, a month, or an explicit date pair.
    pub fn get_for_period(&self, period: impl DatePeriod) -> Result<DailyLazyFrame, KlimaatError> {
        let date_period = period.get_date_period().ok_or(KlimaatError::DateParsing)?;
        self.get_range(date_period.start, date_period.end)
    }

    /// Collects into typed [`DailySummary`] records.
    pub fn collect_daily(&self) -> Result<Vec<DailySummary>, KlimaatError> {
        let df = self.frame.clone().collect()?;
        let mut rows = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            let station = opt_str(&df, COL_STATION, idx)?.unwrap_or_default();
            let Some(date) = opt_date(&df, COL_DATE, idx)? else {
                continue;
            };
            let sin = opt_f64(&df, "wdir_sin", idx)?;
            let cos = opt_f64(&df, "wdir_cos", idx)?;
            rows.push(DailySummary {
                station,
                date,
                temperature_mean: opt_f64(&df, "temperature_mean", idx)?,
                temperature_min: opt_f64(&df, "temperature_min", idx)?,
                temperature_max: opt_f64(&df, "temperature_max", idx)?,
                rainfall_total: opt_f64(&df, "rainfall_total", idx)?,
                wind_speed_mean: opt_f64(&df, "wind_speed_mean", idx)?,
                wind_direction_mean: circular_mean_degrees(sin, cos),
                humidity_mean: opt_f64(&df, "humidity_mean", idx)?,
                pressure_mean: opt_f64(&df, "pressure_mean", idx)?,
                cloud_cover_mean: opt_f64(&df, "cloud_cover_mean", idx)?,
                observations: opt_u32(&df, "observations", idx)?.unwrap_or(0),
            });
        }
        Ok(rows)
    }
}

/// Recovers the mean angle from the averaged sine and cosine components.
pub(crate) fn circular_mean_degrees(sin: Option<f64>, cos: Option<f64>) -> Option<f64> {
    let (sin, cos) = sin.zip(cos)?;
    Some(sin.atan2(cos).to_degrees().rem_euclid(360.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::observations::ObservationLazyFrame;
    use crate::types::period::Month;
    use chrono::NaiveDate;

    // One station, two days; the second day has a wind direction pair that
    // straddles north.
    fn observations() -> ObservationLazyFrame {
        let raw = df!(
            "station" => ["STG", "STG", "STG", "STG"],
            "year" => [2025i64, 2025, 2025, 2025],
            "month" => [10i64, 10, 10, 10],
            "day" => [2i64, 2, 3, 3],
            "time" => ["07:00:00", "13:00:00", "07:00:00", "13:00:00"],
            "temp" => [Some(20.0f64), Some(30.0), Some(24.0), None],
            "rhum" => [Some(80.0f64), Some(60.0), Some(70.0), Some(72.0)],
            "pres" => [Some(1010.0f64), Some(1008.0), Some(1012.0), Some(1011.0)],
            "wspd" => [Some(4.0f64), Some(8.0), Some(6.0), Some(10.0)],
            "wdir" => [Some(90.0f64), Some(90.0), Some(350.0), Some(10.0)],
            "cloud" => [Some(6.0f64), Some(2.0), Some(4.0), Some(3.0)],
            "prcp" => [Some(0.0f64), Some(1.2), Some(0.4), Some(0.6)],
        )
        .unwrap();
        ObservationLazyFrame::new(crate::dataset::clean(raw.lazy()))
    }

    #[test]
    fn one_row_per_day_with_arithmetic_means() {
        let days = observations().daily().collect_daily().unwrap();
        assert_eq!(days.len(), 2);

        let first = &days[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2025, 10, 2).unwrap());
        assert_eq!(first.temperature_mean, Some(25.0));
        assert_eq!(first.temperature_min, Some(20.0));
        assert_eq!(first.temperature_max, Some(30.0));
        assert_eq!(first.rainfall_total, Some(1.2));
        assert_eq!(first.observations, 2);

        // null temp is ignored in the second day's stats
        let second = &days[1];
        assert_eq!(second.temperature_mean, Some(24.0));
        assert_eq!(second.observations, 2);
    }

    #[test]
    fn wind_direction_averages_on_the_circle() {
        let days = observations().daily().collect_daily().unwrap();
        // 90° and 90° stay east
        let east = days[0].wind_direction_mean.unwrap();
        assert!((east - 90.0).abs() < 1e-9);
        // 350° and 10° average to north, not to 180°
        let north = days[1].wind_direction_mean.unwrap();
        assert!(north < 1e-9 || (360.0 - north) < 1e-9);
    }

    #[test]
    fn get_at_keeps_a_single_day() {
        let days = observations()
            .daily()
            .get_at(NaiveDate::from_ymd_opt(2025, 10, 3).unwrap())
            .unwrap()
            .collect_daily()
            .unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2025, 10, 3).unwrap());
    }

    #[test]
    fn get_for_period_month_covers_both_days() {
        let days = observations()
            .daily()
            .get_for_period(Month::new(2025, 10))
            .unwrap()
            .collect_daily()
            .unwrap();
        assert_eq!(days.len(), 2);
    }

    #[test]
    fn circular_mean_handles_missing_components() {
        assert_eq!(circular_mean_degrees(None, Some(1.0)), None);
        assert_eq!(circular_mean_degrees(None, None), None);
        let south = circular_mean_degrees(Some(0.0_f64.sin()), Some(-1.0)).unwrap();
        assert!((south - 180.0).abs() < 1e-9);
    }
}
