//! The `ObservationLazyFrame` wrapper around the cleaned hourly observations.

use polars::prelude::*;

use crate::dataset::{
    COL_CLOUD, COL_PRCP, COL_PRES, COL_RHUM, COL_STATION, COL_TEMP, COL_TIMESTAMP, COL_WDIR,
    COL_WSPD,
};
use crate::frames::daily::DailyLazyFrame;
use crate::frames::extract::{opt_datetime, opt_f64, opt_str, opt_u32};
use crate::frames::monthly::MonthlyLazyFrame;
use crate::frames::windrose::WindroseLazyFrame;
use crate::types::period::{AnyDate, DatePeriod};
use crate::types::records::observation::Observation;
use crate::types::records::summary::SelectionSummary;
use crate::KlimaatError;

/// A wrapper around a Polars `LazyFrame` holding cleaned observations.
///
/// One row per station per timestamp, with the seven canonical measurement
/// columns. Provides filtering by date and period, aggregation into the
/// daily/monthly/windrose frames, and typed collection.
///
/// Instances are obtained via [`crate::Klimaat::observations`].
#[derive(Clone)]
pub struct ObservationLazyFrame {
    /// The underlying Polars LazyFrame containing the observation rows.
    pub frame: LazyFrame,
}

impl ObservationLazyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Applies an arbitrary Polars predicate, returning a new frame.
    pub fn filter(&self, predicate: Expr) -> ObservationLazyFrame {
        ObservationLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Keeps only rows from the given station.
    pub fn for_station(&self, station: &str) -> ObservationLazyFrame {
        self.filter(col(COL_STATION).eq(lit(station)))
    }

    /// Keeps observations whose calendar date falls on the given date. A
    /// [`crate::Month`] or [`crate::Year`] widens this to the whole month or
    /// year.
    pub fn get_at(&self, date: impl AnyDate) -> Result<ObservationLazyFrame, KlimaatError> {
        let range = date.get_date_range().ok_or(KlimaatError::DateParsing)?;
        Ok(self.filter(
            col(COL_TIMESTAMP)
                .dt()
                .date()
                .gt_eq(lit(range.start))
                .and(col(COL_TIMESTAMP).dt().date().lt_eq(lit(range.end))),
        ))
    }

    /// Keeps observations between the start of `start` and the end of `end`,
    /// both inclusive.
    pub fn get_range(
        &self,
        start: impl AnyDate,
        end: impl AnyDate,
    ) -> Result<ObservationLazyFrame, KlimaatError> {
        let start_naive = start
            .get_date_range()
            .ok_or(KlimaatError::DateParsing)?
            .start;
        let end_naive = end.get_date_range().ok_or(KlimaatError::DateParsing)?.end;

        Ok(self.filter(
            col(COL_TIMESTAMP)
                .dt()
                .date()
                .gt_eq(lit(start_naive))
                .and(col(COL_TIMESTAMP).dt().date().lt_eq(lit(end_naive))),
        ))
    }

    /// Keeps observations within the period (a year, a month, or an explicit
    /// date pair).
    pub fn get_for_period(
        &self,
        period: impl DatePeriod,
    ) -> Result<ObservationLazyFrame, KlimaatError> {
        let date_period = period.get_date_period().ok_or(KlimaatError::DateParsing)?;
        self.get_range(date_period.start, date_period.end)
    }

    /// Aggregates the selection into one row per station per calendar day.
    pub fn daily(&self) -> DailyLazyFrame {
        DailyLazyFrame::from_observations(self.frame.clone())
    }

    /// Aggregates the selection into one row per station per calendar month.
    pub fn monthly(&self) -> MonthlyLazyFrame {
        MonthlyLazyFrame::from_observations(self.frame.clone())
    }

    /// Bins the selection's wind observations into the sixteen compass
    /// sectors.
    pub fn windrose(&self) -> WindroseLazyFrame {
        WindroseLazyFrame::from_observations(self.frame.clone())
    }

    /// Computes the headline statistics of the selection.
    ///
    /// Returns `Ok(None)` when the selection holds no rows.
    pub fn summarize(&self) -> Result<Option<SelectionSummary>, KlimaatError> {
        let stats = self
            .frame
            .clone()
            .select([
                len().alias("observations"),
                col(COL_TIMESTAMP).min().alias("first"),
                col(COL_TIMESTAMP).max().alias("last"),
                col(COL_TEMP).mean().alias("temperature_mean"),
                col(COL_RHUM).mean().alias("humidity_mean"),
                col(COL_WSPD).mean().alias("wind_speed_mean"),
                col(COL_PRES).mean().alias("pressure_mean"),
                col(COL_CLOUD).mean().alias("cloud_cover_mean"),
                col(COL_PRCP).sum().alias("rainfall_total"),
            ])
            .collect()?;

        let observations = opt_u32(&stats, "observations", 0)?.unwrap_or(0);
        let first = opt_datetime(&stats, "first", 0)?;
        let last = opt_datetime(&stats, "last", 0)?;
        let (Some(first), Some(last)) = (first, last) else {
            return Ok(None);
        };
        if observations == 0 {
            return Ok(None);
        }

        Ok(Some(SelectionSummary {
            station: self.station_label()?,
            observations,
            first,
            last,
            temperature_mean: opt_f64(&stats, "temperature_mean", 0)?,
            humidity_mean: opt_f64(&stats, "humidity_mean", 0)?,
            wind_speed_mean: opt_f64(&stats, "wind_speed_mean", 0)?,
            pressure_mean: opt_f64(&stats, "pressure_mean", 0)?,
            cloud_cover_mean: opt_f64(&stats, "cloud_cover_mean", 0)?,
            rainfall_total: opt_f64(&stats, "rainfall_total", 0)?,
        }))
    }

    /// Collects the selection into typed [`Observation`] records.
    pub fn collect_observations(&self) -> Result<Vec<Observation>, KlimaatError> {
        let df = self.frame.clone().collect()?;
        let mut rows = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            let station = opt_str(&df, COL_STATION, idx)?.unwrap_or_default();
            let Some(timestamp) = opt_datetime(&df, COL_TIMESTAMP, idx)? else {
                continue;
            };
            rows.push(Observation {
                station,
                timestamp,
                temperature: opt_f64(&df, COL_TEMP, idx)?,
                humidity: opt_f64(&df, COL_RHUM, idx)?,
                pressure: opt_f64(&df, COL_PRES, idx)?,
                wind_speed: opt_f64(&df, COL_WSPD, idx)?,
                wind_direction: opt_f64(&df, COL_WDIR, idx)?,
                cloud_cover: opt_f64(&df, COL_CLOUD, idx)?,
                rainfall: opt_f64(&df, COL_PRCP, idx)?,
            });
        }
        Ok(rows)
    }

    // All station ids in the selection, joined for the summary header. A
    // single-station selection yields its id unchanged.
    fn station_label(&self) -> Result<String, KlimaatError> {
        let df = self
            .frame
            .clone()
            .select([col(COL_STATION).unique().sort(Default::default())])
            .collect()?;
        let names: Vec<String> = df
            .column(COL_STATION)?
            .str()?
            .into_iter()
            .flatten()
            .map(|s| s.to_string())
            .collect();
        Ok(names.join(", "))
    }
}
