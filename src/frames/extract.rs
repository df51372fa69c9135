//! Small helpers for pulling typed optional values out of collected
//! DataFrames. Shared by the `collect_*` implementations of the frames.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use polars::prelude::*;

pub(crate) fn opt_f64(df: &DataFrame, col: &str, idx: usize) -> PolarsResult<Option<f64>> {
    Ok(df.column(col)?.f64()?.get(idx))
}

pub(crate) fn opt_u32(df: &DataFrame, col: &str, idx: usize) -> PolarsResult<Option<u32>> {
    Ok(df.column(col)?.u32()?.get(idx))
}

pub(crate) fn opt_i32(df: &DataFrame, col: &str, idx: usize) -> PolarsResult<Option<i32>> {
    Ok(df.column(col)?.i32()?.get(idx))
}

pub(crate) fn opt_str(df: &DataFrame, col: &str, idx: usize) -> PolarsResult<Option<String>> {
    Ok(df.column(col)?.str()?.get(idx).map(|s| s.to_string()))
}

pub(crate) fn opt_date(df: &DataFrame, col: &str, idx: usize) -> PolarsResult<Option<NaiveDate>> {
    Ok(df.column(col)?.date()?.get(idx).map(date32_to_naive))
}

pub(crate) fn opt_datetime(
    df: &DataFrame,
    col: &str,
    idx: usize,
) -> PolarsResult<Option<NaiveDateTime>> {
    Ok(df.column(col)?.datetime()?.get(idx).and_then(micros_to_naive))
}

/// Days since the Unix epoch, the physical repr of the polars Date dtype.
fn date32_to_naive(days: i32) -> NaiveDate {
    NaiveDate::default() + Duration::days(days as i64)
}

/// The cleaned frame pins its datetime column to microsecond precision.
fn micros_to_naive(us: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_micros(us).map(|dt| dt.naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date32_zero_is_epoch() {
        assert_eq!(
            date32_to_naive(0),
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
        );
        assert_eq!(
            date32_to_naive(19_723),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn micros_round_trip() {
        let dt = NaiveDate::from_ymd_opt(2025, 10, 2)
            .unwrap()
            .and_hms_opt(7, 30, 0)
            .unwrap();
        let us = dt.and_utc().timestamp_micros();
        assert_eq!(micros_to_naive(us), Some(dt));
    }
}
