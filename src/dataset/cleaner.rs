//! Coerces the loaded frame into analysable shape.
//!
//! Spreadsheet exports are messy: measurement cells hold stray text, date
//! parts arrive as floats or strings, station ids carry whitespace. The rules
//! here are deliberate:
//!
//! * a measurement that cannot be read as a number becomes null, the row
//!   stays;
//! * a row whose date parts or time do not form a real timestamp is dropped;
//! * a row with a blank station id is dropped.

use polars::prelude::*;

use super::schema::{
    COL_DAY, COL_MONTH, COL_STATION, COL_TIME, COL_TIMESTAMP, COL_YEAR, MEASUREMENT_COLUMNS,
};

/// Builds the cleaning plan on top of a loaded frame. The result carries
/// exactly the canonical columns: station, timestamp and the seven
/// measurements, sorted by station then timestamp.
pub(crate) fn clean(frame: LazyFrame) -> LazyFrame {
    let mut frame = frame.with_columns(vec![
        col(COL_STATION)
            .cast(DataType::String)
            .str()
            .strip_chars(lit(NULL))
            .alias(COL_STATION),
        // Floats like 2025.0 survive the detour through Float64, text does not.
        col(COL_YEAR)
            .cast(DataType::Float64)
            .cast(DataType::Int64)
            .alias(COL_YEAR),
        col(COL_MONTH)
            .cast(DataType::Float64)
            .cast(DataType::Int64)
            .alias(COL_MONTH),
        col(COL_DAY)
            .cast(DataType::Float64)
            .cast(DataType::Int64)
            .alias(COL_DAY),
        col(COL_TIME).cast(DataType::String).alias(COL_TIME),
    ]);

    let coerced: Vec<Expr> = MEASUREMENT_COLUMNS
        .iter()
        .map(|m| col(*m).cast(DataType::Float64).alias(*m))
        .collect();
    frame = frame.with_columns(coerced);

    frame = frame.with_column(timestamp_expr().alias(COL_TIMESTAMP));

    let mut keep: Vec<Expr> = vec![col(COL_STATION), col(COL_TIMESTAMP)];
    keep.extend(MEASUREMENT_COLUMNS.iter().map(|m| col(*m)));

    frame
        .filter(
            col(COL_TIMESTAMP)
                .is_not_null()
                .and(col(COL_STATION).is_not_null())
                .and(col(COL_STATION).neq(lit(""))),
        )
        .select(keep)
        .sort(
            [COL_STATION, COL_TIMESTAMP],
            SortMultipleOptions::default(),
        )
}

/// Rebuilds one datetime from the split year/month/day/time columns. Parsing
/// is non-strict, so "2025-13-02 07:00:00" and "2025-10-02 25:00:00" both
/// come out null rather than erroring the whole frame.
fn timestamp_expr() -> Expr {
    let stamp = concat_str(
        [
            col(COL_YEAR).cast(DataType::String).str().zfill(lit(4)),
            lit("-"),
            col(COL_MONTH).cast(DataType::String).str().zfill(lit(2)),
            lit("-"),
            col(COL_DAY).cast(DataType::String).str().zfill(lit(2)),
            lit(" "),
            col(COL_TIME).str().strip_chars(lit(NULL)),
        ],
        "",
        false,
    );
    stamp.str().to_datetime(
        Some(TimeUnit::Microseconds),
        None,
        StrptimeOptions {
            format: Some("%Y-%m-%d %H:%M:%S".into()),
            strict: false,
            exact: true,
            cache: true,
        },
        lit("raise"),
    )
}
