//! The main entry point of the crate: the [`Klimaat`] client.

use bon::bon;
use log::{info, warn};
use polars::prelude::*;
use std::path::PathBuf;

use crate::dataset::{clean, load_csv, DatasetError, COL_STATION, COL_TIMESTAMP};
use crate::frames::daily::DailyLazyFrame;
use crate::frames::extract::{opt_datetime, opt_str, opt_u32};
use crate::frames::monthly::MonthlyLazyFrame;
use crate::frames::observations::ObservationLazyFrame;
use crate::frames::windrose::WindroseLazyFrame;
use crate::types::period::Month;
use crate::types::station::Station;
use crate::KlimaatError;

/// A client over one cleaned observation dataset.
///
/// Loading reads the CSV eagerly, cleans it once, and keeps the result as a
/// `LazyFrame` that all selections branch off. The station index is computed
/// up front so station arguments can be validated before any query runs.
///
/// # Examples
///
/// ```no_run
/// use klimaat::{Klimaat, Month};
///
/// # fn main() -> Result<(), klimaat::KlimaatError> {
/// let client = Klimaat::from_csv("observations.csv")?;
/// for station in client.stations() {
///     println!("{}: {} observations", station.id, station.observations);
/// }
///
/// let daily = client
///     .daily()
///     .station("STG")
///     .call()?
///     .get_for_period(Month::new(2025, 10))?
///     .collect_daily()?;
/// println!("{} days aggregated", daily.len());
/// # Ok(())
/// # }
/// ```
pub struct Klimaat {
    observations: LazyFrame,
    stations: Vec<Station>,
}

#[bon]
impl Klimaat {
    /// Loads a dataset with the default options. Equivalent to
    /// `Klimaat::load().path(path).call()`.
    pub fn from_csv(path: impl Into<PathBuf>) -> Result<Self, KlimaatError> {
        Self::load().path(path.into()).call()
    }

    /// Loads and cleans an observation CSV.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.path(PathBuf)`: **Required.** The CSV file to load.
    /// * `.base_month(Month)`: Optional. Supplies the year and month for
    ///   exports that only carry a day-of-month column.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::MissingColumns`] when the file lacks a station
    /// id, the date parts, or any measurement column, and
    /// [`DatasetError::NoValidObservations`] when cleaning drops every row.
    #[builder]
    pub fn load(path: PathBuf, base_month: Option<Month>) -> Result<Self, KlimaatError> {
        let raw = load_csv(&path, base_month)?;
        let total = frame_height(&raw)?;

        let cleaned = clean(raw).collect()?;
        if cleaned.height() == 0 {
            return Err(DatasetError::NoValidObservations(path).into());
        }

        let dropped = total.saturating_sub(cleaned.height());
        if dropped > 0 {
            warn!(
                "Dropped {dropped} of {total} rows from {} (unusable timestamp or station id)",
                path.display()
            );
        }

        let stations = station_index(cleaned.clone().lazy())?;
        info!(
            "Loaded {} observations from {} station(s)",
            cleaned.height(),
            stations.len()
        );

        Ok(Self {
            observations: cleaned.lazy(),
            stations,
        })
    }

    /// The stations present in the dataset, sorted by id.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// The cleaned observations, optionally narrowed to one station.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.station(&str)`: Optional. Keep only this station's rows. The id
    ///   must exist in the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`KlimaatError::UnknownStation`] when the station id is not in
    /// the dataset.
    #[builder]
    pub fn observations(&self, station: Option<&str>) -> Result<ObservationLazyFrame, KlimaatError> {
        let frame = ObservationLazyFrame::new(self.observations.clone());
        match station {
            Some(id) => {
                self.validate_station(id)?;
                Ok(frame.for_station(id))
            }
            None => Ok(frame),
        }
    }

    /// Daily aggregation, optionally narrowed to one station.
    ///
    /// Accepts the same `.station(&str)` argument as
    /// [`Klimaat::observations`].
    #[builder]
    pub fn daily(&self, station: Option<&str>) -> Result<DailyLazyFrame, KlimaatError> {
        Ok(self
            .observations()
            .maybe_station(station)
            .call()?
            .daily())
    }

    /// Monthly aggregation, optionally narrowed to one station.
    ///
    /// Accepts the same `.station(&str)` argument as
    /// [`Klimaat::observations`].
    #[builder]
    pub fn monthly(&self, station: Option<&str>) -> Result<MonthlyLazyFrame, KlimaatError> {
        Ok(self
            .observations()
            .maybe_station(station)
            .call()?
            .monthly())
    }

    /// Windrose binning, optionally narrowed to one station.
    ///
    /// Accepts the same `.station(&str)` argument as
    /// [`Klimaat::observations`].
    #[builder]
    pub fn windrose(&self, station: Option<&str>) -> Result<WindroseLazyFrame, KlimaatError> {
        Ok(self
            .observations()
            .maybe_station(station)
            .call()?
            .windrose())
    }

    fn validate_station(&self, station: &str) -> Result<(), KlimaatError> {
        if self.stations.iter().any(|s| s.id == station) {
            return Ok(());
        }
        Err(KlimaatError::UnknownStation {
            station: station.to_string(),
            available: self.stations.iter().map(|s| s.id.clone()).collect(),
        })
    }
}

fn frame_height(frame: &LazyFrame) -> Result<usize, KlimaatError> {
    let df = frame.clone().select([len().alias("height")]).collect()?;
    Ok(opt_u32(&df, "height", 0)?.unwrap_or(0) as usize)
}

fn station_index(observations: LazyFrame) -> Result<Vec<Station>, KlimaatError> {
    let df = observations
        .group_by_stable([col(COL_STATION)])
        .agg([
            len().alias("observations"),
            col(COL_TIMESTAMP).min().alias("first"),
            col(COL_TIMESTAMP).max().alias("last"),
        ])
        .sort([COL_STATION], SortMultipleOptions::default())
        .collect()?;

    let mut stations = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let Some(id) = opt_str(&df, COL_STATION, idx)? else {
            continue;
        };
        let (Some(first), Some(last)) = (
            opt_datetime(&df, "first", idx)?,
            opt_datetime(&df, "last", idx)?,
        ) else {
            continue;
        };
        stations.push(Station {
            id,
            observations: opt_u32(&df, "observations", idx)?.unwrap_or(0),
            first,
            last,
        });
    }
    Ok(stations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    fn dataset() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "StationID,Year,Month,Day,Time,DryBulb T.,RH,Pressure,Wind Velocity,Wind direction,Total Cloud Coverage,Rainfall\n\
             STG,2025,10,2,07:00:00,20.0,80,1010.0,4,90,6,0.0\n\
             STG,2025,10,2,13:00:00,30.0,60,1008.0,8,90,2,1.2\n\
             STG,2025,10,3,07:00:00,24.0,70,1012.0,6,350,4,0.4\n\
             BRD,2025,10,2,07:00:00,27.0,85,1011.0,5,200,7,0.0\n\
             ,2025,10,2,07:00:00,19.0,80,1010.0,4,90,6,0.0\n\
             STG,2025,13,2,07:00:00,19.0,80,1010.0,4,90,6,0.0\n"
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_and_indexes_stations() {
        let file = dataset();
        let client = Klimaat::from_csv(file.path()).unwrap();

        let stations = client.stations();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].id, "BRD");
        assert_eq!(stations[1].id, "STG");
        assert_eq!(stations[1].observations, 3);
        assert_eq!(
            stations[1].first,
            NaiveDate::from_ymd_opt(2025, 10, 2)
                .unwrap()
                .and_hms_opt(7, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn unknown_station_is_rejected_with_alternatives() {
        let file = dataset();
        let client = Klimaat::from_csv(file.path()).unwrap();

        let Err(err) = client.daily().station("XYZ").call() else {
            panic!("expected an unknown-station error");
        };
        match err {
            KlimaatError::UnknownStation { station, available } => {
                assert_eq!(station, "XYZ");
                assert_eq!(available, vec!["BRD".to_string(), "STG".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn daily_aggregation_end_to_end() {
        let file = dataset();
        let client = Klimaat::from_csv(file.path()).unwrap();

        let days = client
            .daily()
            .station("STG")
            .call()
            .unwrap()
            .collect_daily()
            .unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].temperature_mean, Some(25.0));
        assert_eq!(days[0].rainfall_total, Some(1.2));
    }

    #[test]
    fn all_rows_invalid_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "StationID,Year,Month,Day,Time,DryBulb T.\nSTG,2025,13,2,07:00:00,20.0\n"
        )
        .unwrap();
        file.flush().unwrap();

        let Err(err) = Klimaat::from_csv(file.path()) else {
            panic!("expected an error when every row is dropped");
        };
        assert!(matches!(
            err,
            KlimaatError::Dataset(DatasetError::NoValidObservations(_))
        ));
    }

    #[test]
    fn base_month_fills_in_aws_exports() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "StationID,Dag,Tijd,Temperature,Wind Speed,Wind Direction\n\
             AWS-01,2,07:00:00,27.1,5,200\n\
             AWS-01,2,13:00:00,31.3,7,220\n"
        )
        .unwrap();
        file.flush().unwrap();

        let client = Klimaat::load()
            .path(file.path().to_path_buf())
            .base_month(Month::new(2025, 10))
            .call()
            .unwrap();

        let rows = client
            .observations()
            .station("AWS-01")
            .call()
            .unwrap()
            .collect_observations()
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].timestamp.date(),
            NaiveDate::from_ymd_opt(2025, 10, 2).unwrap()
        );
        // columns the AWS export lacks are null, not missing
        assert_eq!(rows[0].rainfall, None);
    }
}
