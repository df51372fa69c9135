//! Chart rendering with plotters. Every function draws one PNG and takes the
//! already-collected records, so chart code never touches the lazy frames.

use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

use super::error::ReportError;
use crate::types::records::daily::DailySummary;
use crate::types::records::windrose::WindroseSector;

const CHART_SIZE: (u32, u32) = (1024, 576);

fn chart_err(path: &Path, err: impl ToString) -> ReportError {
    ReportError::Chart {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Daily mean temperature with the min/max envelope.
pub fn temperature_chart(path: &Path, days: &[DailySummary]) -> Result<(), ReportError> {
    let x_range = date_axis(days)?;
    let y_range = padded_range(
        days.iter()
            .flat_map(|d| [d.temperature_min, d.temperature_mean, d.temperature_max])
            .flatten(),
    )
    .ok_or(ReportError::EmptySelection)?;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| chart_err(path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Daily temperature (\u{b0}C)", ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| chart_err(path, e))?;
    chart
        .configure_mesh()
        .y_desc("\u{b0}C")
        .draw()
        .map_err(|e| chart_err(path, e))?;

    let points = |f: fn(&DailySummary) -> Option<f64>| {
        days.iter()
            .filter_map(move |d| f(d).map(|v| (d.date, v)))
            .collect::<Vec<_>>()
    };

    chart
        .draw_series(LineSeries::new(points(|d| d.temperature_max), &RED))
        .map_err(|e| chart_err(path, e))?
        .label("max")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    chart
        .draw_series(LineSeries::new(points(|d| d.temperature_mean), &BLACK))
        .map_err(|e| chart_err(path, e))?
        .label("mean")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));
    chart
        .draw_series(LineSeries::new(points(|d| d.temperature_min), &BLUE))
        .map_err(|e| chart_err(path, e))?
        .label("min")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| chart_err(path, e))?;

    root.present().map_err(|e| chart_err(path, e))
}

/// Daily mean wind speed as a single line.
pub fn wind_speed_chart(path: &Path, days: &[DailySummary]) -> Result<(), ReportError> {
    let x_range = date_axis(days)?;
    let y_range = padded_range(days.iter().filter_map(|d| d.wind_speed_mean))
        .ok_or(ReportError::EmptySelection)?;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| chart_err(path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Daily mean wind speed (kt)", ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| chart_err(path, e))?;
    chart
        .configure_mesh()
        .y_desc("kt")
        .draw()
        .map_err(|e| chart_err(path, e))?;

    let points: Vec<(NaiveDate, f64)> = days
        .iter()
        .filter_map(|d| d.wind_speed_mean.map(|v| (d.date, v)))
        .collect();
    chart
        .draw_series(LineSeries::new(points, &BLUE))
        .map_err(|e| chart_err(path, e))?;

    root.present().map_err(|e| chart_err(path, e))
}

/// Daily rainfall totals as bars.
pub fn rainfall_chart(path: &Path, days: &[DailySummary]) -> Result<(), ReportError> {
    bar_chart_over_days(
        path,
        days,
        "Daily rainfall (mm)",
        "mm",
        |d| d.rainfall_total,
        BLUE.mix(0.6).filled(),
    )
}

/// Daily mean cloud coverage as bars, fixed to the okta scale.
pub fn cloud_cover_chart(path: &Path, days: &[DailySummary]) -> Result<(), ReportError> {
    let x_range = date_axis(days)?;
    if days.iter().all(|d| d.cloud_cover_mean.is_none()) {
        return Err(ReportError::EmptySelection);
    }

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| chart_err(path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Daily mean cloud coverage (oktas)", ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, 0.0..8.5)
        .map_err(|e| chart_err(path, e))?;
    chart
        .configure_mesh()
        .y_desc("oktas")
        .draw()
        .map_err(|e| chart_err(path, e))?;

    chart
        .draw_series(days.iter().filter_map(|d| {
            d.cloud_cover_mean.map(|v| {
                Rectangle::new(
                    [(d.date, 0.0), (d.date + Duration::days(1), v)],
                    BLUE.mix(0.4).filled(),
                )
            })
        }))
        .map_err(|e| chart_err(path, e))?;

    root.present().map_err(|e| chart_err(path, e))
}

/// Share of wind observations per compass sector as bars, north first.
pub fn windrose_chart(path: &Path, sectors: &[WindroseSector]) -> Result<(), ReportError> {
    if sectors.iter().all(|s| s.observations == 0) {
        return Err(ReportError::EmptySelection);
    }
    let max_share = sectors.iter().map(|s| s.share).fold(0.0_f64, f64::max);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| chart_err(path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Wind direction distribution", ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0i32..16i32, 0.0..(max_share * 110.0))
        .map_err(|e| chart_err(path, e))?;
    chart
        .configure_mesh()
        .x_labels(16)
        .x_label_formatter(&|i| {
            usize::try_from(*i)
                .ok()
                .and_then(|i| sectors.get(i))
                .map(|s| s.label.clone())
                .unwrap_or_default()
        })
        .y_desc("% of observations")
        .draw()
        .map_err(|e| chart_err(path, e))?;

    chart
        .draw_series(sectors.iter().map(|s| {
            let i = s.sector as i32;
            Rectangle::new([(i, 0.0), (i + 1, s.share * 100.0)], BLUE.mix(0.6).filled())
        }))
        .map_err(|e| chart_err(path, e))?;

    root.present().map_err(|e| chart_err(path, e))
}

fn bar_chart_over_days(
    path: &Path,
    days: &[DailySummary],
    caption: &str,
    y_desc: &str,
    value: fn(&DailySummary) -> Option<f64>,
    style: ShapeStyle,
) -> Result<(), ReportError> {
    let x_range = date_axis(days)?;
    let max = days
        .iter()
        .filter_map(value)
        .fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return Err(ReportError::EmptySelection);
    }
    let top = if max > 0.0 { max * 1.1 } else { 1.0 };

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| chart_err(path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, 0.0..top)
        .map_err(|e| chart_err(path, e))?;
    chart
        .configure_mesh()
        .y_desc(y_desc)
        .draw()
        .map_err(|e| chart_err(path, e))?;

    chart
        .draw_series(days.iter().filter_map(|d| {
            value(d).map(|v| Rectangle::new([(d.date, 0.0), (d.date + Duration::days(1), v)], style))
        }))
        .map_err(|e| chart_err(path, e))?;

    root.present().map_err(|e| chart_err(path, e))
}

fn date_axis(days: &[DailySummary]) -> Result<Range<NaiveDate>, ReportError> {
    let first = days
        .iter()
        .map(|d| d.date)
        .min()
        .ok_or(ReportError::EmptySelection)?;
    let last = days.iter().map(|d| d.date).max().unwrap_or(first);
    // a one-day selection still needs a non-degenerate axis
    Ok(first..(last + Duration::days(1)))
}

fn padded_range(values: impl Iterator<Item = f64>) -> Option<Range<f64>> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return None;
    }
    let pad = ((hi - lo) * 0.1).max(0.5);
    Some((lo - pad)..(hi + pad))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn day(date: NaiveDate, mean: Option<f64>) -> DailySummary {
        DailySummary {
            station: "STG".to_string(),
            date,
            temperature_mean: mean,
            temperature_min: mean.map(|v| v - 5.0),
            temperature_max: mean.map(|v| v + 5.0),
            rainfall_total: Some(0.0),
            wind_speed_mean: Some(4.0),
            wind_direction_mean: Some(90.0),
            humidity_mean: Some(80.0),
            pressure_mean: Some(1010.0),
            cloud_cover_mean: Some(4.0),
            observations: 24,
        }
    }

    #[test]
    fn empty_days_refuse_to_render() {
        let path = PathBuf::from("unused.png");
        assert!(matches!(
            temperature_chart(&path, &[]),
            Err(ReportError::EmptySelection)
        ));
        assert!(matches!(
            wind_speed_chart(&path, &[]),
            Err(ReportError::EmptySelection)
        ));
        assert!(matches!(
            rainfall_chart(&path, &[]),
            Err(ReportError::EmptySelection)
        ));
    }

    #[test]
    fn all_null_values_refuse_to_render() {
        let d = NaiveDate::from_ymd_opt(2025, 10, 2).unwrap();
        let days = vec![DailySummary {
            temperature_mean: None,
            temperature_min: None,
            temperature_max: None,
            ..day(d, None)
        }];
        assert!(matches!(
            temperature_chart(&PathBuf::from("unused.png"), &days),
            Err(ReportError::EmptySelection)
        ));
    }

    #[test]
    fn windrose_with_no_observations_refuses_to_render() {
        let sectors: Vec<WindroseSector> = (0..16)
            .map(|sector| WindroseSector {
                sector,
                label: WindroseSector::label_for(sector).to_string(),
                observations: 0,
                share: 0.0,
                mean_speed: None,
                max_speed: None,
            })
            .collect();
        assert!(matches!(
            windrose_chart(&PathBuf::from("unused.png"), &sectors),
            Err(ReportError::EmptySelection)
        ));
    }

    #[test]
    fn date_axis_never_degenerates() {
        let d = NaiveDate::from_ymd_opt(2025, 10, 2).unwrap();
        let axis = date_axis(&[day(d, Some(20.0))]).unwrap();
        assert!(axis.start < axis.end);
    }

    #[test]
    fn padded_range_keeps_flat_series_visible() {
        let range = padded_range([20.0, 20.0].into_iter()).unwrap();
        assert!(range.start < 20.0 && range.end > 20.0);
        assert!(padded_range(std::iter::empty()).is_none());
    }
}
