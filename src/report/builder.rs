//! Assembles a full report directory: a Markdown summary, the selection as
//! CSV, and the charts.

use bon::bon;
use log::debug;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use super::charts;
use super::csv::write_csv;
use super::error::ReportError;
use crate::frames::observations::ObservationLazyFrame;
use crate::types::records::summary::SelectionSummary;
use crate::utils::ensure_dir;
use crate::KlimaatError;

/// File names and paths of everything a report run produced.
#[derive(Debug, Clone)]
pub struct ReportArtifacts {
    pub directory: PathBuf,
    pub markdown: PathBuf,
    pub csv: PathBuf,
    pub charts: Vec<PathBuf>,
}

pub struct Report;

#[bon]
impl Report {
    /// Renders a report for the given selection.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.observations(&ObservationLazyFrame)`: **Required.** The selection
    ///   to report on, already filtered to the wanted station and period.
    /// * `.output_dir(PathBuf)`: **Required.** Directory for the artifacts;
    ///   created when missing.
    /// * `.title(String)`: Optional. Heading of the Markdown report. Defaults
    ///   to the station label of the selection.
    ///
    /// Charts that have no data to show (for example cloud coverage on a
    /// dataset without a cloud column) are skipped, not treated as errors.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::EmptySelection`] when the selection holds no
    /// observations at all.
    #[builder]
    pub fn generate(
        observations: &ObservationLazyFrame,
        output_dir: PathBuf,
        title: Option<String>,
    ) -> Result<ReportArtifacts, KlimaatError> {
        let summary = observations
            .summarize()?
            .ok_or(ReportError::EmptySelection)?;
        ensure_dir(&output_dir).map_err(|e| ReportError::OutputDir(output_dir.clone(), e))?;

        let days = observations.daily().collect_daily()?;
        let sectors = observations.windrose().collect_sectors()?;

        let csv = output_dir.join("observations.csv");
        write_csv(&csv, &observations.frame)?;

        let mut rendered = Vec::new();
        let mut chart = |name: &str, result: Result<(), ReportError>| match result {
            Ok(()) => {
                rendered.push(name.to_string());
                Ok(())
            }
            Err(ReportError::EmptySelection) => {
                debug!("Skipping chart {name}: nothing to draw");
                Ok(())
            }
            Err(e) => Err(e),
        };

        chart(
            "temperature.png",
            charts::temperature_chart(&output_dir.join("temperature.png"), &days),
        )?;
        chart(
            "wind_speed.png",
            charts::wind_speed_chart(&output_dir.join("wind_speed.png"), &days),
        )?;
        chart(
            "rainfall.png",
            charts::rainfall_chart(&output_dir.join("rainfall.png"), &days),
        )?;
        chart(
            "cloud_cover.png",
            charts::cloud_cover_chart(&output_dir.join("cloud_cover.png"), &days),
        )?;
        chart(
            "windrose.png",
            charts::windrose_chart(&output_dir.join("windrose.png"), &sectors),
        )?;

        let title = title.unwrap_or_else(|| format!("Weather report for {}", summary.station));
        let body = render_markdown(&title, &summary, days.len(), &rendered);
        let markdown = output_dir.join("report.md");
        fs::write(&markdown, body).map_err(|e| ReportError::Write(markdown.clone(), e))?;

        Ok(ReportArtifacts {
            directory: output_dir.clone(),
            markdown,
            csv,
            charts: rendered.iter().map(|n| output_dir.join(n)).collect(),
        })
    }
}

fn render_markdown(
    title: &str,
    summary: &SelectionSummary,
    day_count: usize,
    charts: &[String],
) -> String {
    let mut md = String::new();
    // writeln! to a String cannot fail
    let _ = writeln!(md, "# {title}\n");
    let _ = writeln!(md, "## Selection\n");
    let _ = writeln!(md, "- Station(s): {}", summary.station);
    let _ = writeln!(md, "- Observations: {}", summary.observations);
    let _ = writeln!(
        md,
        "- From {} to {}",
        summary.first.format("%Y-%m-%d %H:%M"),
        summary.last.format("%Y-%m-%d %H:%M")
    );
    let _ = writeln!(md, "- Days aggregated: {day_count}\n");

    let _ = writeln!(md, "## Headline statistics\n");
    let _ = writeln!(md, "| Quantity | Value |");
    let _ = writeln!(md, "|----------|-------|");
    let rows = [
        ("Mean temperature", summary.temperature_mean, "\u{b0}C"),
        ("Mean relative humidity", summary.humidity_mean, "%"),
        ("Mean wind speed", summary.wind_speed_mean, "kt"),
        ("Mean pressure", summary.pressure_mean, "hPa"),
        ("Mean cloud coverage", summary.cloud_cover_mean, "oktas"),
        ("Total rainfall", summary.rainfall_total, "mm"),
    ];
    for (label, value, unit) in rows {
        let _ = writeln!(md, "| {label} | {} |", fmt_value(value, unit));
    }

    let _ = writeln!(md, "\n## Data\n");
    let _ = writeln!(
        md,
        "The full selection is in [observations.csv](observations.csv)."
    );

    if !charts.is_empty() {
        let _ = writeln!(md, "\n## Charts\n");
        for name in charts {
            let stem = name.trim_end_matches(".png").replace('_', " ");
            let _ = writeln!(md, "![{stem}]({name})\n");
        }
    }
    md
}

fn fmt_value(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v:.1} {unit}"),
        None => "n/a".to_string(),
    }
}
