//! Command line interface.

pub mod command;

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use clap::{command, Args, Parser, Subcommand};
use indicatif::ProgressBar;
use klimaat::{KlimaatError, Month, ObservationLazyFrame, Year};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Observation CSV to load
    #[arg(short, long)]
    pub data: PathBuf,

    /// Year and month (YYYY-MM) for exports that only carry a day column
    #[arg(long, value_parser = parse_month)]
    pub base_month: Option<Month>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the stations in the dataset
    Stations {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Headline statistics for a selection
    Summary {
        #[command(flatten)]
        selection: Selection,
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Daily aggregates for a selection
    Daily {
        #[command(flatten)]
        selection: Selection,
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Monthly aggregates for a selection
    Monthly {
        #[command(flatten)]
        selection: Selection,
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Wind direction distribution for a selection
    Windrose {
        #[command(flatten)]
        selection: Selection,
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Write the selected observations to a CSV file
    Export {
        #[command(flatten)]
        selection: Selection,
        /// Destination file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Render a report directory with charts, CSV and a Markdown summary
    Report {
        #[command(flatten)]
        selection: Selection,
        /// Destination directory, created when missing
        #[arg(short, long)]
        output: PathBuf,
        /// Heading of the Markdown report
        #[arg(long)]
        title: Option<String>,
    },
}

/// Station and period filters shared by all data commands.
#[derive(Args)]
pub struct Selection {
    /// Limit to one station id
    #[arg(short, long)]
    pub station: Option<String>,

    /// A single day (YYYY-MM-DD)
    #[arg(long, conflicts_with_all = ["from", "to", "year"])]
    pub date: Option<NaiveDate>,

    /// Start of an inclusive date range (YYYY-MM-DD)
    #[arg(long, requires = "to", conflicts_with = "year")]
    pub from: Option<NaiveDate>,

    /// End of an inclusive date range (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,

    /// A whole year
    #[arg(long)]
    pub year: Option<i32>,
}

impl Selection {
    /// Applies the period filters to an already station-filtered frame.
    pub fn apply(
        &self,
        frame: ObservationLazyFrame,
    ) -> Result<ObservationLazyFrame, KlimaatError> {
        if let Some(date) = self.date {
            return frame.get_at(date);
        }
        if let (Some(from), Some(to)) = (self.from, self.to) {
            return frame.get_range(from, to);
        }
        if let Some(year) = self.year {
            return frame.get_for_period(Year(year));
        }
        Ok(frame)
    }
}

fn parse_month(value: &str) -> Result<Month, String> {
    let (year, month) = value
        .split_once('-')
        .ok_or_else(|| format!("'{value}' is not a YYYY-MM month"))?;
    let year: i32 = year
        .parse()
        .map_err(|_| format!("'{value}' is not a YYYY-MM month"))?;
    let month: u32 = month
        .parse()
        .map_err(|_| format!("'{value}' is not a YYYY-MM month"))?;
    if !(1..=12).contains(&month) {
        return Err(format!("month {month} is out of range 1..=12"));
    }
    Ok(Month::new(year, month))
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}
