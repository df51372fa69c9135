use anyhow::Result;
use klimaat::Klimaat;

use super::{fmt_opt, select};
use crate::cli::Selection;

pub fn monthly(client: &Klimaat, selection: &Selection, json: bool) -> Result<()> {
    let months = select(client, selection)?.monthly().collect_monthly()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&months)?);
        return Ok(());
    }
    if months.is_empty() {
        println!("No observations match the selection");
        return Ok(());
    }

    println!(
        "{:<12} {:<7} {:>7} {:>7} {:>7} {:>7} {:>7} {:>5}",
        "Station", "Month", "Tmean", "Tmin", "Tmax", "Rain", "Wind", "Obs"
    );
    for month in &months {
        println!(
            "{:<12} {:<7} {:>7} {:>7} {:>7} {:>7} {:>7} {:>5}",
            month.station,
            format!("{:04}-{:02}", month.year, month.month),
            fmt_opt(month.temperature_mean),
            fmt_opt(month.temperature_min),
            fmt_opt(month.temperature_max),
            fmt_opt(month.rainfall_total),
            fmt_opt(month.wind_speed_mean),
            month.observations
        );
    }
    Ok(())
}
