use anyhow::Result;
use klimaat::Klimaat;

use super::{fmt_opt, select};
use crate::cli::Selection;

pub fn daily(client: &Klimaat, selection: &Selection, json: bool) -> Result<()> {
    let days = select(client, selection)?.daily().collect_daily()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&days)?);
        return Ok(());
    }
    if days.is_empty() {
        println!("No observations match the selection");
        return Ok(());
    }

    println!(
        "{:<12} {:<10} {:>7} {:>7} {:>7} {:>7} {:>7} {:>7} {:>5}",
        "Station", "Date", "Tmean", "Tmin", "Tmax", "Rain", "Wind", "Wdir", "Obs"
    );
    for day in &days {
        println!(
            "{:<12} {:<10} {:>7} {:>7} {:>7} {:>7} {:>7} {:>7} {:>5}",
            day.station,
            day.date.format("%Y-%m-%d"),
            fmt_opt(day.temperature_mean),
            fmt_opt(day.temperature_min),
            fmt_opt(day.temperature_max),
            fmt_opt(day.rainfall_total),
            fmt_opt(day.wind_speed_mean),
            fmt_opt(day.wind_direction_mean),
            day.observations
        );
    }
    Ok(())
}
