use anyhow::Result;
use klimaat::Klimaat;

use super::{fmt_opt, select};
use crate::cli::Selection;

pub fn summary(client: &Klimaat, selection: &Selection, json: bool) -> Result<()> {
    let frame = select(client, selection)?;
    let Some(summary) = frame.summarize()? else {
        println!("No observations match the selection");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Station(s):        {}", summary.station);
    println!("Observations:      {}", summary.observations);
    println!(
        "Period:            {} .. {}",
        summary.first.format("%Y-%m-%d %H:%M"),
        summary.last.format("%Y-%m-%d %H:%M")
    );
    println!(
        "Temperature:       {} \u{b0}C",
        fmt_opt(summary.temperature_mean)
    );
    println!("Humidity:          {} %", fmt_opt(summary.humidity_mean));
    println!("Wind speed:        {} kt", fmt_opt(summary.wind_speed_mean));
    println!("Pressure:          {} hPa", fmt_opt(summary.pressure_mean));
    println!(
        "Cloud coverage:    {} oktas",
        fmt_opt(summary.cloud_cover_mean)
    );
    println!("Rainfall total:    {} mm", fmt_opt(summary.rainfall_total));
    Ok(())
}
