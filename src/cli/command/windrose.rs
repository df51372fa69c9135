use anyhow::Result;
use klimaat::Klimaat;

use super::{fmt_opt, select};
use crate::cli::Selection;

pub fn windrose(client: &Klimaat, selection: &Selection, json: bool) -> Result<()> {
    let sectors = select(client, selection)?.windrose().collect_sectors()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&sectors)?);
        return Ok(());
    }
    if sectors.iter().all(|s| s.observations == 0) {
        println!("No wind observations match the selection");
        return Ok(());
    }

    println!(
        "{:<6} {:>5} {:>7} {:>9} {:>9}",
        "Sector", "Obs", "Share", "Mean kt", "Max kt"
    );
    for sector in &sectors {
        println!(
            "{:<6} {:>5} {:>6.1}% {:>9} {:>9}",
            sector.label,
            sector.observations,
            sector.share * 100.0,
            fmt_opt(sector.mean_speed),
            fmt_opt(sector.max_speed)
        );
    }
    Ok(())
}
