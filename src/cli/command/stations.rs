use anyhow::Result;
use klimaat::Klimaat;

pub fn stations(client: &Klimaat, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(client.stations())?);
        return Ok(());
    }

    println!(
        "{:<12} {:>12}  {:<19}  {:<19}",
        "Station", "Observations", "First", "Last"
    );
    for station in client.stations() {
        println!(
            "{:<12} {:>12}  {}  {}",
            station.id,
            station.observations,
            station.first.format("%Y-%m-%d %H:%M:%S"),
            station.last.format("%Y-%m-%d %H:%M:%S")
        );
    }
    Ok(())
}
