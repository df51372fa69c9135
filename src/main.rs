mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{command, create_spinner, Cli, Commands};
use klimaat::Klimaat;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let bar = create_spinner(format!("Loading {}...", cli.data.display()));
    let client = Klimaat::load()
        .path(cli.data.clone())
        .maybe_base_month(cli.base_month)
        .call()?;
    bar.finish_with_message(format!(
        "Loaded {} station(s) from {}",
        client.stations().len(),
        cli.data.display()
    ));

    match &cli.command {
        Commands::Stations { json } => command::stations(&client, *json),
        Commands::Summary { selection, json } => command::summary(&client, selection, *json),
        Commands::Daily { selection, json } => command::daily(&client, selection, *json),
        Commands::Monthly { selection, json } => command::monthly(&client, selection, *json),
        Commands::Windrose { selection, json } => command::windrose(&client, selection, *json),
        Commands::Export { selection, output } => command::export(&client, selection, output),
        Commands::Report {
            selection,
            output,
            title,
        } => command::report(&client, selection, output, title.as_deref()),
    }
}
