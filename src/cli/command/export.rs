use std::path::Path;

use anyhow::Result;
use klimaat::{write_csv, Klimaat};

use super::select;
use crate::cli::Selection;

pub fn export(client: &Klimaat, selection: &Selection, output: &Path) -> Result<()> {
    let frame = select(client, selection)?;
    write_csv(output, &frame.frame)?;
    println!("Selection written to `{}`", output.display());
    Ok(())
}
