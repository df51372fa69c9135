use std::path::Path;

use anyhow::Result;
use klimaat::{Klimaat, Report};

use super::select;
use crate::cli::{create_spinner, Selection};

pub fn report(
    client: &Klimaat,
    selection: &Selection,
    output: &Path,
    title: Option<&str>,
) -> Result<()> {
    let frame = select(client, selection)?;

    let bar = create_spinner("Rendering report...".to_string());
    let artifacts = Report::generate()
        .observations(&frame)
        .output_dir(output.to_path_buf())
        .maybe_title(title.map(|t| t.to_string()))
        .call()?;
    bar.finish_with_message("Report rendered");

    println!("Report written to `{}`", artifacts.markdown.display());
    println!("Data exported to `{}`", artifacts.csv.display());
    for chart in &artifacts.charts {
        println!("Chart written to `{}`", chart.display());
    }
    Ok(())
}
