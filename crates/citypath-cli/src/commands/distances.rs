use anyhow::{Context, Result};

use citypath_lib::{plan_distances, DistanceTable, RouteOptions};

use crate::commands::{load_dataset, DatasetArgs};
use crate::OutputFormat;

/// Handle the distances subcommand.
pub fn handle_distances(
    dataset: &DatasetArgs,
    options: &RouteOptions,
    format: OutputFormat,
    from: &str,
) -> Result<()> {
    let mut graph = load_dataset(dataset)?;
    let paths = plan_distances(&mut graph, from, options)
        .with_context(|| format!("failed to compute distances from {from}"))?;

    let table = DistanceTable::from_paths(&graph, &paths);
    match format {
        OutputFormat::Text | OutputFormat::Rich => print!("{}", table.render_plain()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table)?),
    }
    Ok(())
}
