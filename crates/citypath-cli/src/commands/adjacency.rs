//! Diagnostic listing of the loaded graph.

use anyhow::Result;

use citypath_lib::{adjacency_entries, apply_weight_mode, RouteOptions};

use crate::commands::{load_dataset, DatasetArgs};
use crate::OutputFormat;

/// Handle the adjacency subcommand.
///
/// Weights are shown after the weight mode is applied, so with the default
/// mode the listing shows the coordinate-derived distances.
pub fn handle_adjacency(
    dataset: &DatasetArgs,
    options: &RouteOptions,
    format: OutputFormat,
) -> Result<()> {
    let mut graph = load_dataset(dataset)?;
    apply_weight_mode(&mut graph, options.weights);

    match format {
        OutputFormat::Text | OutputFormat::Rich => print!("{}", graph.adjacency_listing()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&adjacency_entries(&graph))?
        ),
    }
    Ok(())
}
