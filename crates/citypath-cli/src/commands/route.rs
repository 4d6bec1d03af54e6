//! Route command handler for computing the shortest path between two locations.

use anyhow::{Context, Result};

use citypath_lib::{plan_route, RouteOptions, RouteRenderMode, RouteRequest, RouteSummary};

use crate::commands::{load_dataset, DatasetArgs};
use crate::OutputFormat;

/// Handle the route subcommand.
pub fn handle_route(
    dataset: &DatasetArgs,
    options: &RouteOptions,
    format: OutputFormat,
    from: &str,
    to: &str,
) -> Result<()> {
    let mut graph = load_dataset(dataset)?;
    let request = RouteRequest::new(from, to).with_options(*options);
    let plan = plan_route(&mut graph, &request)
        .with_context(|| format!("failed to plan route from {from} to {to}"))?;

    let summary = RouteSummary::from_plan(&graph, &plan);
    match format {
        OutputFormat::Text => print!("{}", summary.render(RouteRenderMode::PlainText)),
        OutputFormat::Rich => print!("{}", summary.render(RouteRenderMode::RichText)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}
