// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs only parses arguments and dispatches.

pub mod adjacency;
pub mod distances;
pub mod route;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use citypath_lib::{load_graph, resolve_dataset, DatasetPaths, Graph};

/// Dataset location flags shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct DatasetArgs {
    pub data_dir: Option<PathBuf>,
    pub vertices: Option<PathBuf>,
    pub edges: Option<PathBuf>,
}

impl DatasetArgs {
    /// Resolve the dataset directory, then apply per-file overrides.
    pub fn paths(&self) -> DatasetPaths {
        let mut paths = resolve_dataset(self.data_dir.as_deref());
        if let Some(vertices) = &self.vertices {
            paths.vertices = vertices.clone();
        }
        if let Some(edges) = &self.edges {
            paths.edges = edges.clone();
        }
        paths
    }
}

/// Load the graph described by the dataset flags.
pub fn load_dataset(args: &DatasetArgs) -> Result<Graph> {
    let paths = args.paths();
    let graph = load_graph(&paths).with_context(|| {
        format!(
            "failed to load graph from {} and {}",
            paths.vertices.display(),
            paths.edges.display()
        )
    })?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}
