//! citypath library entry points.
//!
//! This crate stores a graph of named locations, derives edge weights from
//! their planar coordinates, runs Dijkstra's algorithm from a source and
//! reconstructs the edges of the shortest path to any target. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.

#![deny(warnings)]

pub mod dataset;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;

pub use dataset::{load_graph, read_edges, read_vertices, resolve_dataset, DatasetPaths};
pub use engine::{run_dijkstra, run_from, Frontier, ParentLink, ShortestPaths};
pub use error::{Error, Result};
pub use geometry::{
    apply_weight_mode, compute_all_edge_weights, euclidean_distance, restore_supplied_weights,
    Point, WeightMode,
};
pub use graph::{Edge, Graph, Vertex, VertexId};
pub use output::{
    adjacency_entries, AdjacencyEntry, AdjacentEdge, DistanceEntry, DistanceTable, RouteEndpoint,
    RouteRenderMode, RouteStep, RouteSummary,
};
pub use path::{path_weight, reconstruct_path, shortest_path};
pub use routing::{plan_distances, plan_route, RouteOptions, RoutePlan, RouteRequest};
