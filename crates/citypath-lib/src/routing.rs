use serde::Serialize;
use tracing::debug;

use crate::engine::{run_dijkstra, Frontier, ShortestPaths};
use crate::error::Result;
use crate::geometry::{apply_weight_mode, WeightMode};
use crate::graph::{Edge, Graph, VertexId};
use crate::path::reconstruct_path;

/// Knobs shared by every shortest-path query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RouteOptions {
    pub weights: WeightMode,
    pub frontier: Frontier,
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub options: RouteOptions,
}

impl RouteRequest {
    /// Request with geometric weights and the linear-scan frontier.
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            options: RouteOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RouteOptions) -> Self {
        self.options = options;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub options: RouteOptions,
    pub start: VertexId,
    pub goal: VertexId,
    /// Total weight of the route; `None` when the goal is unreachable.
    pub distance: Option<f64>,
    pub edges: Vec<Edge>,
}

impl RoutePlan {
    /// Number of edges in the route.
    pub fn hop_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// Compute a route between two named vertices.
///
/// An unreachable goal is not an error; it yields a plan without distance
/// and with no edges.
pub fn plan_route(graph: &mut Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let paths = plan_distances(graph, &request.start, &request.options)?;
    let goal = graph.resolve(&request.goal)?;

    let edges = reconstruct_path(graph, &paths, goal);
    let distance = paths.is_reachable(goal).then(|| paths.distance(goal));

    debug!(
        start = %request.start,
        goal = %request.goal,
        hops = edges.len(),
        reachable = distance.is_some(),
        "planned route"
    );

    Ok(RoutePlan {
        options: request.options,
        start: paths.source(),
        goal,
        distance,
        edges,
    })
}

/// Compute shortest distances from `source` to every vertex.
pub fn plan_distances(
    graph: &mut Graph,
    source: &str,
    options: &RouteOptions,
) -> Result<ShortestPaths> {
    apply_weight_mode(graph, options.weights);
    run_dijkstra(graph, source, options.frontier)
}
