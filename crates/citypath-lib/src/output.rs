use std::fmt::Write;

use serde::Serialize;

use crate::engine::ShortestPaths;
use crate::graph::{Graph, VertexId};
use crate::routing::{RouteOptions, RoutePlan};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub id: VertexId,
    pub name: String,
}

/// Single edge traversed along a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub from: String,
    pub to: String,
    pub weight: f64,
    /// Distance travelled once this step is complete.
    pub cumulative: f64,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    #[serde(flatten)]
    pub options: RouteOptions,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub reachable: bool,
    pub distance: Option<f64>,
    pub hops: usize,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved vertex names.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan) -> Self {
        let mut cumulative = 0.0;
        let steps = plan
            .edges
            .iter()
            .enumerate()
            .map(|(index, edge)| {
                cumulative += edge.weight;
                RouteStep {
                    index: index + 1,
                    from: graph.vertex_name(edge.source).to_string(),
                    to: graph.vertex_name(edge.target).to_string(),
                    weight: edge.weight,
                    cumulative,
                }
            })
            .collect::<Vec<_>>();

        Self {
            options: plan.options,
            start: endpoint(graph, plan.start),
            goal: endpoint(graph, plan.goal),
            reachable: plan.is_reachable(),
            distance: plan.distance,
            hops: plan.hop_count(),
            steps,
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let Some(distance) = self.distance else {
            let _ = writeln!(
                buffer,
                "Route: {} -> {} (unreachable, weights: {})",
                self.start.name, self.goal.name, self.options.weights
            );
            return buffer;
        };

        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, distance {:.3}, weights: {}, frontier: {})",
            self.start.name,
            self.goal.name,
            self.hops,
            distance,
            self.options.weights,
            self.options.frontier
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "{:>3}: {} -> {} ({:.3}, total {:.3})",
                step.index, step.from, step.to, step.weight, step.cumulative
            );
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let Some(distance) = self.distance else {
            let _ = writeln!(
                buffer,
                "**Route** _{} → {}_: unreachable",
                self.start.name, self.goal.name
            );
            return buffer;
        };

        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} hops, distance `{:.3}`)",
            self.start.name, self.goal.name, self.hops, distance
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** → **{}** (`{:.3}`)",
                step.index, step.from, step.to, step.weight
            );
        }
        buffer
    }
}

/// Distance from the source to one vertex.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DistanceEntry {
    pub name: String,
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// Every vertex's distance from one source, in vertex insertion order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DistanceTable {
    pub source: String,
    pub reachable: usize,
    pub entries: Vec<DistanceEntry>,
}

impl DistanceTable {
    pub fn from_paths(graph: &Graph, paths: &ShortestPaths) -> Self {
        let entries = graph
            .vertex_ids()
            .map(|id| DistanceEntry {
                name: graph.vertex_name(id).to_string(),
                distance: paths.is_reachable(id).then(|| paths.distance(id)),
                parent: paths
                    .parent(id)
                    .map(|parent| graph.vertex_name(parent).to_string()),
            })
            .collect();

        Self {
            source: graph.vertex_name(paths.source()).to_string(),
            reachable: paths.reachable_count(),
            entries,
        }
    }

    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Distances from {} ({} of {} reachable):",
            self.source,
            self.reachable,
            self.entries.len()
        );
        for entry in &self.entries {
            match (entry.distance, &entry.parent) {
                (Some(distance), Some(parent)) => {
                    let _ = writeln!(buffer, "  {}: {:.3} via {}", entry.name, distance, parent);
                }
                (Some(distance), None) => {
                    let _ = writeln!(buffer, "  {}: {:.3}", entry.name, distance);
                }
                (None, _) => {
                    let _ = writeln!(buffer, "  {}: unreachable", entry.name);
                }
            }
        }
        buffer
    }
}

/// Outgoing edge in an [`AdjacencyEntry`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AdjacentEdge {
    pub target: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AdjacencyEntry {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub edges: Vec<AdjacentEdge>,
}

/// Serialisable counterpart of [`Graph::adjacency_listing`].
pub fn adjacency_entries(graph: &Graph) -> Vec<AdjacencyEntry> {
    graph
        .vertex_ids()
        .map(|id| {
            let vertex = graph.vertex(id);
            AdjacencyEntry {
                name: vertex.name.clone(),
                x: vertex.position.x,
                y: vertex.position.y,
                edges: graph
                    .edges_from(id)
                    .iter()
                    .map(|edge| AdjacentEdge {
                        target: graph.vertex_name(edge.target).to_string(),
                        weight: edge.weight,
                    })
                    .collect(),
            }
        })
        .collect()
}

fn endpoint(graph: &Graph, id: VertexId) -> RouteEndpoint {
    RouteEndpoint {
        id,
        name: graph.vertex_name(id).to_string(),
    }
}
