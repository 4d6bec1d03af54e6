use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::graph::Graph;

/// Cartesian coordinates for a location on the map.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the Euclidean distance to another point.
    pub fn distance_to(&self, other: &Self) -> f64 {
        euclidean_distance(*self, *other)
    }
}

/// Straight-line distance between two points in the plane.
pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Source of edge weights used by a shortest-path run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightMode {
    /// Set every edge weight to the distance between its endpoints before
    /// the run.
    #[default]
    Geometry,
    /// Use the weights supplied when the edges were created, even after an
    /// earlier geometry run.
    Supplied,
}

impl fmt::Display for WeightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            WeightMode::Geometry => "geometry",
            WeightMode::Supplied => "supplied",
        };
        f.write_str(value)
    }
}

/// Replace the weight of every edge with the Euclidean distance between the
/// coordinates of its source and target vertices.
///
/// The supplied weight of each edge is left untouched.
pub fn compute_all_edge_weights(graph: &mut Graph) {
    let positions: Vec<Point> = graph.vertices().iter().map(|v| v.position).collect();
    let mut updated = 0usize;
    for edge in graph.edges_mut() {
        edge.weight = euclidean_distance(
            positions[edge.source.index()],
            positions[edge.target.index()],
        );
        updated += 1;
    }
    debug!(edges = updated, "derived edge weights from coordinates");
}

/// Reset every edge weight to the weight it was created with.
pub fn restore_supplied_weights(graph: &mut Graph) {
    let mut updated = 0usize;
    for edge in graph.edges_mut() {
        edge.weight = edge.supplied_weight;
        updated += 1;
    }
    debug!(edges = updated, "restored supplied edge weights");
}

/// Apply the requested weight mode to the graph.
pub fn apply_weight_mode(graph: &mut Graph, mode: WeightMode) {
    match mode {
        WeightMode::Geometry => compute_all_edge_weights(graph),
        WeightMode::Supplied => restore_supplied_weights(graph),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Vertex;

    #[test]
    fn three_four_five_triangle() {
        let d = euclidean_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let a = Point::new(-2.5, 7.0);
        let b = Point::new(4.0, -1.0);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn geometry_mode_overwrites_supplied_weights() {
        let mut graph = Graph::new();
        graph.add_vertex(Vertex::new("A", 0.0, 0.0)).unwrap();
        graph.add_vertex(Vertex::new("B", 3.0, 0.0)).unwrap();
        graph.add_undirected_edge("A", "B", 99.0).unwrap();

        apply_weight_mode(&mut graph, WeightMode::Supplied);
        assert!(graph.edges().all(|edge| edge.weight == 99.0));

        apply_weight_mode(&mut graph, WeightMode::Geometry);
        assert!(graph.edges().all(|edge| (edge.weight - 3.0).abs() < 1e-12));
        assert!(graph.edges().all(|edge| edge.supplied_weight == 99.0));
    }

    #[test]
    fn supplied_mode_restores_weights_after_geometry() {
        let mut graph = Graph::new();
        graph.add_vertex(Vertex::new("A", 0.0, 0.0)).unwrap();
        graph.add_vertex(Vertex::new("B", 0.0, 4.0)).unwrap();
        graph.add_directed_edge("A", "B", 1.5).unwrap();

        apply_weight_mode(&mut graph, WeightMode::Geometry);
        apply_weight_mode(&mut graph, WeightMode::Supplied);
        assert!(graph.edges().all(|edge| edge.weight == 1.5));

        apply_weight_mode(&mut graph, WeightMode::Geometry);
        assert!(graph.edges().all(|edge| edge.weight == 4.0));
    }
}
