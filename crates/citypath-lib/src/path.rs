use crate::engine::{run_dijkstra, ShortestPaths};
use crate::error::Result;
use crate::geometry::apply_weight_mode;
use crate::graph::{Edge, Graph, VertexId};
use crate::routing::RouteOptions;

/// Walk the shortest-path tree back from `target` and return the edges from
/// the run's source to `target`, in travel order.
///
/// Each step uses the edge that was relaxed when the vertex received its
/// final distance; among parallel edges that is the first one in insertion
/// order carrying the minimal weight. The result is empty when `target` is the
/// source or is unreachable.
pub fn reconstruct_path(graph: &Graph, paths: &ShortestPaths, target: VertexId) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut current = target;
    while let Some(link) = paths.parent_link(current) {
        let Some(edge) = graph.edges_from(link.vertex).get(link.edge_index) else {
            break;
        };
        edges.push(*edge);
        current = link.vertex;
    }
    edges.reverse();
    edges
}

/// Compute the shortest path between two named vertices.
///
/// Applies the configured weight mode to the graph, runs the engine from
/// `source` and reconstructs the edges leading to `target`.
pub fn shortest_path(
    graph: &mut Graph,
    source: &str,
    target: &str,
    options: &RouteOptions,
) -> Result<Vec<Edge>> {
    apply_weight_mode(graph, options.weights);
    let paths = run_dijkstra(graph, source, options.frontier)?;
    let target_id = graph.resolve(target)?;
    Ok(reconstruct_path(graph, &paths, target_id))
}

/// Sum of the weights along a path.
pub fn path_weight(edges: &[Edge]) -> f64 {
    edges.iter().map(|edge| edge.weight).sum()
}
