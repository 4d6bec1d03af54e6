use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};

/// Strategy used to pick the next vertex to finalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Frontier {
    /// Scan every unvisited vertex for the minimum distance (O(V²) overall).
    #[default]
    LinearScan,
    /// Binary min-heap with lazy deletion of stale entries.
    BinaryHeap,
}

impl fmt::Display for Frontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Frontier::LinearScan => "linear_scan",
            Frontier::BinaryHeap => "binary_heap",
        };
        f.write_str(value)
    }
}

/// Back-reference to the predecessor on the shortest-path tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentLink {
    /// Vertex the edge leaves from.
    pub vertex: VertexId,
    /// Index of the relaxed edge within `vertex`'s outgoing edges.
    pub edge_index: usize,
}

/// Result of a single-source run: distances and the shortest-path tree.
///
/// The state lives here rather than on the vertices, so a graph can be
/// queried from several sources without resetting anything in between.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: VertexId,
    frontier: Frontier,
    distances: Vec<f64>,
    parents: Vec<Option<ParentLink>>,
}

impl ShortestPaths {
    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn frontier(&self) -> Frontier {
        self.frontier
    }

    /// Shortest distance from the source, `f64::INFINITY` when unreachable.
    pub fn distance(&self, vertex: VertexId) -> f64 {
        self.distances
            .get(vertex.index())
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_finite()
    }

    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.parent_link(vertex).map(|link| link.vertex)
    }

    pub fn parent_link(&self, vertex: VertexId) -> Option<ParentLink> {
        self.parents.get(vertex.index()).copied().flatten()
    }

    /// Distances indexed by vertex insertion order.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Number of vertices with a finite distance, the source included.
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }
}

/// Run Dijkstra's algorithm from the vertex named `source`.
///
/// Edge weights are used as stored on the graph; callers that want weights
/// derived from coordinates apply [`crate::geometry::apply_weight_mode`]
/// first.
pub fn run_dijkstra(graph: &Graph, source: &str, frontier: Frontier) -> Result<ShortestPaths> {
    let source_id = graph
        .vertex_id(source)
        .ok_or_else(|| Error::UnknownSource {
            name: source.to_string(),
            suggestions: graph.fuzzy_vertex_matches(source, 3),
        })?;
    Ok(run_from(graph, source_id, frontier))
}

/// Run Dijkstra's algorithm from an already resolved source vertex.
pub fn run_from(graph: &Graph, source: VertexId, frontier: Frontier) -> ShortestPaths {
    let mut state = RunState::new(graph.vertex_count());
    state.distances[source.index()] = 0.0;

    let finalized = match frontier {
        Frontier::LinearScan => state.scan(graph),
        Frontier::BinaryHeap => state.heap(graph, source),
    };

    let paths = ShortestPaths {
        source,
        frontier,
        distances: state.distances,
        parents: state.parents,
    };

    debug!(
        source = graph.vertex_name(source),
        %frontier,
        finalized,
        reachable = paths.reachable_count(),
        vertices = graph.vertex_count(),
        "shortest-path run complete"
    );

    paths
}

struct RunState {
    distances: Vec<f64>,
    parents: Vec<Option<ParentLink>>,
    visited: Vec<bool>,
}

impl RunState {
    fn new(vertices: usize) -> Self {
        Self {
            distances: vec![f64::INFINITY; vertices],
            parents: vec![None; vertices],
            visited: vec![false; vertices],
        }
    }

    fn scan(&mut self, graph: &Graph) -> usize {
        let mut finalized = 0usize;
        while let Some(current) = self.select_min() {
            self.visited[current] = true;
            finalized += 1;
            self.relax(graph, current, |_, _| {});
        }
        finalized
    }

    fn heap(&mut self, graph: &Graph, source: VertexId) -> usize {
        let mut finalized = 0usize;
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry::new(source.index(), 0.0));

        while let Some(entry) = queue.pop() {
            if self.visited[entry.node] {
                continue;
            }
            self.visited[entry.node] = true;
            finalized += 1;
            self.relax(graph, entry.node, |node, cost| {
                queue.push(QueueEntry::new(node, cost))
            });
        }
        finalized
    }

    /// Unvisited vertex with the smallest finite distance; ties go to the
    /// lowest index.
    fn select_min(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (index, &distance) in self.distances.iter().enumerate() {
            if self.visited[index] || !distance.is_finite() {
                continue;
            }
            match best {
                Some(current) if self.distances[current] <= distance => {}
                _ => best = Some(index),
            }
        }
        best
    }

    fn relax(&mut self, graph: &Graph, current: usize, mut on_update: impl FnMut(usize, f64)) {
        let base = self.distances[current];
        let from = VertexId::from_index(current);
        for (edge_index, edge) in graph.edges_from(from).iter().enumerate() {
            let next = edge.target.index();
            if self.visited[next] {
                continue;
            }
            let candidate = base + edge.weight;
            if candidate < self.distances[next] {
                self.distances[next] = candidate;
                self.parents[next] = Some(ParentLink {
                    vertex: from,
                    edge_index,
                });
                on_update(next, candidate);
            }
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct QueueEntry {
    node: usize,
    cost: f64,
}

impl QueueEntry {
    fn new(node: usize, cost: f64) -> Self {
        Self { node, cost }
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then index.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Vertex;

    fn line_graph() -> Graph {
        let mut graph = Graph::new();
        for (name, x) in [("A", 0.0), ("B", 1.0), ("C", 2.0), ("D", 3.0)] {
            graph.add_vertex(Vertex::new(name, x, 0.0)).unwrap();
        }
        graph.add_directed_edge("A", "B", 1.0).unwrap();
        graph.add_directed_edge("B", "C", 2.0).unwrap();
        graph.add_directed_edge("C", "D", 1.0).unwrap();
        graph.add_directed_edge("A", "D", 5.0).unwrap();
        graph
    }

    #[test]
    fn linear_scan_finds_cheaper_indirect_route() {
        let graph = line_graph();
        let paths = run_dijkstra(&graph, "A", Frontier::LinearScan).unwrap();
        let d = graph.vertex_id("D").unwrap();
        assert_eq!(paths.distance(d), 4.0);
        assert_eq!(paths.parent(d), graph.vertex_id("C"));
    }

    #[test]
    fn source_has_zero_distance_and_no_parent() {
        let graph = line_graph();
        let paths = run_dijkstra(&graph, "B", Frontier::LinearScan).unwrap();
        let b = graph.vertex_id("B").unwrap();
        assert_eq!(paths.source(), b);
        assert_eq!(paths.distance(b), 0.0);
        assert!(paths.parent_link(b).is_none());
    }

    #[test]
    fn directed_edges_leave_upstream_unreachable() {
        let graph = line_graph();
        let paths = run_dijkstra(&graph, "C", Frontier::BinaryHeap).unwrap();
        let a = graph.vertex_id("A").unwrap();
        assert!(!paths.is_reachable(a));
        assert!(paths.distance(a).is_infinite());
        assert!(paths.parent(a).is_none());
        assert_eq!(paths.reachable_count(), 2);
    }

    #[test]
    fn unknown_source_is_reported() {
        let graph = line_graph();
        let err = run_dijkstra(&graph, "Z", Frontier::LinearScan).expect_err("missing source");
        assert!(matches!(err, Error::UnknownSource { ref name, .. } if name == "Z"));
    }

    #[test]
    fn equal_distance_ties_pick_lowest_index() {
        let mut graph = Graph::new();
        for name in ["S", "L", "R", "T"] {
            graph.add_vertex(Vertex::new(name, 0.0, 0.0)).unwrap();
        }
        graph.add_directed_edge("S", "R", 1.0).unwrap();
        graph.add_directed_edge("S", "L", 1.0).unwrap();
        graph.add_directed_edge("L", "T", 1.0).unwrap();
        graph.add_directed_edge("R", "T", 1.0).unwrap();

        let t = graph.vertex_id("T").unwrap();
        for frontier in [Frontier::LinearScan, Frontier::BinaryHeap] {
            let paths = run_dijkstra(&graph, "S", frontier).unwrap();
            assert_eq!(paths.distance(t), 2.0);
            assert_eq!(paths.parent(t), graph.vertex_id("L"), "{frontier}");
        }
    }

    #[test]
    fn parallel_edges_record_first_minimal_edge() {
        let mut graph = Graph::new();
        graph.add_vertex(Vertex::new("A", 0.0, 0.0)).unwrap();
        graph.add_vertex(Vertex::new("B", 1.0, 0.0)).unwrap();
        graph.add_directed_edge("A", "B", 3.0).unwrap();
        graph.add_directed_edge("A", "B", 2.0).unwrap();
        graph.add_directed_edge("A", "B", 2.0).unwrap();

        let paths = run_dijkstra(&graph, "A", Frontier::LinearScan).unwrap();
        let link = paths.parent_link(graph.vertex_id("B").unwrap()).unwrap();
        assert_eq!(link.edge_index, 1);
    }
}
