use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{self, Write};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Identifier of a vertex within a [`Graph`]; the vertex's insertion index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Position of the vertex in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Named location with planar coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vertex {
    pub name: String,
    pub position: Point,
}

impl Vertex {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            position: Point::new(x, y),
        }
    }
}

/// Directed, weighted edge owned by its source vertex's adjacency list.
///
/// `weight` is the value shortest-path runs read. `supplied_weight` is the
/// weight given when the edge was created and is never overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    pub weight: f64,
    pub supplied_weight: f64,
}

/// Graph store holding every vertex and its outgoing edges.
///
/// Vertices keep their insertion order, which makes iteration (and therefore
/// tie-breaking during shortest-path runs) deterministic. The topology only
/// grows; vertices and edges are never removed.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    adjacency: Vec<Vec<Edge>>,
    name_to_id: HashMap<String, VertexId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex, rejecting names that are already present and
    /// coordinates that are not finite.
    pub fn add_vertex(&mut self, vertex: Vertex) -> Result<VertexId> {
        if self.name_to_id.contains_key(&vertex.name) {
            return Err(Error::DuplicateVertex { name: vertex.name });
        }
        let Point { x, y } = vertex.position;
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::InvalidCoordinate {
                name: vertex.name,
                x,
                y,
            });
        }
        let id = VertexId(self.vertices.len());
        self.name_to_id.insert(vertex.name.clone(), id);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Lookup a vertex by its case-sensitive name.
    pub fn get_vertex(&self, name: &str) -> Result<&Vertex> {
        let id = self.resolve(name)?;
        Ok(&self.vertices[id.0])
    }

    /// Lookup a vertex identifier by name.
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.name_to_id.get(name).copied()
    }

    /// Resolve a name to its identifier, attaching suggestions on failure.
    pub fn resolve(&self, name: &str) -> Result<VertexId> {
        self.vertex_id(name).ok_or_else(|| Error::UnknownVertex {
            name: name.to_string(),
            suggestions: self.fuzzy_vertex_matches(name, 3),
        })
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }

    pub fn vertex_name(&self, id: VertexId) -> &str {
        &self.vertices[id.0].name
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Outgoing edges of `id`, in insertion order.
    pub fn edges_from(&self, id: VertexId) -> &[Edge] {
        self.adjacency
            .get(id.0)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every edge in the graph, grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency.iter().flatten()
    }

    pub(crate) fn edges_mut(&mut self) -> impl Iterator<Item = &mut Edge> {
        self.adjacency.iter_mut().flatten()
    }

    /// Add a directed edge from `source` to `target`.
    pub fn add_directed_edge(&mut self, source: &str, target: &str, weight: f64) -> Result<()> {
        let from = self.resolve(source)?;
        let to = self.resolve(target)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::NegativeWeight {
                from: source.to_string(),
                to: target.to_string(),
                weight,
            });
        }
        self.adjacency[from.0].push(Edge {
            source: from,
            target: to,
            weight,
            supplied_weight: weight,
        });
        Ok(())
    }

    /// Add a pair of directed edges with identical weight.
    ///
    /// Not atomic: when the reverse insertion fails the forward edge remains.
    /// Both directions validate the same names and weight, so in practice the
    /// first insertion is the one that fails.
    pub fn add_undirected_edge(&mut self, a: &str, b: &str, weight: f64) -> Result<()> {
        self.add_directed_edge(a, b, weight)?;
        self.add_directed_edge(b, a, weight)
    }

    /// Names similar to `name`, best match first.
    pub fn fuzzy_vertex_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .vertices
            .iter()
            .map(|vertex| {
                (
                    strsim::jaro_winkler(name, &vertex.name),
                    vertex.name.as_str(),
                )
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Text listing of every vertex and its outgoing edges, for diagnostics.
    pub fn adjacency_listing(&self) -> String {
        let mut buffer = String::new();
        for (index, vertex) in self.vertices.iter().enumerate() {
            let _ = write!(buffer, "{} -> [ ", vertex.name);
            for edge in &self.adjacency[index] {
                let _ = write!(
                    buffer,
                    "{}({:?}) ",
                    self.vertex_name(edge.target),
                    edge.weight
                );
            }
            let _ = writeln!(buffer, "]");
        }
        buffer
    }
}
