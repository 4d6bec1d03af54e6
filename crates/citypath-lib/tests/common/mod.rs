//! Shared fixtures for integration tests.

use std::path::PathBuf;

use citypath_lib::{Graph, Vertex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Path to the fixtures directory holding `cityxy.txt` and `citypairs.txt`.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// A(0,0), B(3,0), C(3,4) joined by A-B and B-C, plus an isolated D.
#[allow(dead_code)]
pub fn corner_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_vertex(Vertex::new("A", 0.0, 0.0)).expect("add A");
    graph.add_vertex(Vertex::new("B", 3.0, 0.0)).expect("add B");
    graph.add_vertex(Vertex::new("C", 3.0, 4.0)).expect("add C");
    graph.add_vertex(Vertex::new("D", 20.0, 20.0)).expect("add D");
    graph.add_undirected_edge("A", "B", 1.0).expect("edge A-B");
    graph.add_undirected_edge("B", "C", 1.0).expect("edge B-C");
    graph
}

/// Random directed graph with integer coordinates and integer supplied weights.
///
/// The same `seed` always yields the same graph.
#[allow(dead_code)]
pub fn random_graph(seed: u64, vertices: usize, edges: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new();
    for index in 0..vertices {
        let x = f64::from(rng.gen_range(0..50u32));
        let y = f64::from(rng.gen_range(0..50u32));
        graph
            .add_vertex(Vertex::new(format!("V{index}"), x, y))
            .expect("unique names");
    }
    for _ in 0..edges {
        let from = rng.gen_range(0..vertices);
        let to = rng.gen_range(0..vertices);
        let weight = f64::from(rng.gen_range(0..10u32));
        graph
            .add_directed_edge(&format!("V{from}"), &format!("V{to}"), weight)
            .expect("known endpoints");
    }
    graph
}
