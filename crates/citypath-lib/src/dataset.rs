//! Loading graphs from the comma-separated vertex and edge files.
//!
//! Both files are headerless. Vertex records are `name,x,y` with integer
//! coordinates; edge records are `nameA,nameB,weight` and describe undirected
//! connections. Any record with the wrong field count or an unparseable number
//! aborts the load.

use std::env;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};

/// Default vertex file name inside a dataset directory.
pub const VERTEX_FILE: &str = "cityxy.txt";
/// Default edge file name inside a dataset directory.
pub const EDGE_FILE: &str = "citypairs.txt";
/// Environment variable naming the dataset directory.
pub const DATA_DIR_ENV: &str = "CITYPATH_DATA_DIR";

/// Locations of the files that make up a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub vertices: PathBuf,
    pub edges: PathBuf,
}

impl DatasetPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            vertices: dir.join(VERTEX_FILE),
            edges: dir.join(EDGE_FILE),
        }
    }
}

/// Resolve the dataset directory.
///
/// The resolution order is:
/// 1. Explicit `dir` argument when provided.
/// 2. `CITYPATH_DATA_DIR` environment variable.
/// 3. The current working directory.
pub fn resolve_dataset(dir: Option<&Path>) -> DatasetPaths {
    if let Some(explicit) = dir {
        return DatasetPaths::in_dir(explicit);
    }

    if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        return DatasetPaths::in_dir(Path::new(&env_path));
    }

    DatasetPaths::in_dir(Path::new("."))
}

/// Build a graph from the vertex and edge files.
pub fn load_graph(paths: &DatasetPaths) -> Result<Graph> {
    let mut graph = Graph::new();
    read_vertices(&mut graph, File::open(&paths.vertices)?, &paths.vertices)?;
    read_edges(&mut graph, File::open(&paths.edges)?, &paths.edges)?;

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        path = %paths.vertices.display(),
        "loaded graph"
    );
    Ok(graph)
}

/// Add every `name,x,y` record from `reader` to the graph.
///
/// `origin` is only used to label errors.
pub fn read_vertices<R: Read>(graph: &mut Graph, reader: R, origin: &Path) -> Result<usize> {
    let mut added = 0usize;
    for entry in records(reader).records() {
        let record = entry?;
        let line = line_of(&record);
        expect_fields(&record, origin, line)?;

        let name = &record[0];
        let x = parse_field::<i64>(&record[1], "x coordinate", origin, line)?;
        let y = parse_field::<i64>(&record[2], "y coordinate", origin, line)?;
        graph.add_vertex(Vertex::new(name, x as f64, y as f64))?;
        added += 1;
    }
    Ok(added)
}

/// Add every `nameA,nameB,weight` record from `reader` as an undirected edge.
pub fn read_edges<R: Read>(graph: &mut Graph, reader: R, origin: &Path) -> Result<usize> {
    let mut added = 0usize;
    for entry in records(reader).records() {
        let record = entry?;
        let line = line_of(&record);
        expect_fields(&record, origin, line)?;

        let weight = parse_field::<f64>(&record[2], "weight", origin, line)?;
        graph.add_undirected_edge(&record[0], &record[1], weight)?;
        added += 1;
    }
    Ok(added)
}

fn records<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or_default()
}

fn expect_fields(record: &StringRecord, origin: &Path, line: u64) -> Result<()> {
    if record.len() == 3 {
        return Ok(());
    }
    Err(Error::MalformedRecord {
        path: origin.to_path_buf(),
        line,
        message: format!(
            "expected 3 fields, found {} in '{}'",
            record.len(),
            record.iter().collect::<Vec<_>>().join(",")
        ),
    })
}

fn parse_field<T: std::str::FromStr>(
    value: &str,
    label: &str,
    origin: &Path,
    line: u64,
) -> Result<T> {
    value.parse().map_err(|_| Error::MalformedRecord {
        path: origin.to_path_buf(),
        line,
        message: format!("invalid {label} '{value}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertices(input: &str) -> Result<Graph> {
        let mut graph = Graph::new();
        read_vertices(&mut graph, input.as_bytes(), Path::new("cityxy.txt"))?;
        Ok(graph)
    }

    #[test]
    fn vertices_parse_with_whitespace_and_blank_lines() {
        let graph = vertices("Boston, 10, 20\n\nDenver,5,-3\n").unwrap();
        assert_eq!(graph.vertex_count(), 2);
        let denver = graph.get_vertex("Denver").unwrap();
        assert_eq!((denver.position.x, denver.position.y), (5.0, -3.0));
    }

    #[test]
    fn wrong_field_count_reports_line() {
        let err = vertices("Boston,1,2\nDenver,5\n").expect_err("short record");
        match err {
            Error::MalformedRecord { line, ref message, .. } => {
                assert_eq!(line, 2);
                assert!(message.contains("expected 3 fields, found 2"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn fractional_coordinate_is_rejected() {
        let err = vertices("Boston,1.5,2\n").expect_err("integer coordinates");
        assert!(err.to_string().contains("invalid x coordinate '1.5'"));
    }

    #[test]
    fn duplicate_vertex_in_file_fails() {
        let err = vertices("Boston,1,2\nBoston,3,4\n").expect_err("duplicate");
        assert!(matches!(err, Error::DuplicateVertex { .. }));
    }

    #[test]
    fn edges_are_undirected() {
        let mut graph = vertices("A,0,0\nB,3,4\n").unwrap();
        let added = read_edges(&mut graph, "A,B,5.0\n".as_bytes(), Path::new("pairs")).unwrap();
        assert_eq!(added, 1);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn edge_to_unknown_vertex_fails() {
        let mut graph = vertices("A,0,0\n").unwrap();
        let err = read_edges(&mut graph, "A,Bee,1.0\n".as_bytes(), Path::new("pairs"))
            .expect_err("unknown vertex");
        assert!(matches!(err, Error::UnknownVertex { .. }));
    }

    #[test]
    fn explicit_dir_wins() {
        let paths = resolve_dataset(Some(Path::new("/data/maps")));
        assert_eq!(paths.vertices, Path::new("/data/maps").join(VERTEX_FILE));
        assert_eq!(paths.edges, Path::new("/data/maps").join(EDGE_FILE));
    }
}
