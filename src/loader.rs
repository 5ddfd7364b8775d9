//! Bulk loading from JSON record arrays
//!
//! Seeds a graph from two JSON files: an array of vertex records and an
//! array of edge records, in the same shapes used by the database file.

use crate::graph::{Edge, EdgeId, Graph, GraphError, Vertex, VertexId};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Bulk load errors (per-record store errors are reported, not raised)
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON records: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Outcome of a bulk load
#[derive(Debug, Default)]
pub struct LoadReport {
    pub vertex_ids: Vec<VertexId>,
    pub edge_ids: Vec<EdgeId>,
    pub errors: Vec<GraphError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Decode a JSON array of vertex records
pub fn read_vertices<R: Read>(reader: R) -> LoadResult<Vec<Vertex>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Decode a JSON array of edge records
pub fn read_edges<R: Read>(reader: R) -> LoadResult<Vec<Edge>> {
    Ok(serde_json::from_reader(reader)?)
}

fn open(path: &Path) -> LoadResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Add pre-decoded records: all vertices first, then all edges
pub fn load_records(graph: &mut Graph, vertices: Vec<Vertex>, edges: Vec<Edge>) -> LoadReport {
    let (vertex_ids, mut errors) = graph.add_vertices(vertices);
    let (edge_ids, edge_errors) = graph.add_edges(edges);
    errors.extend(edge_errors);

    for e in &errors {
        warn!("Load error: {}", e);
    }

    LoadReport {
        vertex_ids,
        edge_ids,
        errors,
    }
}

/// Read both files and add their records to `graph`
///
/// Both files are decoded before anything is added, so a malformed file
/// leaves the graph untouched.
pub fn load_files(
    graph: &mut Graph,
    vertices_path: impl AsRef<Path>,
    edges_path: impl AsRef<Path>,
) -> LoadResult<LoadReport> {
    let vertices = read_vertices(open(vertices_path.as_ref())?)?;
    let edges = read_edges(open(edges_path.as_ref())?)?;

    let report = load_records(graph, vertices, edges);
    info!(
        "Loaded {} vertices and {} edges into {} ({} errors)",
        report.vertex_ids.len(),
        report.edge_ids.len(),
        graph.name(),
        report.errors.len()
    );
    Ok(report)
}
