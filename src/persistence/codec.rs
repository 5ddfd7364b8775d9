//! Database file codec
//!
//! One file per graph, holding a single JSON object:
//!
//! ```json
//! { "DBName": "starks.db", "GVertices": [ ... ], "GEdges": [ ... ] }
//! ```
//!
//! Adjacency lists, indices and id counters are not written. Loading
//! replays every record through the store, which rebuilds adjacency and
//! re-validates edge endpoints.

use crate::graph::{Edge, Graph, Vertex};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use tracing::warn;

/// Borrowed view of a graph, used for writing
#[derive(Debug, Serialize)]
struct DatabaseRecordRef<'a> {
    #[serde(rename = "DBName")]
    db_name: &'a str,
    #[serde(rename = "GVertices")]
    vertices: Vec<&'a Vertex>,
    #[serde(rename = "GEdges")]
    edges: Vec<&'a Edge>,
}

impl<'a> DatabaseRecordRef<'a> {
    fn new(graph: &'a Graph) -> Self {
        Self {
            db_name: graph.name(),
            vertices: graph.vertices().collect(),
            edges: graph.edges().collect(),
        }
    }
}

/// Decoded database file
///
/// `null` or missing collections decode as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseRecord {
    #[serde(rename = "DBName", default)]
    pub db_name: String,
    #[serde(rename = "GVertices", default)]
    vertices: Option<Vec<Vertex>>,
    #[serde(rename = "GEdges", default)]
    edges: Option<Vec<Edge>>,
}

impl DatabaseRecord {
    pub fn vertices(&self) -> &[Vertex] {
        self.vertices.as_deref().unwrap_or_default()
    }

    pub fn edges(&self) -> &[Edge] {
        self.edges.as_deref().unwrap_or_default()
    }

    /// Replay the record into `graph` through `add_vertices` / `add_edges`
    ///
    /// The record's name replaces the graph's when present. Records the store
    /// rejects are logged and skipped; the number skipped is returned.
    pub fn replay_into(self, graph: &mut Graph) -> usize {
        if !self.db_name.is_empty() {
            graph.set_name(&self.db_name);
        }

        let (_, vertex_errors) = graph.add_vertices(self.vertices.unwrap_or_default());
        let (_, edge_errors) = graph.add_edges(self.edges.unwrap_or_default());

        let skipped = vertex_errors.len() + edge_errors.len();
        if skipped > 0 {
            warn!("Skipped {} invalid records while restoring {}", skipped, graph.name());
        }
        skipped
    }
}

/// Write `graph` as a single-line JSON record followed by a newline
pub fn encode<W: Write>(graph: &Graph, mut writer: W) -> serde_json::Result<()> {
    serde_json::to_writer(&mut writer, &DatabaseRecordRef::new(graph))?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    Ok(())
}

/// Read one database record
pub fn decode<R: Read>(reader: R) -> serde_json::Result<DatabaseRecord> {
    serde_json::from_reader(reader)
}

/// Whole graph as pretty-printed JSON in the file layout
pub fn to_json_pretty(graph: &Graph) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&DatabaseRecordRef::new(graph))
}
