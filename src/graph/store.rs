//! In-memory graph storage implementation
//!
//! The store owns every vertex and edge, hands out identities from two
//! counters and keeps each vertex's adjacency lists in step with the edge
//! collection. Validation happens once, when something is added.

use super::edge::Edge;
use super::types::{EdgeId, VertexId};
use super::vertex::Vertex;
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, warn};

/// File extension carried by every graph name
pub const DB_EXTENSION: &str = ".db";

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node already exists: {0}")]
    DuplicateId(VertexId),

    #[error("Node not in graph: {0}")]
    DanglingReference(VertexId),

    #[error("Relationship label is missing")]
    MissingLabel,

    #[error("A vertex with ID {0} does not exist")]
    VertexNotFound(VertexId),

    #[error("An edge with ID {0} does not exist")]
    EdgeNotFound(EdgeId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Append the `.db` suffix unless the name already has it
pub fn db_name(name: &str) -> String {
    if name.ends_with(DB_EXTENSION) {
        name.to_string()
    } else {
        format!("{}{}", name, DB_EXTENSION)
    }
}

/// In-memory graph storage
///
/// Uses insertion-ordered hash maps, so each collection doubles as its own
/// identity index:
/// - vertices: VertexId -> Vertex (with incoming/outgoing adjacency lists)
/// - edges: EdgeId -> Edge
#[derive(Debug, Clone)]
pub struct Graph {
    /// Database name, always ending in `.db`
    name: String,

    /// Vertex storage in insertion order
    vertices: IndexMap<VertexId, Vertex>,

    /// Edge storage in insertion order
    edges: IndexMap<EdgeId, Edge>,

    /// Next auto-assigned vertex id
    next_vertex_id: u64,

    /// Next edge id
    next_edge_id: u64,
}

impl Graph {
    /// Create a new empty graph
    pub fn new(name: &str) -> Self {
        Graph {
            name: db_name(name),
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
            next_vertex_id: 1,
            next_edge_id: 1,
        }
    }

    /// Database name (with `.db` suffix)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the graph, keeping the `.db` suffix convention
    pub fn set_name(&mut self, name: &str) {
        self.name = db_name(name);
    }

    /// Add a vertex, assigning the next counter value when it has no id
    ///
    /// The counter advances before the duplicate check, so an auto id is
    /// consumed even if a caller already claimed that value. A caller-supplied
    /// id never touches the counter. Adjacency lists on the incoming value are
    /// discarded: only `add_edge` fills them.
    pub fn add_vertex(&mut self, mut vertex: Vertex) -> GraphResult<VertexId> {
        if vertex.id.is_unassigned() {
            vertex.id = VertexId::from(self.next_vertex_id);
            self.next_vertex_id += 1;
        }

        if self.vertices.contains_key(&vertex.id) {
            return Err(GraphError::DuplicateId(vertex.id));
        }

        vertex.incoming.clear();
        vertex.outgoing.clear();

        let id = vertex.id.clone();
        debug!("Added vertex {}", id);
        self.vertices.insert(id.clone(), vertex);
        Ok(id)
    }

    /// Add several vertices, collecting failures instead of stopping
    pub fn add_vertices(
        &mut self,
        vertices: impl IntoIterator<Item = Vertex>,
    ) -> (Vec<VertexId>, Vec<GraphError>) {
        let mut ids = Vec::new();
        let mut errors = Vec::new();

        for vertex in vertices {
            match self.add_vertex(vertex) {
                Ok(id) => ids.push(id),
                Err(e) => {
                    warn!("Skipping vertex: {}", e);
                    errors.push(e);
                }
            }
        }

        (ids, errors)
    }

    /// Add an edge between two existing vertices
    ///
    /// Both endpoints are checked before the label. The edge id is always
    /// drawn from the counter; whatever id the caller set is replaced.
    pub fn add_edge(&mut self, mut edge: Edge) -> GraphResult<EdgeId> {
        for endpoint in [&edge.tail, &edge.head] {
            if !self.vertices.contains_key(endpoint) {
                return Err(GraphError::DanglingReference(endpoint.clone()));
            }
        }

        if edge.edge_type.is_empty() {
            return Err(GraphError::MissingLabel);
        }

        let id = EdgeId::from(self.next_edge_id);
        self.next_edge_id += 1;
        edge.id = id.clone();

        // Endpoints were checked above
        if let Some(head) = self.vertices.get_mut(&edge.head) {
            head.incoming.push(id.clone());
        }
        if let Some(tail) = self.vertices.get_mut(&edge.tail) {
            tail.outgoing.push(id.clone());
        }

        debug!("Added edge {} ({} -[{}]-> {})", id, edge.tail, edge.edge_type, edge.head);
        self.edges.insert(id.clone(), edge);
        Ok(id)
    }

    /// Add several edges, collecting failures instead of stopping
    pub fn add_edges(
        &mut self,
        edges: impl IntoIterator<Item = Edge>,
    ) -> (Vec<EdgeId>, Vec<GraphError>) {
        let mut ids = Vec::new();
        let mut errors = Vec::new();

        for edge in edges {
            match self.add_edge(edge) {
                Ok(id) => ids.push(id),
                Err(e) => {
                    warn!("Skipping edge: {}", e);
                    errors.push(e);
                }
            }
        }

        (ids, errors)
    }

    /// Look up a vertex by id
    pub fn find_vertex_by_id(&self, id: &str) -> GraphResult<&Vertex> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::VertexNotFound(VertexId::new(id)))
    }

    /// Look up an edge by id
    pub fn find_edge_by_id(&self, id: &str) -> GraphResult<&Edge> {
        self.edges
            .get(id)
            .ok_or_else(|| GraphError::EdgeNotFound(EdgeId::new(id)))
    }

    /// All vertices whose `name` property equals `name`, in insertion order
    pub fn find_vertices(&self, name: &str) -> Vec<&Vertex> {
        self.vertices.values().filter(|v| v.is_named(name)).collect()
    }

    /// Check if an edge exists
    pub fn has_edge(&self, id: &str) -> bool {
        self.edges.contains_key(id)
    }

    /// Edges whose tail is the given vertex, in insertion order
    pub fn outgoing_edges(&self, id: &str) -> GraphResult<Vec<&Edge>> {
        let vertex = self.find_vertex_by_id(id)?;
        Ok(vertex
            .outgoing
            .iter()
            .filter_map(|edge_id| self.edges.get(edge_id))
            .collect())
    }

    /// Edges whose head is the given vertex, in insertion order
    pub fn incoming_edges(&self, id: &str) -> GraphResult<Vec<&Edge>> {
        let vertex = self.find_vertex_by_id(id)?;
        Ok(vertex
            .incoming
            .iter()
            .filter_map(|edge_id| self.edges.get(edge_id))
            .collect())
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// All edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Get total number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Store an edge without validation or id assignment
    ///
    /// Lets tests build adjacency that points at missing vertices or edges.
    #[cfg(test)]
    pub(crate) fn insert_edge_unchecked(&mut self, edge: Edge) {
        if let Some(head) = self.vertices.get_mut(&edge.head) {
            head.incoming.push(edge.id.clone());
        }
        if let Some(tail) = self.vertices.get_mut(&edge.tail) {
            tail.outgoing.push(edge.id.clone());
        }
        self.edges.insert(edge.id.clone(), edge);
    }

    /// Append a raw edge id to a vertex's outgoing list
    #[cfg(test)]
    pub(crate) fn push_outgoing_unchecked(&mut self, vertex: &str, edge: EdgeId) {
        if let Some(v) = self.vertices.get_mut(vertex) {
            v.outgoing.push(edge);
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new("default")
    }
}
