//! Query processing module
//!
//! Queries are chains of stages over a result set of vertices:
//! - `Graph::v(name)` seeds the results with every vertex of that name
//! - `out`, `in_` and `both` follow edges of one relationship type
//! - `filter`, `take`, `unique` and `except` narrow the results
//! - `values` materializes them
//!
//! Each stage consumes the query and returns the next state, so a chain
//! reads left to right and its order is the order of evaluation.
//!
//! Traversal is best-effort: an adjacency entry that no longer resolves to
//! an edge, or an edge whose endpoint is missing, is skipped rather than
//! reported. Strict validation lives in the store, at write time.

pub mod traversal;

pub use traversal::{Step, Traversal};

use crate::graph::{Graph, Vertex, VertexId};
use rustc_hash::FxHashSet;
use std::fmt;

/// Direction in which a traversal stage follows edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow edges pointing at the vertex, landing on their tails
    Incoming,
    /// Follow edges leaving the vertex, landing on their heads
    Outgoing,
    /// Incoming first, then outgoing
    Both,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Incoming => write!(f, "in"),
            Direction::Outgoing => write!(f, "out"),
            Direction::Both => write!(f, "both"),
        }
    }
}

/// A transient view over a graph: the current ordered result set
///
/// Duplicates are kept until `unique` is applied.
#[derive(Debug, Clone)]
pub struct Query<'g> {
    graph: &'g Graph,
    results: Vec<&'g Vertex>,
}

impl Graph {
    /// Start a query from every vertex whose `name` property equals `name`
    pub fn v(&self, name: &str) -> Query<'_> {
        Query::from_vertices(self, self.find_vertices(name))
    }
}

impl<'g> Query<'g> {
    /// Start a query from an arbitrary result set
    ///
    /// The vertices need not belong to `graph`; their adjacency lists are
    /// resolved against it as they are.
    pub fn from_vertices(graph: &'g Graph, results: Vec<&'g Vertex>) -> Self {
        Query { graph, results }
    }

    /// Vertices reached over outgoing `rel` edges
    pub fn out(self, rel: &str) -> Self {
        self.expand(rel, Direction::Outgoing)
    }

    /// Vertices reached over incoming `rel` edges
    pub fn in_(self, rel: &str) -> Self {
        self.expand(rel, Direction::Incoming)
    }

    /// Vertices reached over `rel` edges in either direction
    pub fn both(self, rel: &str) -> Self {
        self.expand(rel, Direction::Both)
    }

    /// Replace each result by its `rel` neighbours in `direction`
    ///
    /// Output order: input vertices in order; per vertex, its adjacency list
    /// in insertion order (incoming before outgoing for `Both`).
    pub fn expand(mut self, rel: &str, direction: Direction) -> Self {
        let graph = self.graph;
        let mut output = Vec::new();

        for vertex in &self.results {
            if matches!(direction, Direction::Incoming | Direction::Both) {
                for edge_id in &vertex.incoming {
                    let Ok(edge) = graph.find_edge_by_id(edge_id.as_str()) else {
                        continue;
                    };
                    if !edge.is_a(rel) {
                        continue;
                    }
                    if let Ok(tail) = graph.find_vertex_by_id(edge.tail.as_str()) {
                        output.push(tail);
                    }
                }
            }

            if matches!(direction, Direction::Outgoing | Direction::Both) {
                for edge_id in &vertex.outgoing {
                    let Ok(edge) = graph.find_edge_by_id(edge_id.as_str()) else {
                        continue;
                    };
                    if !edge.is_a(rel) {
                        continue;
                    }
                    if let Ok(head) = graph.find_vertex_by_id(edge.head.as_str()) {
                        output.push(head);
                    }
                }
            }
        }

        self.results = output;
        self
    }

    /// Keep only results accepted by `predicate`
    pub fn filter<F>(mut self, mut predicate: F) -> Self
    where
        F: FnMut(&Vertex) -> bool,
    {
        self.results.retain(|v| predicate(v));
        self
    }

    /// Keep the first `n` results
    pub fn take(mut self, n: usize) -> Self {
        self.results.truncate(n);
        self
    }

    /// Drop repeated vertices, keeping each first occurrence
    pub fn unique(mut self) -> Self {
        let mut seen: FxHashSet<&'g str> = FxHashSet::default();
        self.results.retain(|&v| seen.insert(v.id.as_str()));
        self
    }

    /// Drop every result whose id is `id`
    pub fn except(mut self, id: &str) -> Self {
        self.results.retain(|v| v.id.as_str() != id);
        self
    }

    /// Apply a single planned step
    pub fn apply(self, step: &Step) -> Self {
        match step {
            Step::In(rel) => self.in_(rel.as_str()),
            Step::Out(rel) => self.out(rel.as_str()),
            Step::Both(rel) => self.both(rel.as_str()),
            Step::Take(n) => self.take(*n),
            Step::Unique => self.unique(),
            Step::Except(id) => self.except(id.as_str()),
        }
    }

    /// Materialize the current results
    pub fn values(&self) -> Vec<Vertex> {
        self.results.iter().map(|&v| v.clone()).collect()
    }

    /// Ids of the current results, in order
    pub fn ids(&self) -> Vec<VertexId> {
        self.results.iter().map(|v| v.id.clone()).collect()
    }

    /// Borrow the current results without cloning
    pub fn iter(&self) -> impl Iterator<Item = &'g Vertex> + '_ {
        self.results.iter().copied()
    }

    /// The graph this query reads from
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results as a pretty-printed JSON array
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.results)
    }
}
