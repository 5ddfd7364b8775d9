//! Core graph implementation
//!
//! This module implements the property graph data model with:
//! - Vertices with ordered labels and JSON-compatible properties
//! - Directed edges with a single relationship type and properties
//! - Multiple edges between the same pair of vertices
//! - In-memory storage with per-vertex incoming/outgoing adjacency lists

pub mod edge;
pub mod property;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use property::{PropertyMap, PropertyValue};
pub use store::{db_name, Graph, GraphError, GraphResult, DB_EXTENSION};
pub use types::{EdgeId, EdgeType, Label, VertexId};
pub use vertex::{Vertex, NAME_PROPERTY};
