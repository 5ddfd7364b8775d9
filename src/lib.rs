//! Graphology
//!
//! An embeddable, in-memory property graph with a chainable traversal query
//! interface and flat-file JSON persistence.
//!
//! # Architecture
//!
//! - [`graph`]: vertices, edges, property values and the [`Graph`] store,
//!   which assigns identities and maintains adjacency lists
//! - [`query`]: the [`Query`] chain (`v`, `in_`, `out`, `both`, `filter`,
//!   `take`, `unique`, `except`, `values`) and owned [`Traversal`] plans
//! - [`persistence`]: one JSON file per graph under a data directory
//! - [`config`]: the data directory setting
//! - [`loader`]: bulk loading from JSON record arrays
//!
//! All operations are synchronous and single-owner: mutation takes
//! `&mut Graph`, queries borrow `&Graph`.
//!
//! ## Example Usage
//!
//! ```rust
//! use graphology::{Edge, Graph, Vertex};
//!
//! let mut graph = Graph::new("starks");
//!
//! let ned = graph
//!     .add_vertex(Vertex::new().with_label("Person").with_property("name", "Eddard Stark"))
//!     .unwrap();
//! let robb = graph
//!     .add_vertex(Vertex::new().with_label("Person").with_property("name", "Robb Stark"))
//!     .unwrap();
//! graph.add_edge(Edge::new(ned, robb.clone(), "Father")).unwrap();
//!
//! let children = graph.v("Eddard Stark").out("Father").values();
//! assert_eq!(children.len(), 1);
//! assert_eq!(children[0].id, robb);
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod graph;
pub mod loader;
pub mod persistence;
pub mod query;

// Re-export main types for convenience
pub use graph::{
    Edge, EdgeId, EdgeType, Graph, GraphError, GraphResult, Label, PropertyMap, PropertyValue,
    Vertex, VertexId,
};

pub use query::{Direction, Query, Step, Traversal};

pub use persistence::{Catalog, PersistenceError, PersistenceResult};

pub use config::{ConfigError, StoreConfig};

pub use loader::{load_files, LoadError, LoadReport};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
