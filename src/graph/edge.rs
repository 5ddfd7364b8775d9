//! Edge implementation for the property graph
//!
//! Edges are directed: they run from `tail` (source) to `head` (target) and
//! carry exactly one relationship type. Several edges may join the same pair
//! of vertices.

use super::property::{PropertyMap, PropertyValue};
use super::types::{null_as_default, EdgeId, EdgeType, VertexId};
use serde::{Deserialize, Serialize};

/// A directed edge in the property graph
///
/// JSON shape: `{ "id": "1", "label": "Father", "tail": "2", "head": "5",
/// "props": { ... } }`. The store always assigns `id` on insertion, so any
/// value supplied by the caller is overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: EdgeId,

    /// Type of relationship (e.g., "Father", "Sibling")
    #[serde(rename = "label", default, deserialize_with = "null_as_default")]
    pub edge_type: EdgeType,

    /// Source vertex (edge goes FROM this vertex)
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "VertexId::is_unassigned"
    )]
    pub tail: VertexId,

    /// Target vertex (edge goes TO this vertex)
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "VertexId::is_unassigned"
    )]
    pub head: VertexId,

    /// Properties associated with this edge
    #[serde(
        rename = "props",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "PropertyMap::is_empty"
    )]
    pub properties: PropertyMap,
}

impl Edge {
    /// Create a new directed edge from `tail` to `head`
    pub fn new(
        tail: impl Into<VertexId>,
        head: impl Into<VertexId>,
        edge_type: impl Into<EdgeType>,
    ) -> Self {
        Edge {
            id: EdgeId::default(),
            edge_type: edge_type.into(),
            tail: tail.into(),
            head: head.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Create a new edge with properties
    pub fn new_with_properties(
        tail: impl Into<VertexId>,
        head: impl Into<VertexId>,
        edge_type: impl Into<EdgeType>,
        properties: PropertyMap,
    ) -> Self {
        Edge {
            properties,
            ..Self::new(tail, head, edge_type)
        }
    }

    /// Builder: set a property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Set a property value
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Remove a property
    pub fn remove_property(&mut self, key: &str) -> Option<PropertyValue> {
        self.properties.shift_remove(key)
    }

    /// Check if property exists
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Get number of properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Whether this edge carries the given relationship type
    pub fn is_a(&self, rel: &str) -> bool {
        self.edge_type == *rel
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
