//! Vertex implementation for the property graph
//!
//! A vertex carries an identity, an ordered list of labels, a property bag
//! and the ids of the edges touching it. The adjacency lists belong to the
//! store: they are rebuilt edge by edge and are never serialized.

use super::property::{PropertyMap, PropertyValue};
use super::types::{null_as_default, EdgeId, Label, VertexId};
use serde::{Deserialize, Serialize};

/// Property key used by named lookups (`Graph::find_vertices`, `Graph::v`)
pub const NAME_PROPERTY: &str = "name";

/// A vertex in the property graph
///
/// JSON shape: `{ "id": "1", "label": ["Person"], "props": { ... } }`.
/// Missing or `null` fields decode to their empty defaults; an empty `id`
/// asks the store to assign one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier for this vertex (empty until assigned)
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: VertexId,

    /// Ordered labels for this vertex
    #[serde(rename = "label", default, deserialize_with = "null_as_default")]
    pub labels: Vec<Label>,

    /// Ids of edges whose head is this vertex
    #[serde(skip)]
    pub incoming: Vec<EdgeId>,

    /// Ids of edges whose tail is this vertex
    #[serde(skip)]
    pub outgoing: Vec<EdgeId>,

    /// Properties associated with this vertex
    #[serde(
        rename = "props",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "PropertyMap::is_empty"
    )]
    pub properties: PropertyMap,
}

impl Vertex {
    /// Create an empty vertex; the store assigns its id on insertion
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty vertex with a caller-chosen id
    pub fn with_id(id: impl Into<VertexId>) -> Self {
        Vertex {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Builder: append a label
    pub fn with_label(mut self, label: impl Into<Label>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Builder: set a property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Add a label unless already present
    pub fn add_label(&mut self, label: impl Into<Label>) {
        let label = label.into();
        if !self.labels.contains(&label) {
            self.labels.push(label);
        }
    }

    /// Check if vertex has a specific label
    pub fn has_label(&self, label: &Label) -> bool {
        self.labels.contains(label)
    }

    /// Set a property value, returning the previous one
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Option<PropertyValue> {
        self.properties.insert(key.into(), value.into())
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Remove a property, keeping the order of the rest
    pub fn remove_property(&mut self, key: &str) -> Option<PropertyValue> {
        self.properties.shift_remove(key)
    }

    /// Check if property exists
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// The conventional `name` property, when it is a string
    pub fn name(&self) -> Option<&str> {
        self.get_property(NAME_PROPERTY).and_then(PropertyValue::as_string)
    }

    /// Whether the `name` property is a string equal to `name`
    pub fn is_named(&self, name: &str) -> bool {
        self.name() == Some(name)
    }

    /// Get number of properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Get number of labels
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl std::hash::Hash for Vertex {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vertex_is_unassigned() {
        let vertex = Vertex::new();
        assert!(vertex.id.is_unassigned());
        assert!(vertex.labels.is_empty());
        assert!(vertex.incoming.is_empty());
        assert!(vertex.outgoing.is_empty());
    }

    #[test]
    fn test_builder() {
        let vertex = Vertex::with_id("ned")
            .with_label("Person")
            .with_label("Stark")
            .with_property("name", "Eddard Stark")
            .with_property("age", 35i64);

        assert_eq!(vertex.id.as_str(), "ned");
        assert_eq!(vertex.label_count(), 2);
        assert!(vertex.has_label(&Label::new("Stark")));
        assert_eq!(vertex.name(), Some("Eddard Stark"));
        assert!(vertex.is_named("Eddard Stark"));
        assert_eq!(vertex.get_property("age").unwrap().as_integer(), Some(35));
    }

    #[test]
    fn test_labels_keep_order_and_dedupe() {
        let mut vertex = Vertex::new().with_label("B").with_label("A");
        vertex.add_label("A");
        vertex.add_label("C");

        let labels: Vec<&str> = vertex.labels.iter().map(Label::as_str).collect();
        assert_eq!(labels, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_vertex_properties() {
        let mut vertex = Vertex::new();

        assert!(vertex.set_property("name", "Bran").is_none());
        vertex.set_property("age", 10i64);
        vertex.set_property("wolf", "Summer");

        let old = vertex.set_property("age", 11i64);
        assert_eq!(old.unwrap().as_integer(), Some(10));
        assert_eq!(vertex.property_count(), 3);

        let removed = vertex.remove_property("age");
        assert!(removed.is_some());
        assert!(!vertex.has_property("age"));

        let keys: Vec<&str> = vertex.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "wolf"]);
    }

    #[test]
    fn test_non_string_name_does_not_match() {
        let vertex = Vertex::new().with_property("name", 7i64);
        assert_eq!(vertex.name(), None);
        assert!(!vertex.is_named("7"));
    }

    #[test]
    fn test_json_shape() {
        let mut vertex = Vertex::with_id("3").with_label("Person");
        vertex.incoming.push(EdgeId::new("1"));
        let json = serde_json::to_value(&vertex).unwrap();

        // Adjacency is never serialized and empty props are omitted
        assert_eq!(json, serde_json::json!({"id": "3", "label": ["Person"]}));

        let decoded: Vertex =
            serde_json::from_str(r#"{"label": ["Wolf"], "props": {"name": "Ghost"}}"#).unwrap();
        assert!(decoded.id.is_unassigned());
        assert_eq!(decoded.name(), Some("Ghost"));
        assert!(decoded.incoming.is_empty());
    }

    #[test]
    fn test_vertex_equality_is_by_id() {
        let a = Vertex::with_id("7").with_property("name", "x");
        let b = Vertex::with_id("7");
        let c = Vertex::with_id("8");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
