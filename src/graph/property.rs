//! Property value types for vertices and edges
//!
//! Property bags hold arbitrary JSON-compatible data. Instead of an untyped
//! value, every entry is a [`PropertyValue`], which serializes to and from
//! plain JSON without any type tags.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Property value type mirroring the JSON data model
///
/// Supports:
/// - Null
/// - Boolean
/// - Integer (i64)
/// - Float (f64)
/// - String
/// - Array (Vec<PropertyValue>)
/// - Map (ordered, String -> PropertyValue)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<PropertyValue>),
    Map(PropertyMap),
}

impl PropertyValue {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Get string value if this is a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get float value; integers are widened
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            PropertyValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get array value if this is an array
    pub fn as_array(&self) -> Option<&[PropertyValue]> {
        match self {
            PropertyValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Get map value if this is a map
    pub fn as_map(&self) -> Option<&PropertyMap> {
        match self {
            PropertyValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Null => "Null",
            PropertyValue::Boolean(_) => "Boolean",
            PropertyValue::Integer(_) => "Integer",
            PropertyValue::Float(_) => "Float",
            PropertyValue::String(_) => "String",
            PropertyValue::Array(_) => "Array",
            PropertyValue::Map(_) => "Map",
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Null => write!(f, "null"),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Float(fl) => write!(f, "{}", fl),
            PropertyValue::String(s) => write!(f, "\"{}\"", s),
            PropertyValue::Array(arr) => {
                write!(f, "[")?;
                for (i, val) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, "]")
            }
            PropertyValue::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, val)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, val)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Convenience conversions
impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        PropertyValue::Integer(i as i64)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(arr: Vec<PropertyValue>) -> Self {
        PropertyValue::Array(arr)
    }
}

impl From<PropertyMap> for PropertyValue {
    fn from(map: PropertyMap) -> Self {
        PropertyValue::Map(map)
    }
}

impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => PropertyValue::Null,
            Value::Bool(b) => PropertyValue::Boolean(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => PropertyValue::Integer(i),
                // u64 beyond i64::MAX and true floats both land here
                None => PropertyValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => PropertyValue::String(s),
            Value::Array(arr) => PropertyValue::Array(arr.into_iter().map(Into::into).collect()),
            Value::Object(obj) => {
                PropertyValue::Map(obj.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<&PropertyValue> for serde_json::Value {
    fn from(value: &PropertyValue) -> Self {
        use serde_json::Value;
        match value {
            PropertyValue::Null => Value::Null,
            PropertyValue::Boolean(b) => Value::Bool(*b),
            PropertyValue::Integer(i) => Value::from(*i),
            // Non-finite floats have no JSON form
            PropertyValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            PropertyValue::String(s) => Value::String(s.clone()),
            PropertyValue::Array(arr) => Value::Array(arr.iter().map(Into::into).collect()),
            PropertyValue::Map(map) => {
                Value::Object(map.iter().map(|(k, v)| (k.clone(), v.into())).collect())
            }
        }
    }
}

/// Property map for storing vertex and edge properties (insertion ordered)
pub type PropertyMap = IndexMap<String, PropertyValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_value_types() {
        assert_eq!(
            PropertyValue::String("test".to_string()).type_name(),
            "String"
        );
        assert_eq!(PropertyValue::Integer(42).type_name(), "Integer");
        assert_eq!(PropertyValue::Float(3.5).type_name(), "Float");
        assert_eq!(PropertyValue::Boolean(true).type_name(), "Boolean");
        assert_eq!(PropertyValue::Array(vec![]).type_name(), "Array");
        assert_eq!(PropertyValue::Map(PropertyMap::new()).type_name(), "Map");
        assert_eq!(PropertyValue::Null.type_name(), "Null");
    }

    #[test]
    fn test_property_value_conversions() {
        let string_prop: PropertyValue = "hello".into();
        assert_eq!(string_prop.as_string(), Some("hello"));

        let int_prop: PropertyValue = 42i64.into();
        assert_eq!(int_prop.as_integer(), Some(42));
        assert_eq!(int_prop.as_float(), Some(42.0));

        let float_prop: PropertyValue = 2.5.into();
        assert_eq!(float_prop.as_float(), Some(2.5));
        assert_eq!(float_prop.as_integer(), None);

        let bool_prop: PropertyValue = true.into();
        assert_eq!(bool_prop.as_boolean(), Some(true));
    }

    #[test]
    fn test_untagged_json_decoding() {
        let json = r#"{
            "name": "Arya Stark",
            "age": 11,
            "height": 1.4,
            "alive": true,
            "titles": ["Princess", "No One"],
            "sword": {"name": "Needle", "maker": null}
        }"#;
        let props: PropertyMap = serde_json::from_str(json).unwrap();

        assert_eq!(props["name"].as_string(), Some("Arya Stark"));
        assert_eq!(props["age"], PropertyValue::Integer(11));
        assert_eq!(props["height"], PropertyValue::Float(1.4));
        assert_eq!(props["alive"], PropertyValue::Boolean(true));
        assert_eq!(props["titles"].as_array().unwrap().len(), 2);

        let sword = props["sword"].as_map().unwrap();
        assert_eq!(sword["name"].as_string(), Some("Needle"));
        assert!(sword["maker"].is_null());

        // Insertion order survives decoding
        let keys: Vec<&str> = props.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "age", "height", "alive", "titles", "sword"]);
    }

    #[test]
    fn test_untagged_json_encoding() {
        let mut props = PropertyMap::new();
        props.insert("name".to_string(), "Sansa".into());
        props.insert("age".to_string(), 13i64.into());
        props.insert("ward".to_string(), PropertyValue::Null);

        let json = serde_json::to_string(&props).unwrap();
        assert_eq!(json, r#"{"name":"Sansa","age":13,"ward":null}"#);
    }

    #[test]
    fn test_json_value_conversion() {
        let value = serde_json::json!({"a": [1, 2.5, "x"], "b": false});
        let prop = PropertyValue::from(value.clone());

        let map = prop.as_map().unwrap();
        let arr = map["a"].as_array().unwrap();
        assert_eq!(arr[0], PropertyValue::Integer(1));
        assert_eq!(arr[1], PropertyValue::Float(2.5));
        assert_eq!(arr[2], PropertyValue::String("x".to_string()));

        let back = serde_json::Value::from(&prop);
        assert_eq!(back, value);
    }

    #[test]
    fn test_display() {
        let arr = PropertyValue::Array(vec![1i64.into(), "two".into()]);
        assert_eq!(arr.to_string(), "[1, \"two\"]");
        assert_eq!(PropertyValue::Null.to_string(), "null");
    }
}
