//! Typed schema of the transactional-endpoint response
//!
//! ```text
//! { "results": [ { "columns": [...],
//!                  "data": [ { "graph": { "nodes": [...], "relationships": [...] } } ] } ],
//!   "errors":  [ { "code": "...", "message": "..." } ] }
//! ```
//!
//! Unknown keys (`row`, `meta`, `stats`, ...) are ignored.

use crate::graph::PropertyMap;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Whole response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// One entry per submitted statement
    pub results: Vec<StatementResult>,

    /// Statement errors reported with a success status
    #[serde(default)]
    pub errors: Vec<ServerError>,
}

/// Result of one statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementResult {
    #[serde(default)]
    pub columns: Vec<String>,

    pub data: Vec<DataEntry>,
}

/// One element of a statement's `data` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntry {
    pub graph: Fragment,
}

/// A batch of node and relationship descriptors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub nodes: Vec<NodeDescriptor>,
    pub relationships: Vec<RelationshipDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub id: String,

    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default, deserialize_with = "string_properties")]
    pub properties: PropertyMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipDescriptor {
    /// Relationship id; not used for identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "startNode")]
    pub start_node: String,

    #[serde(rename = "endNode")]
    pub end_node: String,

    #[serde(rename = "type")]
    pub rel_type: String,

    #[serde(default, deserialize_with = "string_properties")]
    pub properties: PropertyMap,
}

/// Entry of the `errors` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerError {
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// A property value rendered as text.
///
/// Strings are taken verbatim, numbers and booleans use their JSON spelling.
/// Null, arrays and objects are rejected.
struct PropertyText(String);

impl<'de> Deserialize<'de> for PropertyText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TextVisitor;

        impl Visitor<'_> for TextVisitor {
            type Value = PropertyText;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string, number or boolean property value")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<PropertyText, E> {
                Ok(PropertyText(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<PropertyText, E> {
                Ok(PropertyText(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<PropertyText, E> {
                Ok(PropertyText(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<PropertyText, E> {
                Ok(PropertyText(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<PropertyText, E> {
                Ok(PropertyText(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<PropertyText, E> {
                Ok(PropertyText(v.to_string()))
            }
        }

        deserializer.deserialize_any(TextVisitor)
    }
}

fn string_properties<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PropertyMap, D::Error> {
    let raw = HashMap::<String, PropertyText>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(k, v)| (k, v.0)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_descriptor_defaults() {
        let node: NodeDescriptor = serde_json::from_value(json!({ "id": "1" })).unwrap();
        assert_eq!(node.id, "1");
        assert!(node.labels.is_empty());
        assert!(node.properties.is_empty());
    }

    #[test]
    fn test_node_descriptor_requires_id() {
        let result = serde_json::from_value::<NodeDescriptor>(json!({ "labels": ["station"] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_relationship_field_names() {
        let rel: RelationshipDescriptor = serde_json::from_value(json!({
            "id": "10", "startNode": "1", "endNode": "2", "type": "train",
            "properties": { "line": "U8" }
        }))
        .unwrap();
        assert_eq!(rel.start_node, "1");
        assert_eq!(rel.end_node, "2");
        assert_eq!(rel.rel_type, "train");
        assert_eq!(rel.properties["line"], "U8");
    }

    #[test]
    fn test_relationship_requires_endpoints() {
        let result = serde_json::from_value::<RelationshipDescriptor>(json!({
            "startNode": "1", "type": "train"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_scalar_properties_rendered_as_text() {
        let node: NodeDescriptor = serde_json::from_value(json!({
            "id": "1",
            "properties": { "name": "A", "platforms": 4, "depth": -12, "open": true, "km": 2.5 }
        }))
        .unwrap();
        assert_eq!(node.properties["name"], "A");
        assert_eq!(node.properties["platforms"], "4");
        assert_eq!(node.properties["depth"], "-12");
        assert_eq!(node.properties["open"], "true");
        assert_eq!(node.properties["km"], "2.5");
    }

    #[test]
    fn test_non_scalar_properties_rejected() {
        for bad in [json!(null), json!(["a"]), json!({ "nested": 1 })] {
            let result = serde_json::from_value::<NodeDescriptor>(json!({
                "id": "1", "properties": { "p": bad }
            }));
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_duplicate_property_keys_last_write_wins() {
        let text = r#"{"id":"1","properties":{"name":"first","name":"second"}}"#;
        let node: NodeDescriptor = serde_json::from_str(text).unwrap();
        assert_eq!(node.properties["name"], "second");
        assert_eq!(node.properties.len(), 1);
    }

    #[test]
    fn test_data_entry_ignores_row_and_meta() {
        let entry: DataEntry = serde_json::from_value(json!({
            "row": [{ "name": "A" }],
            "meta": [null],
            "graph": { "nodes": [], "relationships": [] }
        }))
        .unwrap();
        assert_eq!(entry.graph, Fragment::default());
    }
}
