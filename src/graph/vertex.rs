//! Vertex implementation for the property graph

use super::property::{PropertyContainer, PropertyMap};
use super::types::{Label, VertexId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A vertex in the property graph
///
/// Vertices have:
/// - An identifier assigned by the server
/// - Labels, in the order they were received (duplicates kept)
/// - Properties (string key-value pairs)
///
/// Equality and hashing use the identifier only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// Identifier assigned by the server
    pub id: VertexId,

    /// Labels in received order
    pub labels: Vec<Label>,

    /// Properties associated with this vertex
    pub properties: PropertyMap,
}

impl Vertex {
    /// Create a vertex without labels or properties
    pub fn new(id: impl Into<VertexId>) -> Self {
        Vertex {
            id: id.into(),
            labels: Vec::new(),
            properties: PropertyMap::new(),
        }
    }

    /// Create a vertex with labels
    pub fn new_with_labels(id: impl Into<VertexId>, labels: Vec<Label>) -> Self {
        Vertex {
            id: id.into(),
            labels,
            properties: PropertyMap::new(),
        }
    }

    /// Append a label; an already present label is appended again
    pub fn add_label(&mut self, label: impl Into<Label>) {
        self.labels.push(label.into());
    }

    /// Check if vertex has a specific label
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l.as_str() == label)
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }
}

impl PropertyContainer for Vertex {
    fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
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

/// `id:label1,label2`, or just `id` when unlabeled
impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if !self.labels.is_empty() {
            let labels: Vec<&str> = self.labels.iter().map(Label::as_str).collect();
            write!(f, ":{}", labels.join(","))?;
        }
        Ok(())
    }
}
