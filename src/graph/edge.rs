//! Edge implementation for the property graph

use super::property::{PropertyContainer, PropertyMap};
use super::types::{EdgeType, VertexId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed, typed edge in the property graph
///
/// Edges reference their endpoints by identifier; the graph owns the vertices.
/// Equality and hashing use `(source, target, edge_type)`, so two parallel
/// edges of the same type compare equal even though the graph stores both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex (edge goes FROM this vertex)
    pub source: VertexId,

    /// Target vertex (edge goes TO this vertex)
    pub target: VertexId,

    /// Type of relationship (e.g., "train")
    #[serde(rename = "type")]
    pub edge_type: EdgeType,

    /// Properties associated with this edge
    pub properties: PropertyMap,
}

impl Edge {
    /// Create a new directed edge
    pub fn new(
        source: impl Into<VertexId>,
        target: impl Into<VertexId>,
        edge_type: impl Into<EdgeType>,
    ) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
            edge_type: edge_type.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Create a new edge with properties
    pub fn new_with_properties(
        source: impl Into<VertexId>,
        target: impl Into<VertexId>,
        edge_type: impl Into<EdgeType>,
        properties: PropertyMap,
    ) -> Self {
        Edge {
            properties,
            ..Edge::new(source, target, edge_type)
        }
    }

    /// Check if this edge connects two specific vertices (in either direction)
    pub fn connects(&self, a: &VertexId, b: &VertexId) -> bool {
        (&self.source == a && &self.target == b) || (&self.source == b && &self.target == a)
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl PropertyContainer for Edge {
    fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.target == other.target && self.edge_type == other.edge_type
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.target.hash(state);
        self.edge_type.hash(state);
    }
}

/// `source->target, type`
impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}, {}", self.source, self.target, self.edge_type)
    }
}
