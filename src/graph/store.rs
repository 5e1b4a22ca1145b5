//! In-memory directed multigraph
//!
//! Vertices are unique by identifier and kept in insertion order. Edges form a
//! multiset: parallel edges and self-loops are stored as given.

use super::edge::Edge;
use super::property::PropertyContainer;
use super::types::{EdgeId, EdgeType, Label, VertexId};
use super::vertex::Vertex;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("Vertex {0} already exists")]
    VertexAlreadyExists(VertexId),

    #[error("Invalid edge: source vertex {0} does not exist")]
    InvalidEdgeSource(VertexId),

    #[error("Invalid edge: target vertex {0} does not exist")]
    InvalidEdgeTarget(VertexId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Directed multigraph of [`Vertex`] and [`Edge`]
///
/// Storage layout:
/// - vertices: VertexId -> Vertex, insertion ordered (position = dense index)
/// - edges: EdgeId -> Edge (arena, insertion ordered)
/// - outgoing / incoming: dense vertex index -> Vec<EdgeId>
/// - label_index: Label -> dense vertex indices
/// - edge_type_index: EdgeType -> EdgeIds
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: IndexMap<VertexId, Vertex>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<EdgeId>>,
    incoming: Vec<Vec<EdgeId>>,
    label_index: HashMap<Label, Vec<usize>>,
    edge_type_index: HashMap<EdgeType, Vec<EdgeId>>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex, returning its dense index.
    ///
    /// Fails with [`GraphError::VertexAlreadyExists`] if the identifier is
    /// taken; the stored vertex is left untouched.
    pub fn add_vertex(&mut self, vertex: Vertex) -> GraphResult<usize> {
        if self.vertices.contains_key(&vertex.id) {
            return Err(GraphError::VertexAlreadyExists(vertex.id));
        }

        let index = self.vertices.len();
        let mut seen = HashSet::new();
        for label in &vertex.labels {
            if seen.insert(label) {
                self.label_index.entry(label.clone()).or_default().push(index);
            }
        }

        self.vertices.insert(vertex.id.clone(), vertex);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        Ok(index)
    }

    /// Add an edge between two vertices already in the graph.
    pub fn add_edge(&mut self, edge: Edge) -> GraphResult<EdgeId> {
        let source = self
            .vertices
            .get_index_of(&edge.source)
            .ok_or_else(|| GraphError::InvalidEdgeSource(edge.source.clone()))?;
        let target = self
            .vertices
            .get_index_of(&edge.target)
            .ok_or_else(|| GraphError::InvalidEdgeTarget(edge.target.clone()))?;

        let id = EdgeId::new(self.edges.len());
        self.outgoing[source].push(id);
        self.incoming[target].push(id);
        self.edge_type_index.entry(edge.edge_type.clone()).or_default().push(id);
        self.edges.push(edge);
        Ok(id)
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    /// Get a vertex by identifier
    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Get a vertex by dense index (insertion position)
    pub fn vertex_at(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get_index(index).map(|(_, v)| v)
    }

    /// Dense index (insertion position) of a vertex
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.vertices.get_index_of(id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// All vertices, in insertion order
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// All edges, in insertion order (parallel edges included)
    pub fn edges(&self) -> impl ExactSizeIterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Edges with their ids, in insertion order
    pub fn edge_entries(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId::new(i), e))
    }

    /// Edges leaving a vertex, in insertion order
    pub fn outgoing_edges(&self, id: &str) -> Vec<&Edge> {
        self.adjacent(&self.outgoing, id)
    }

    /// Edges entering a vertex, in insertion order
    pub fn incoming_edges(&self, id: &str) -> Vec<&Edge> {
        self.adjacent(&self.incoming, id)
    }

    fn adjacent(&self, lists: &[Vec<EdgeId>], id: &str) -> Vec<&Edge> {
        self.index_of(id)
            .map(|idx| lists[idx].iter().map(|e| &self.edges[e.index()]).collect())
            .unwrap_or_default()
    }

    /// Edges going from `source` to `target`
    pub fn edges_between(&self, source: &str, target: &str) -> Vec<&Edge> {
        self.outgoing_edges(source)
            .into_iter()
            .filter(|e| e.target.as_str() == target)
            .collect()
    }

    /// Vertices carrying a label, in insertion order
    pub fn vertices_by_label(&self, label: &str) -> Vec<&Vertex> {
        self.label_index
            .get(&Label::new(label))
            .map(|indices| indices.iter().filter_map(|&i| self.vertex_at(i)).collect())
            .unwrap_or_default()
    }

    pub fn edges_by_type(&self, edge_type: &str) -> Vec<&Edge> {
        self.edge_type_index
            .get(&EdgeType::new(edge_type))
            .map(|ids| ids.iter().map(|e| &self.edges[e.index()]).collect())
            .unwrap_or_default()
    }

    /// First vertex (in insertion order) whose property `key` equals `value`
    pub fn find_vertex(&self, key: &str, value: &str) -> Option<&Vertex> {
        self.vertices().find(|v| v.property(key) == Some(value))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored edges, parallel edges counted individually
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges when `(source, target, type)` duplicates are collapsed
    pub fn distinct_edge_count(&self) -> usize {
        self.edges.iter().collect::<HashSet<_>>().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Serializes as `{"vertices": [...], "edges": [...]}`
impl Serialize for Graph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let vertices: Vec<&Vertex> = self.vertices().collect();
        let mut state = serializer.serialize_struct("Graph", 2)?;
        state.serialize_field("vertices", &vertices)?;
        state.serialize_field("edges", &self.edges)?;
        state.end()
    }
}
