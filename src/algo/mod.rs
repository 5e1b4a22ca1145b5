//! Graph algorithms module
//!
//! Algorithms are implemented in the `cypher-graph-algorithms` crate over a
//! dense [`GraphView`]. This module is the adapter layer: it projects a built
//! [`Graph`] into a view and maps results back to vertices and edges.

use crate::graph::{Edge, Graph, PropertyContainer, Vertex};
use cypher_graph_algorithms::NodeId as AlgoNodeId;

// Re-export algorithms
pub use cypher_graph_algorithms::{bfs, dijkstra, GraphView, PathResult};

/// Projection settings for [`build_view`] and [`shortest_path`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathOptions {
    /// Only follow edges of this type
    pub edge_type: Option<String>,
    /// Numeric edge property used as weight; missing or non-numeric values
    /// weigh 1.0 and negative or infinite ones exclude the edge. Without it
    /// every edge weighs 1.0 and BFS is used.
    pub weight_property: Option<String>,
}

impl PathOptions {
    pub fn with_edge_type(mut self, edge_type: impl Into<String>) -> Self {
        self.edge_type = Some(edge_type.into());
        self
    }

    pub fn with_weight_property(mut self, key: impl Into<String>) -> Self {
        self.weight_property = Some(key.into());
        self
    }

    fn accepts(&self, edge: &Edge) -> bool {
        self.edge_type
            .as_deref()
            .map_or(true, |t| edge.edge_type.as_str() == t)
            && self.weight(edge).is_some()
    }

    /// Weight of `edge`, or `None` if it is negative or not finite.
    ///
    /// Such edges are left out of the view, so the search never relaxes
    /// them and they are never reported on a path.
    fn weight(&self, edge: &Edge) -> Option<f64> {
        let parsed = self
            .weight_property
            .as_deref()
            .and_then(|key| edge.property(key))
            .and_then(|v| v.trim().parse::<f64>().ok());
        match parsed {
            None => Some(1.0),
            Some(w) if w.is_finite() && w >= 0.0 => Some(w),
            Some(_) => None,
        }
    }
}

/// Build a GraphView from the graph for algorithm execution.
///
/// View node ids are the vertices' dense indices (see [`Graph::index_of`]).
pub fn build_view(graph: &Graph, options: &PathOptions) -> GraphView {
    let index_to_node: Vec<AlgoNodeId> = (0..graph.vertex_count() as AlgoNodeId).collect();

    let mut edges = Vec::with_capacity(graph.edge_count());
    let mut weights = options.weight_property.as_ref().map(|_| Vec::with_capacity(graph.edge_count()));

    for edge in graph.edges().filter(|e| options.accepts(e)) {
        // Both endpoints are in the graph by construction
        let (Some(u), Some(v)) = (
            graph.index_of(edge.source.as_str()),
            graph.index_of(edge.target.as_str()),
        ) else {
            continue;
        };
        edges.push((u, v));
        if let Some(w) = weights.as_mut() {
            w.push(options.weight(edge).unwrap_or(1.0));
        }
    }

    GraphView::from_edge_list(index_to_node, &edges, weights.as_deref())
}

/// A shortest path expressed in graph terms
#[derive(Debug, Clone)]
pub struct VertexPath<'g> {
    /// Vertices from source to target, both included
    pub vertices: Vec<&'g Vertex>,
    /// Edge taken between each consecutive pair of vertices
    pub edges: Vec<&'g Edge>,
    pub cost: f64,
}

impl VertexPath<'_> {
    pub fn ids(&self) -> Vec<&str> {
        self.vertices.iter().map(|v| v.id.as_str()).collect()
    }

    /// Value of `key` on every vertex of the path
    pub fn property_values(&self, key: &str) -> Vec<Option<&str>> {
        self.vertices.iter().map(|v| v.property(key)).collect()
    }

    pub fn hops(&self) -> usize {
        self.edges.len()
    }
}

/// Shortest path from `source` to `target` (vertex identifiers).
///
/// Returns `None` if either vertex is unknown or the target is unreachable.
/// Uses Dijkstra when a weight property is configured, BFS otherwise.
pub fn shortest_path<'g>(
    graph: &'g Graph,
    source: &str,
    target: &str,
    options: &PathOptions,
) -> Option<VertexPath<'g>> {
    let source_idx = graph.index_of(source)? as AlgoNodeId;
    let target_idx = graph.index_of(target)? as AlgoNodeId;

    let view = build_view(graph, options);
    let result = if options.weight_property.is_some() {
        dijkstra(&view, source_idx, target_idx)?
    } else {
        bfs(&view, source_idx, target_idx)?
    };

    let vertices: Vec<&Vertex> = result
        .path
        .iter()
        .map(|&idx| graph.vertex_at(idx as usize))
        .collect::<Option<_>>()?;

    let edges = vertices
        .windows(2)
        .map(|pair| {
            graph
                .edges_between(pair[0].id.as_str(), pair[1].id.as_str())
                .into_iter()
                .filter(|e| options.accepts(e))
                .min_by(|a, b| {
                    let (wa, wb) = (options.weight(a).unwrap_or(1.0), options.weight(b).unwrap_or(1.0));
                    wa.total_cmp(&wb)
                })
        })
        .collect::<Option<Vec<_>>>()?;

    Some(VertexPath {
        vertices,
        edges,
        cost: result.cost,
    })
}
