//! Graph builder
//!
//! Folds result fragments, in order, into one [`Graph`]:
//!
//! 1. For each fragment, every node descriptor whose `id` is new becomes a
//!    vertex. A repeated `id` is skipped without reading its labels or
//!    properties, so the first occurrence wins.
//! 2. Right after that fragment's nodes, every relationship descriptor is
//!    resolved against all vertices registered so far in this build. If either
//!    endpoint is unknown the relationship is dropped; otherwise it becomes an
//!    edge.
//!
//! Dropping unresolved relationships tolerates results where an endpoint was
//! projected away by the query.

use crate::graph::{Edge, Graph, PropertyContainer, Vertex, VertexId};
use crate::results::{Fragment, NodeDescriptor, RelationshipDescriptor};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Counters collected during one build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub fragments: usize,
    pub vertices_added: usize,
    pub duplicate_vertices: usize,
    pub edges_added: usize,
    pub skipped_relationships: usize,
}

/// Incremental graph builder for one query result.
///
/// The identifier lookup table lives only as long as the builder; a new
/// builder starts from an empty graph and an empty table.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
    lookup: HashMap<VertexId, usize>,
    stats: BuildStats,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one fragment: its nodes first, then its relationships.
    pub fn add_fragment(&mut self, fragment: &Fragment) {
        self.stats.fragments += 1;
        for node in &fragment.nodes {
            self.add_node(node);
        }
        for relationship in &fragment.relationships {
            self.add_relationship(relationship);
        }
    }

    fn add_node(&mut self, node: &NodeDescriptor) {
        if self.lookup.contains_key(node.id.as_str()) {
            self.stats.duplicate_vertices += 1;
            debug!("Vertex exists: {}", node.id);
            return;
        }

        let mut vertex = Vertex::new(node.id.as_str());
        for label in &node.labels {
            vertex.add_label(label.as_str());
            debug!("Label added: {}", label);
        }
        for (key, value) in &node.properties {
            vertex.add_property(key.as_str(), value.as_str());
            debug!("Property added: {}:{}", key, value);
        }

        let id = vertex.id.clone();
        debug!("Vertex added: {}", vertex);
        match self.graph.add_vertex(vertex) {
            Ok(index) => {
                self.lookup.insert(id, index);
                self.stats.vertices_added += 1;
            }
            // Lookup and graph are filled together
            Err(err) => {
                warn!("Vertex dropped, lookup out of sync with graph: {}", err);
            }
        }
    }

    fn add_relationship(&mut self, relationship: &RelationshipDescriptor) {
        let resolved = self.lookup.contains_key(relationship.start_node.as_str())
            && self.lookup.contains_key(relationship.end_node.as_str());
        if !resolved {
            self.stats.skipped_relationships += 1;
            debug!(
                "Relationship skipped, unresolved endpoint: {}->{}, {}",
                relationship.start_node, relationship.end_node, relationship.rel_type
            );
            return;
        }

        let mut edge = Edge::new(
            relationship.start_node.as_str(),
            relationship.end_node.as_str(),
            relationship.rel_type.as_str(),
        );
        for (key, value) in &relationship.properties {
            edge.add_property(key.as_str(), value.as_str());
        }

        debug!("Edge added: {}", edge);
        match self.graph.add_edge(edge) {
            Ok(_) => self.stats.edges_added += 1,
            Err(err) => {
                self.stats.skipped_relationships += 1;
                warn!("Edge dropped, lookup out of sync with graph: {}", err);
            }
        }
    }

    /// Counters so far
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Graph built so far
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Finish the build, discarding the lookup table.
    pub fn finish(self) -> Graph {
        self.finish_with_stats().0
    }

    pub fn finish_with_stats(self) -> (Graph, BuildStats) {
        let stats = self.stats;
        info!(
            "Graph built from {} fragment(s): {} vertices, {} edges ({} duplicate vertices, {} relationships skipped)",
            stats.fragments,
            stats.vertices_added,
            stats.edges_added,
            stats.duplicate_vertices,
            stats.skipped_relationships
        );
        (self.graph, stats)
    }
}

/// Build a graph from fragments, in order.
pub fn build<'a, I>(fragments: I) -> Graph
where
    I: IntoIterator<Item = &'a Fragment>,
{
    build_with_stats(fragments).0
}

/// [`build`], also returning the build counters.
pub fn build_with_stats<'a, I>(fragments: I) -> (Graph, BuildStats)
where
    I: IntoIterator<Item = &'a Fragment>,
{
    let mut builder = GraphBuilder::new();
    for fragment in fragments {
        builder.add_fragment(fragment);
    }
    builder.finish_with_stats()
}
