//! Cypher Graph
//!
//! Loads the result of a Cypher query from a graph server's transactional HTTP
//! endpoint into an in-memory directed multigraph for graph algorithms.
//!
//! # Architecture
//!
//! query → [`Transport`] → [`Envelope`] → [`results::extract_fragments`] →
//! [`builder::build`] → [`Graph`] → [`algo`]
//!
//! - `graph`: vertices, edges, the shared [`PropertyContainer`] trait and the
//!   multigraph that owns them
//! - `results`: typed response schema and fragment extraction
//! - `builder`: fragment-by-fragment graph construction with first-wins vertex
//!   deduplication and silent skipping of unresolved relationships
//! - `client`: configuration, HTTP transport and the [`GraphLoader`] facade
//! - `algo`: shortest paths over a built graph
//!
//! ## Example Usage
//!
//! ```rust
//! use cypher_graph::{build, results, PropertyContainer};
//!
//! let body = br#"{"results":[{"data":[{"graph":{
//!     "nodes":[{"id":"1","labels":["station"],"properties":{"name":"A"}},
//!              {"id":"2","labels":["station"],"properties":{"name":"B"}}],
//!     "relationships":[{"startNode":"1","endNode":"2","type":"train","properties":{}}]
//! }}]}]}"#;
//!
//! let fragments = results::parse_fragments(body).unwrap();
//! let graph = build(&fragments);
//!
//! assert_eq!(graph.vertex_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! assert_eq!(graph.vertex("1").unwrap().property("name"), Some("A"));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod builder;
pub mod client;
pub mod error;
pub mod graph;
pub mod results;

// Re-export main types for convenience
pub use graph::{
    Edge, EdgeId, EdgeType, Graph, GraphError, GraphResult, Label, PropertyContainer,
    PropertyMap, Vertex, VertexId,
};

pub use builder::{build, build_with_stats, BuildStats, GraphBuilder};

pub use results::{Envelope, Fragment, NodeDescriptor, RelationshipDescriptor};

pub use client::{ClientConfig, GraphLoader, HttpTransport, Transport};

pub use error::{LoadError, LoadResult};

pub use algo::{shortest_path, PathOptions, VertexPath};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
