//! Property graph model
//!
//! This module implements the in-memory graph that query results are
//! materialized into:
//! - Vertices with an upstream identifier, ordered labels and properties
//! - Directed, typed edges with properties
//! - A directed multigraph owning both, with adjacency and label indices

pub mod edge;
pub mod property;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use property::{PropertyContainer, PropertyMap};
pub use store::{Graph, GraphError, GraphResult};
pub use types::{EdgeId, EdgeType, Label, VertexId};
pub use vertex::Vertex;
