//! GraphLoader: executes a query and materializes the result as a [`Graph`]
//!
//! ```no_run
//! # async fn run() -> cypher_graph::LoadResult<()> {
//! use cypher_graph::{ClientConfig, GraphLoader};
//!
//! let config = ClientConfig {
//!     host: "neo4j.example.org".to_string(),
//!     ..Default::default()
//! };
//! let loader = GraphLoader::from_config(config)?;
//! let graph = loader.execute("MATCH (n:station)-[r:train]-() RETURN n,r").await?;
//! println!("{} vertices, {} edges", graph.vertex_count(), graph.edge_count());
//! # Ok(())
//! # }
//! ```

use super::config::ClientConfig;
use super::http::HttpTransport;
use super::Transport;
use crate::builder::{self, BuildStats};
use crate::error::LoadResult;
use crate::graph::Graph;
use crate::results;
use tracing::info;

/// Runs one query per call through a [`Transport`] and builds a fresh graph
/// from the first statement's result.
pub struct GraphLoader<T> {
    transport: T,
    default_query: String,
}

impl GraphLoader<HttpTransport> {
    /// Loader over HTTP, using the configuration's default query
    pub fn from_config(config: ClientConfig) -> LoadResult<Self> {
        let default_query = config.default_query.clone();
        Ok(Self::new(HttpTransport::new(config)?).with_default_query(default_query))
    }
}

impl<T: Transport> GraphLoader<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            default_query: ClientConfig::default().default_query,
        }
    }

    pub fn with_default_query(mut self, query: impl Into<String>) -> Self {
        self.default_query = query.into();
        self
    }

    pub fn default_query(&self) -> &str {
        &self.default_query
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute `query` and build its graph.
    ///
    /// Any transport, payload or server error aborts the load; no partial
    /// graph is returned.
    pub async fn execute(&self, query: &str) -> LoadResult<Graph> {
        Ok(self.execute_with_stats(query).await?.0)
    }

    /// Execute the default query
    pub async fn execute_default(&self) -> LoadResult<Graph> {
        self.execute(&self.default_query).await
    }

    pub async fn execute_with_stats(&self, query: &str) -> LoadResult<(Graph, BuildStats)> {
        info!("Executing query: {}", query);
        let envelope = self.transport.execute(query).await?;
        let fragments = results::extract_fragments(envelope)?;
        Ok(builder::build_with_stats(&fragments))
    }
}
