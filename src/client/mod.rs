//! Query execution against a graph server
//!
//! [`Transport`] is the seam between the graph builder and the network: it
//! turns one query into one decoded response envelope. [`HttpTransport`] talks
//! to a transactional HTTP endpoint; [`GraphLoader`] composes a transport with
//! result extraction and graph building.

pub mod config;
pub mod http;
pub mod loader;

pub use config::{ClientConfig, RESULT_DATA_CONTENT_GRAPH, RESULT_DATA_CONTENT_ROW};
pub use http::HttpTransport;
pub use loader::GraphLoader;

use crate::error::LoadResult;
use crate::results::Envelope;
use async_trait::async_trait;

/// Executes one query and returns the decoded response envelope.
///
/// Implementations report connection failures and non-success statuses as
/// transport errors and undecodable bodies as payload errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, query: &str) -> LoadResult<Envelope>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn execute(&self, query: &str) -> LoadResult<Envelope> {
        (**self).execute(query).await
    }
}
