//! HttpTransport: POSTs Cypher statements to a transactional HTTP endpoint

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::config::ClientConfig;
use super::Transport;
use crate::error::{LoadError, LoadResult};
use crate::results::{self, Envelope};

/// Network transport for a single-statement commit request.
///
/// Sends `{"statements":[{"statement": ..., "resultDataContents": [...]}]}`
/// and decodes the response body into an [`Envelope`].
pub struct HttpTransport {
    config: ClientConfig,
    uri: String,
    http_client: Client,
}

impl HttpTransport {
    /// Create a transport from a validated configuration.
    ///
    /// # Example
    /// ```no_run
    /// # use cypher_graph::{ClientConfig, HttpTransport};
    /// let transport = HttpTransport::new(ClientConfig::default()).unwrap();
    /// assert_eq!(transport.uri(), "http://localhost:7474/db/data/transaction/commit");
    /// ```
    pub fn new(config: ClientConfig) -> LoadResult<Self> {
        let uri = config.uri()?;
        debug!("URI: {}", uri);

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            uri,
            http_client,
        })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// JSON request body for `query`
    pub fn request_body(&self, query: &str) -> serde_json::Value {
        serde_json::json!({
            "statements": [{
                "statement": query,
                "resultDataContents": self.config.result_data_contents,
            }]
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, query: &str) -> LoadResult<Envelope> {
        let body = self.request_body(query);
        debug!("JSON request: {}", body);

        let mut request = self
            .http_client
            .post(&self.uri)
            .header(ACCEPT, "application/json")
            .json(&body);
        if let Some(username) = &self.config.username {
            request = request.basic_auth(username, self.config.password.as_ref());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LoadError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        debug!("JSON response: {}", String::from_utf8_lossy(&bytes));
        results::decode(&bytes)
    }
}
