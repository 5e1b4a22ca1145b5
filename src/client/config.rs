//! Client configuration
//!
//! The defaults target a local server's transactional endpoint:
//! `http://localhost:7474/db/data/transaction/commit`.

use crate::error::{LoadError, LoadResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result data content that carries nodes and relationships
pub const RESULT_DATA_CONTENT_GRAPH: &str = "graph";
/// Result data content that carries tabular rows
pub const RESULT_DATA_CONTENT_ROW: &str = "row";

/// Connection and request settings for [`HttpTransport`](super::HttpTransport)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// `http` or `https`
    pub protocol: String,
    pub host: String,
    pub port: u16,
    /// Endpoint path, starting with `/`
    pub path: String,
    /// Query run by `GraphLoader::execute_default`
    pub default_query: String,
    /// Requested `resultDataContents`; must include `graph`
    pub result_data_contents: Vec<String>,
    /// HTTP basic authentication user
    pub username: Option<String>,
    pub password: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            protocol: "http".to_string(),
            host: "localhost".to_string(),
            port: 7474,
            path: "/db/data/transaction/commit".to_string(),
            default_query: "MATCH (n)-[r]-() RETURN n,r".to_string(),
            result_data_contents: vec![RESULT_DATA_CONTENT_GRAPH.to_string()],
            username: None,
            password: None,
            timeout_secs: 60,
        }
    }
}

impl ClientConfig {
    /// Parse a YAML document; missing keys take their default value.
    pub fn from_yaml_str(yaml: &str) -> LoadResult<Self> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| LoadError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML configuration file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> LoadResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Set basic authentication credentials
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn validate(&self) -> LoadResult<()> {
        if self.protocol != "http" && self.protocol != "https" {
            return Err(LoadError::Config(format!(
                "unsupported protocol '{}', expected http or https",
                self.protocol
            )));
        }
        if self.host.trim().is_empty() {
            return Err(LoadError::Config("host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(LoadError::Config("port must not be 0".to_string()));
        }
        if !self.path.starts_with('/') {
            return Err(LoadError::Config(format!("path '{}' must start with '/'", self.path)));
        }
        if !self.result_data_contents.iter().any(|c| c == RESULT_DATA_CONTENT_GRAPH) {
            return Err(LoadError::Config(
                "result_data_contents must include \"graph\"".to_string(),
            ));
        }
        if self.password.is_some() && self.username.is_none() {
            return Err(LoadError::Config("password given without username".to_string()));
        }
        Ok(())
    }

    /// Endpoint URI, `{protocol}://{host}:{port}{path}`
    pub fn uri(&self) -> LoadResult<String> {
        self.validate()?;
        Ok(format!("{}://{}:{}{}", self.protocol, self.host, self.port, self.path))
    }
}
