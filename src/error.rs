//! Error types for loading a graph from a query

use serde_json::error::Category;
use thiserror::Error;

/// Errors that can occur while executing a query and materializing its result.
///
/// Every variant is fatal for the load: no partial graph is returned.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Connection failure, timeout or other HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Failed: HTTP error code {status}: {body}")]
    Status { status: u16, body: String },

    /// The payload is not valid JSON
    #[error("Error while parsing json: {0}")]
    Parse(#[source] serde_json::Error),

    /// The payload is valid JSON but does not have the expected shape
    #[error("Unexpected result structure: {0}")]
    Structure(String),

    /// The server reported a statement error in the `errors` array
    #[error("Server error {code}: {message}")]
    Server { code: String, message: String },

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    /// Whether the failure happened in the transport rather than in the payload
    pub fn is_transport(&self) -> bool {
        matches!(self, LoadError::Http(_) | LoadError::Status { .. })
    }

    /// Whether the failure comes from a malformed or misshapen payload
    pub fn is_payload(&self) -> bool {
        matches!(self, LoadError::Parse(_) | LoadError::Structure(_))
    }
}

/// Syntax and EOF errors are parse errors; type and shape mismatches are
/// structure errors.
impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => LoadError::Structure(err.to_string()),
            Category::Syntax | Category::Eof | Category::Io => LoadError::Parse(err),
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
