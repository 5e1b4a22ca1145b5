//! Result extraction
//!
//! Decodes a query response envelope and pulls out the graph fragments of the
//! first statement, in `data` order.

pub mod schema;

pub use schema::{
    DataEntry, Envelope, Fragment, NodeDescriptor, RelationshipDescriptor, ServerError,
    StatementResult,
};

use crate::error::{LoadError, LoadResult};
use tracing::debug;

/// Decode a raw response body.
///
/// Malformed JSON yields [`LoadError::Parse`]; well-formed JSON of the wrong
/// shape (missing `results`, `data`, `graph`, required descriptor fields, wrong
/// types) yields [`LoadError::Structure`].
pub fn decode(body: &[u8]) -> LoadResult<Envelope> {
    Ok(serde_json::from_slice(body)?)
}

/// Convert an already parsed JSON tree into the typed envelope.
pub fn from_value(value: serde_json::Value) -> LoadResult<Envelope> {
    Ok(serde_json::from_value(value)?)
}

/// Fragments of the first statement, in `data` order.
///
/// Fails if the server reported errors or if `results` is empty. Results of
/// further statements are ignored.
pub fn extract_fragments(envelope: Envelope) -> LoadResult<Vec<Fragment>> {
    if let Some(err) = envelope.errors.into_iter().next() {
        return Err(LoadError::Server {
            code: err.code,
            message: err.message,
        });
    }

    let statement_count = envelope.results.len();
    let first = envelope
        .results
        .into_iter()
        .next()
        .ok_or_else(|| LoadError::Structure("results is empty".to_string()))?;

    if statement_count > 1 {
        debug!("Ignoring results of {} further statement(s)", statement_count - 1);
    }

    Ok(first.data.into_iter().map(|entry| entry.graph).collect())
}

/// [`decode`] followed by [`extract_fragments`]
pub fn parse_fragments(body: &[u8]) -> LoadResult<Vec<Fragment>> {
    extract_fragments(decode(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn graph_entry(ids: &[&str]) -> serde_json::Value {
        let nodes: Vec<_> = ids.iter().map(|id| json!({ "id": id, "labels": [], "properties": {} })).collect();
        json!({ "graph": { "nodes": nodes, "relationships": [] } })
    }

    #[test]
    fn test_fragments_in_data_order() {
        let envelope = from_value(json!({
            "results": [{ "columns": ["n"], "data": [graph_entry(&["1"]), graph_entry(&["2", "3"])] }],
            "errors": []
        }))
        .unwrap();

        let fragments = extract_fragments(envelope).unwrap();
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].nodes[0].id, "1");
        assert_eq!(fragments[1].nodes.len(), 2);
    }

    #[test]
    fn test_only_first_statement_used() {
        let envelope = from_value(json!({
            "results": [
                { "data": [graph_entry(&["1"])] },
                { "data": [graph_entry(&["2"]), graph_entry(&["3"])] }
            ]
        }))
        .unwrap();

        let fragments = extract_fragments(envelope).unwrap();
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].nodes[0].id, "1");
    }

    #[test]
    fn test_empty_results_is_structure_error() {
        let envelope = from_value(json!({ "results": [], "errors": [] })).unwrap();
        let err = extract_fragments(envelope).unwrap_err();
        assert!(matches!(err, LoadError::Structure(_)));
    }

    #[test]
    fn test_empty_data_gives_no_fragments() {
        let fragments = parse_fragments(br#"{"results":[{"columns":[],"data":[]}]}"#).unwrap();
        assert!(fragments.is_empty());
    }

    #[test]
    fn test_server_errors_surface() {
        let err = parse_fragments(
            br#"{"results":[],"errors":[{"code":"Neo.ClientError.Statement.SyntaxError","message":"Invalid input"}]}"#,
        )
        .unwrap_err();

        match err {
            LoadError::Server { code, message } => {
                assert_eq!(code, "Neo.ClientError.Statement.SyntaxError");
                assert_eq!(message, "Invalid input");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_keys_are_structure_errors() {
        let cases: [&[u8]; 5] = [
            br#"{"errors":[]}"#,
            br#"{"results":[{}]}"#,
            br#"{"results":[{"data":[{"row":[1]}]}]}"#,
            br#"{"results":[{"data":[{"graph":{"nodes":[]}}]}]}"#,
            br#"{"results":{"data":[]}}"#,
        ];
        for body in cases {
            let err = parse_fragments(body).unwrap_err();
            assert!(matches!(err, LoadError::Structure(_)), "{err}");
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse_fragments(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
