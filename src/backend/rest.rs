//! REST client for a hosted semantic-search service.
//!
//! Speaks a JSON query API: one POST per search carrying the query text,
//! the serialized filter tree, the requested columns, the result limit,
//! and the pass-through ranking hints. The response is an ordered list of
//! result rows under a `results` key.

use serde_json::{json, Map, Value};
use url::Url;

use crate::backend::{SearchBackend, RESULT_COLUMNS};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::filter::Filter;
use crate::http;
use crate::types::ResultSet;

/// A hosted semantic-search service reachable over HTTP.
///
/// The endpoint is the service's fully-formed query URL; connection and
/// credential bootstrapping are the caller's responsibility.
pub struct RestBackend {
    endpoint: Url,
    name: String,
    token: Option<String>,
}

impl RestBackend {
    /// Create a backend for the service behind `endpoint`.
    ///
    /// `name` identifies the backend in logs and error messages, e.g. the
    /// index it serves ("popular", "unpopular"). `token`, when present, is
    /// sent as a bearer credential on every request.
    pub fn new(endpoint: Url, name: impl Into<String>, token: Option<String>) -> Self {
        Self {
            endpoint,
            name: name.into(),
            token,
        }
    }
}

impl SearchBackend for RestBackend {
    async fn search(
        &self,
        query: &str,
        filter: Option<&Filter>,
        config: &SearchConfig,
    ) -> Result<ResultSet, SearchError> {
        tracing::trace!(backend = %self.name, query, "issuing backend query");

        let client = http::build_client(config)?;
        let body = build_request_body(query, filter, config)?;

        let mut request = client.post(self.endpoint.clone()).json(&body);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("{} request failed: {e}", self.name)))?
            .error_for_status()
            .map_err(|e| SearchError::Backend(format!("{} query failed: {e}", self.name)))?;

        let text = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("{} response read failed: {e}", self.name)))?;

        let records = parse_response(&self.name, &text)?;
        tracing::debug!(backend = %self.name, count = records.len(), "backend returned results");
        Ok(records)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Build the JSON query payload for one backend request.
///
/// The `experimental` block and `scoring_config` carry the pass-through
/// ranking hints; they are opaque to the pipeline and forwarded verbatim.
pub(crate) fn build_request_body(
    query: &str,
    filter: Option<&Filter>,
    config: &SearchConfig,
) -> Result<Value, SearchError> {
    let mut experimental = Map::new();
    experimental.insert(
        "returnConfidenceScores".into(),
        Value::Bool(config.backend.return_confidence_scores),
    );
    if let Some(multiplier) = config.backend.header_multiplier {
        experimental.insert(
            "retrievalWeights".into(),
            json!({
                "headerBoost": {
                    "multiplier": multiplier,
                    "skipStopWords": false,
                }
            }),
        );
    }
    if config.backend.disable_reranker {
        experimental.insert("reranker".into(), Value::from("none"));
    }

    let mut body = Map::new();
    body.insert("query".into(), Value::from(query));
    if let Some(filter) = filter {
        let filter = serde_json::to_value(filter)
            .map_err(|e| SearchError::Backend(format!("filter serialization failed: {e}")))?;
        body.insert("filter".into(), filter);
    }
    body.insert("columns".into(), json!(RESULT_COLUMNS));
    body.insert("limit".into(), Value::from(config.limit as u64));
    body.insert("experimental".into(), Value::Object(experimental));
    if let Some(weight) = config.backend.score_weight {
        body.insert(
            "scoring_config".into(),
            json!({
                "functions": {
                    "numeric_boosts": [
                        {"column": "score", "weight": weight},
                    ]
                }
            }),
        );
    }

    Ok(Value::Object(body))
}

/// Parse a backend response body into an ordered result set.
///
/// Extracted as a separate function for testability with canned JSON.
/// An unparseable body is a backend failure; a well-formed body holding a
/// bad row is a malformed record, fatal for the run.
pub(crate) fn parse_response(backend: &str, body: &str) -> Result<ResultSet, SearchError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| SearchError::Backend(format!("{backend} returned unparseable body: {e}")))?;

    let rows = value
        .get("results")
        .ok_or_else(|| SearchError::Backend(format!("{backend} response has no results key")))?;

    serde_json::from_value(rows.clone())
        .map_err(|e| SearchError::MalformedRecord(format!("{backend} returned a bad row: {e}")))
}
