//! Successful outcomes of a normalized request.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::json::parse_body;
use crate::transport::HttpResponse;

/// Everything about a completed exchange, returned in resolve-all mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullResponse {
    /// Response status code
    pub status_code: u16,
    /// Response body after JSON-safe parsing
    pub data: Value,
    /// Raw response body text
    pub body: String,
    /// Response headers
    #[serde(serialize_with = "serialize_headers")]
    pub headers: http::HeaderMap,
}

impl From<HttpResponse> for FullResponse {
    fn from(response: HttpResponse) -> Self {
        let body = response.body_lossy().into_owned();
        Self {
            status_code: response.status.as_u16(),
            data: parse_body(&response.body),
            body,
            headers: response.headers,
        }
    }
}

impl FullResponse {
    /// Returns a header value as text, if present and printable.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A successful outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NormalizedOutcome {
    /// The parsed body (status-based mode)
    Body(Value),
    /// The full response (resolve-all mode)
    Full(FullResponse),
}

impl NormalizedOutcome {
    /// Returns the parsed body, whichever mode produced the outcome.
    #[must_use]
    pub const fn data(&self) -> &Value {
        match self {
            Self::Body(data) | Self::Full(FullResponse { data, .. }) => data,
        }
    }

    /// Returns the status code, when the full response was kept.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Body(_) => None,
            Self::Full(full) => Some(full.status_code),
        }
    }

    /// Consumes the outcome and returns the parsed body.
    #[must_use]
    pub fn into_data(self) -> Value {
        match self {
            Self::Body(data) | Self::Full(FullResponse { data, .. }) => data,
        }
    }
}

// Repeated header names are joined with ", "; non-text values are skipped.
fn serialize_headers<S: Serializer>(
    headers: &http::HeaderMap,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map: BTreeMap<&str, String> = BTreeMap::new();
    for (name, value) in headers {
        let Ok(text) = value.to_str() else {
            continue;
        };
        map.entry(name.as_str())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(text);
            })
            .or_insert_with(|| text.to_string());
    }
    map.serialize(serializer)
}
