//! Error type for normalized requests.

use serde_json::Value;
use thiserror::Error;

use crate::json::is_truthy;
use crate::request::RequestConfig;
use crate::transport::TransportError;

/// A request that did not settle successfully.
///
/// Every message ends with `while attempting <request>`, where the request
/// is rendered as JSON with credentials removed.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The exchange never completed (bad URL, DNS, connection, timeout).
    ///
    /// Raised in every mode.
    #[error("{message}")]
    Transport {
        /// Transport error text followed by the attempted request
        message: String,
        /// The attempted request, credentials removed
        request: RequestConfig,
        /// Underlying transport failure
        #[source]
        source: TransportError,
    },

    /// The server answered with a status of 400 or above.
    ///
    /// Only raised when not resolving all responses.
    #[error("{message}")]
    HttpStatus {
        /// Diagnostic text followed by the attempted request
        message: String,
        /// Response status code
        status_code: u16,
        /// Response body after JSON-safe parsing
        data: Value,
        /// The request as the caller supplied it
        request: RequestConfig,
    },
}

impl RequestError {
    /// Builds a transport failure for `request`.
    #[must_use]
    pub fn transport(source: TransportError, request: &RequestConfig) -> Self {
        Self::Transport {
            message: format!("{source} while attempting {}", request.describe()),
            request: request.redacted(),
            source,
        }
    }

    /// Builds a status failure from an already parsed body.
    ///
    /// The diagnostic prefers a truthy `message` field of `data`, then
    /// `data` itself, then `null`. It is JSON-encoded and then wrapped in
    /// one more pair of quotes, so `"gone"` reads `""gone""`.
    #[must_use]
    pub fn http_status(status_code: u16, data: Value, request: RequestConfig) -> Self {
        let summary = diagnostic_summary(&data);
        let summary = serde_json::to_string(summary).unwrap_or_else(|_| "null".to_string());

        Self::HttpStatus {
            message: format!("\"{summary}\" while attempting {}", request.describe()),
            status_code,
            data,
            request,
        }
    }

    /// Returns the response status, for status failures.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status_code, .. } => Some(*status_code),
            Self::Transport { .. } => None,
        }
    }

    /// Returns the parsed response body, for status failures.
    #[must_use]
    pub const fn data(&self) -> Option<&Value> {
        match self {
            Self::HttpStatus { data, .. } => Some(data),
            Self::Transport { .. } => None,
        }
    }

    /// Returns the request this error belongs to.
    ///
    /// Transport failures carry the redacted request; status failures carry
    /// the request as supplied.
    #[must_use]
    pub const fn request(&self) -> &RequestConfig {
        match self {
            Self::Transport { request, .. } | Self::HttpStatus { request, .. } => request,
        }
    }

    /// Returns true if the exchange never completed.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

static NULL: Value = Value::Null;

fn diagnostic_summary(data: &Value) -> &Value {
    if !is_truthy(data) {
        return &NULL;
    }
    match data.get("message") {
        Some(message) if is_truthy(message) => message,
        _ => data,
    }
}
