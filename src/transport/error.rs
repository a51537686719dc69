//! Error types for the transport layer.

use std::error::Error as StdError;

use thiserror::Error;

/// A failure that happened before or during the network exchange itself.
///
/// A completed exchange with a non-2xx status is *not* a transport error;
/// the client returns it as an ordinary [`super::HttpResponse`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and failures while reading the response body.
    ///
    /// The message lists every cause in the source chain.
    #[error("Connection error: {}", with_causes(.0.as_ref()))]
    Connection(#[source] Box<dyn StdError + Send + Sync>),

    /// Request timed out.
    ///
    /// Only raised when the client itself was configured with a timeout.
    #[error("Request timed out")]
    Timeout,

    /// The request URL could not be parsed.
    #[error("Invalid URI: {0}")]
    InvalidUrl(String),

    /// The request could not be built (bad method, header, or body).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Renders an error followed by its causes, separated by `": "`.
fn with_causes(error: &(dyn StdError + Send + Sync + 'static)) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        // Some wrappers repeat their cause verbatim
        if !text.ends_with(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
