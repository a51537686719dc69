//! Caller-facing request configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::defaults;

/// Authentication credentials attached to a request.
///
/// Serialized untagged, so basic credentials look like
/// `{"user": .., "pass": ..}` and bearer tokens like `{"bearer": ..}`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Credentials {
    /// HTTP basic authentication.
    Basic {
        /// User name
        user: String,
        /// Password
        pass: String,
    },
    /// Bearer token authentication.
    Bearer {
        /// The token sent after `Bearer `
        bearer: String,
    },
}

impl Credentials {
    /// Creates basic credentials.
    #[must_use]
    pub fn basic(user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self::Basic {
            user: user.into(),
            pass: pass.into(),
        }
    }

    /// Creates bearer credentials.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            bearer: token.into(),
        }
    }
}

// Secrets stay out of `{:?}` output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic { user, .. } => f
                .debug_struct("Basic")
                .field("user", user)
                .field("pass", &"<redacted>")
                .finish(),
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("bearer", &"<redacted>")
                .finish(),
        }
    }
}

/// What to request and how.
///
/// The URL is kept as the caller wrote it. It is only parsed when the
/// request is dispatched, so a malformed URL surfaces as a transport
/// failure rather than at construction time.
///
/// A bare URL converts into a GET request:
///
/// ```
/// use yarp::request::RequestConfig;
///
/// let config = RequestConfig::from("http://example.com/api/test");
/// assert_eq!(config.method, "get");
/// assert_eq!(config, RequestConfig::new("get", "http://example.com/api/test"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestConfig {
    /// HTTP method, case-insensitive
    #[serde(default = "default_method")]
    pub method: String,

    /// Target URL
    pub url: String,

    /// Request headers
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,

    /// Query parameters appended to the URL
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub query: BTreeMap<String, String>,

    /// Request payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,

    /// Send the body as JSON and ask for JSON back
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub json: bool,

    /// Authentication credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Credentials>,
}

fn default_method() -> String {
    defaults::METHOD.to_string()
}

impl RequestConfig {
    /// Creates a request with the given method and URL and nothing else.
    #[must_use]
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: BTreeMap::new(),
            query: BTreeMap::new(),
            body: None,
            json: false,
            auth: None,
        }
    }

    /// Creates a GET request to the given URL.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(defaults::METHOD, url)
    }

    /// Sets a header, replacing any earlier value for the same name.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets a query parameter.
    #[must_use]
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Sets the request payload.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Enables or disables JSON mode.
    #[must_use]
    pub const fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Attaches credentials.
    #[must_use]
    pub fn with_auth(mut self, auth: Credentials) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Returns a copy with credentials removed.
    ///
    /// `self` is left untouched.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            auth: None,
            ..self.clone()
        }
    }

    /// Describes the request as JSON, with credentials removed.
    ///
    /// This is the form embedded in every diagnostic message.
    #[must_use]
    pub fn describe(&self) -> String {
        serde_json::to_string(&self.redacted())
            .unwrap_or_else(|_| format!("{} {}", self.method, self.url))
    }
}

impl From<&str> for RequestConfig {
    fn from(url: &str) -> Self {
        Self::get(url)
    }
}

impl From<String> for RequestConfig {
    fn from(url: String) -> Self {
        Self::get(url)
    }
}

impl From<&RequestConfig> for RequestConfig {
    fn from(config: &RequestConfig) -> Self {
        config.clone()
    }
}
