//! Production HTTP client implementation using reqwest.

use std::time::Duration;

use super::{HttpClient, HttpRequest, HttpResponse, TransportError};

/// Tunables applied when building the underlying `reqwest::Client`.
///
/// Timeouts live here rather than in the normalizer: the normalizer never
/// cancels an exchange on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSettings {
    /// Total time allowed for a request, if any.
    pub timeout: Option<Duration>,
    /// Time allowed to establish a connection, if any.
    pub connect_timeout: Option<Duration>,
    /// Value for the `User-Agent` header.
    pub user_agent: Option<String>,
}

/// Production HTTP client using reqwest.
///
/// A thin wrapper around `reqwest::Client` that implements [`HttpClient`].
/// It inherits reqwest's connection pooling.
///
/// # Example
///
/// ```no_run
/// use yarp::transport::{HttpClient, HttpRequest, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://api.example.com/items")?;
/// let response = client.request(HttpRequest::get(url)).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates an HTTP client from an existing reqwest client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }

    /// Creates an HTTP client with the given settings applied.
    ///
    /// # Errors
    ///
    /// Returns the reqwest error if the client cannot be built (for example,
    /// when the TLS backend fails to initialize).
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(ref user_agent) = settings.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        Ok(Self::from_client(builder.build()?))
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

fn map_send_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_builder() {
        TransportError::InvalidRequest(e.to_string())
    } else {
        TransportError::Connection(Box::new(e))
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_send_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_send_error)?.to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}
