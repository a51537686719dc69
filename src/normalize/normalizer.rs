//! The request normalizer.

use crate::json::parse_body;
use crate::request::RequestConfig;
use crate::transport::{HttpClient, HttpResponse, ReqwestClient, TransportError};

use super::{FullResponse, NormalizedOutcome, RequestError};

/// Highest status code that still counts as success in status-based mode.
const LAST_SUCCESS_STATUS: u16 = 399;

/// Sends requests through an [`HttpClient`] and settles each one into a
/// single success or failure.
///
/// The normalizer holds no state besides the client, so one instance can
/// serve any number of concurrent calls. It never retries, times out, or
/// cancels an exchange; those concerns belong to the client.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use yarp::normalize::Normalizer;
///
/// # async fn example() -> Result<(), yarp::normalize::RequestError> {
/// let normalizer: Normalizer = Normalizer::default();
///
/// // Status-based: the parsed body, or an error for status >= 400
/// let data = normalizer.fetch("https://api.example.com/items").await?;
///
/// // Resolve-all: status, parsed body, raw body and headers for any status
/// let full = normalizer.fetch_all("https://api.example.com/items").await?;
/// println!("{} -> {}", full.status_code, data);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Normalizer<H = ReqwestClient> {
    client: H,
}

impl<H> Normalizer<H> {
    /// Creates a normalizer over the given client.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self { client }
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }
}

impl<H: HttpClient> Normalizer<H> {
    /// Performs one request and settles it.
    ///
    /// With `resolve_all` unset, statuses up to 399 yield the parsed body
    /// and 400 or above yield [`RequestError::HttpStatus`]. With it set,
    /// every completed exchange yields [`NormalizedOutcome::Full`].
    ///
    /// # Errors
    ///
    /// - [`RequestError::Transport`] if the exchange does not complete, in
    ///   either mode
    /// - [`RequestError::HttpStatus`] for status >= 400 when `resolve_all`
    ///   is false
    pub async fn normalize(
        &self,
        config: impl Into<RequestConfig>,
        resolve_all: bool,
    ) -> Result<NormalizedOutcome, RequestError> {
        let config = config.into();
        let response = self.exchange(&config).await?;

        if resolve_all {
            return Ok(NormalizedOutcome::Full(FullResponse::from(response)));
        }

        settle_by_status(&response, config).map(NormalizedOutcome::Body)
    }

    /// Performs one request in status-based mode and returns the parsed body.
    ///
    /// # Errors
    ///
    /// See [`Normalizer::normalize`].
    pub async fn fetch(
        &self,
        config: impl Into<RequestConfig>,
    ) -> Result<serde_json::Value, RequestError> {
        self.normalize(config, false)
            .await
            .map(NormalizedOutcome::into_data)
    }

    /// Performs one request in resolve-all mode.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Transport`] if the exchange does not complete.
    pub async fn fetch_all(
        &self,
        config: impl Into<RequestConfig>,
    ) -> Result<FullResponse, RequestError> {
        let config = config.into();
        let response = self.exchange(&config).await?;
        Ok(FullResponse::from(response))
    }

    async fn exchange(&self, config: &RequestConfig) -> Result<HttpResponse, RequestError> {
        let request = config
            .to_http_request()
            .map_err(|e| fail_transport(e, config))?;

        tracing::debug!("Dispatching {} {}", request.method, config.describe());

        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| fail_transport(e, config))?;

        tracing::debug!(
            "Completed with status {} ({} byte body)",
            response.status.as_u16(),
            response.body.len()
        );

        Ok(response)
    }
}

fn fail_transport(error: TransportError, config: &RequestConfig) -> RequestError {
    let error = RequestError::transport(error, config);
    tracing::warn!("Request failed: {error}");
    error
}

fn settle_by_status(
    response: &HttpResponse,
    config: RequestConfig,
) -> Result<serde_json::Value, RequestError> {
    let status = response.status.as_u16();
    let data = parse_body(&response.body);

    if status <= LAST_SUCCESS_STATUS {
        return Ok(data);
    }

    let error = RequestError::http_status(status, data, config);
    tracing::debug!("Rejected with status {status}: {error}");
    Err(error)
}
