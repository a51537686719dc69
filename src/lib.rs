//! yarp: a small async HTTP request helper.
//!
//! Hands a request to an HTTP client and settles the result into exactly one
//! outcome. Bodies are JSON-decoded when possible, statuses of 400 and above
//! become errors (unless every response is requested), and failures carry
//! the attempted request with credentials removed.
//!
//! ```no_run
//! # async fn example() -> Result<(), yarp::RequestError> {
//! // A bare URL is a GET; the outcome is the parsed body.
//! let outcome = yarp::send("https://api.example.com/items", false).await?;
//! println!("{}", outcome.data());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod json;
pub mod normalize;
pub mod request;
pub mod transport;

pub use normalize::{FullResponse, NormalizedOutcome, Normalizer, RequestError};
pub use request::{Credentials, RequestConfig};

/// Sends one request with a default [`transport::ReqwestClient`].
///
/// Builds a fresh client per call; reuse a [`Normalizer`] to share a
/// connection pool across requests.
///
/// # Errors
///
/// See [`Normalizer::normalize`].
pub async fn send(
    config: impl Into<RequestConfig>,
    resolve_all: bool,
) -> Result<NormalizedOutcome, RequestError> {
    Normalizer::new(transport::ReqwestClient::new())
        .normalize(config, resolve_all)
        .await
}
