//! Request execution for the command-line client.

use thiserror::Error;

use yarp::config::ValidatedConfig;
use yarp::normalize::{NormalizedOutcome, Normalizer, RequestError};
use yarp::transport::{HttpClient, ReqwestClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The request did not settle successfully.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The outcome could not be rendered.
    #[error("Failed to render response: {0}")]
    Render(#[source] serde_json::Error),
}

impl RunError {
    /// Renders the status and body of a rejected response, if any.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the body cannot be rendered.
    pub fn details(&self) -> Result<Option<String>, serde_json::Error> {
        let Self::Request(RequestError::HttpStatus {
            status_code, data, ..
        }) = self
        else {
            return Ok(None);
        };

        let details = serde_json::json!({ "statusCode": status_code, "data": data });
        serde_json::to_string_pretty(&details).map(Some)
    }
}

/// Sends the configured request and returns the outcome as pretty JSON.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the request fails, or
/// the outcome cannot be rendered.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<String, RunError> {
    let client = ReqwestClient::from_settings(&config.client).map_err(RunError::ClientBuild)?;
    send(&Normalizer::new(client), config).await
}

async fn send<H: HttpClient>(
    normalizer: &Normalizer<H>,
    config: ValidatedConfig,
) -> Result<String, RunError> {
    let outcome = normalizer
        .normalize(config.request, config.resolve_all)
        .await?;

    if let NormalizedOutcome::Full(ref full) = outcome {
        tracing::info!("Resolved with status {}", full.status_code);
    }

    render(&outcome)
}

fn render(outcome: &NormalizedOutcome) -> Result<String, RunError> {
    match outcome {
        // Plain text bodies print as-is rather than as a quoted JSON string
        NormalizedOutcome::Body(serde_json::Value::String(text)) => Ok(text.clone()),
        other => serde_json::to_string_pretty(other).map_err(RunError::Render),
    }
}
