//! Response normalization: one request in, one settled outcome out.
//!
//! [`Normalizer`] hands a [`crate::request::RequestConfig`] to an
//! [`crate::transport::HttpClient`] and classifies what comes back:
//!
//! | Condition | Outcome |
//! |---|---|
//! | Transport failure | `Err(RequestError::Transport)` |
//! | Status < 400 | `Ok(Body(parsed body))`, `""` for an empty body |
//! | Status >= 400 | `Err(RequestError::HttpStatus)` |
//! | Any status, resolve-all | `Ok(Full { statusCode, data, body, headers })` |

mod error;
mod normalizer;
mod outcome;

#[cfg(test)]
mod outcome_tests;

pub use error::RequestError;
pub use normalizer::Normalizer;
pub use outcome::{FullResponse, NormalizedOutcome};
