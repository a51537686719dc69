//! Request configuration as supplied by callers.
//!
//! A [`RequestConfig`] is plain caller-owned data. It is serialized into
//! diagnostics with its [`Credentials`] stripped, and lowered into a
//! [`crate::transport::HttpRequest`] only when dispatched.

mod config;
mod lower;

#[cfg(test)]
mod config_tests;

pub use config::{Credentials, RequestConfig};
