//! Transport layer: the boundary to the HTTP client that performs the exchange.
//!
//! This module provides:
//! - Transport-level requests ([`HttpRequest`])
//! - Fully buffered responses ([`HttpResponse`])
//! - The client abstraction ([`HttpClient`])
//! - Production client implementation ([`ReqwestClient`], [`ClientSettings`])
//! - Transport failures ([`TransportError`])
//!
//! Nothing here classifies responses by status code. That is the job of
//! [`crate::normalize`].

mod client;
mod error;
mod http;

#[cfg(test)]
mod client_tests;

pub use client::{ClientSettings, ReqwestClient};
pub use error::TransportError;
pub use http::{HttpClient, HttpRequest, HttpResponse};
