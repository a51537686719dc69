//! Lowering a [`RequestConfig`] into a transport-level [`HttpRequest`].

use base64::prelude::*;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue};
use http::{HeaderMap, Method};
use serde_json::Value;

use crate::transport::{HttpRequest, TransportError};

use super::{Credentials, RequestConfig};

impl RequestConfig {
    /// Builds the transport request for this configuration.
    ///
    /// # Errors
    ///
    /// - [`TransportError::InvalidUrl`] if the URL does not parse or its
    ///   host is missing or has an empty label
    /// - [`TransportError::InvalidRequest`] if the method, a header, or the
    ///   credentials cannot be encoded
    pub fn to_http_request(&self) -> Result<HttpRequest, TransportError> {
        let mut url =
            url::Url::parse(&self.url).map_err(|e| TransportError::InvalidUrl(e.to_string()))?;
        check_host(&url)?;

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        let mut request = HttpRequest::new(parse_method(&self.method)?, url);
        request.headers = self.header_map()?;

        if let Some(ref body) = self.body {
            request.body = Some(self.encode_body(body)?);
        }

        if self.json {
            if !request.headers.contains_key(CONTENT_TYPE) && request.body.is_some() {
                request.headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            if !request.headers.contains_key(ACCEPT) {
                request.headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
            }
        }

        if let Some(ref auth) = self.auth {
            request.headers.insert(AUTHORIZATION, authorization(auth)?);
        }

        Ok(request)
    }

    fn header_map(&self) -> Result<HeaderMap, TransportError> {
        let mut headers = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let header_name = name.parse::<HeaderName>().map_err(|e| {
                TransportError::InvalidRequest(format!("header name '{name}': {e}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                TransportError::InvalidRequest(format!("header value for '{name}': {e}"))
            })?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }

    fn encode_body(&self, body: &Value) -> Result<Vec<u8>, TransportError> {
        match body {
            Value::String(text) if !self.json => Ok(text.clone().into_bytes()),
            other => serde_json::to_vec(other)
                .map_err(|e| TransportError::InvalidRequest(format!("body: {e}"))),
        }
    }
}

// The url crate accepts hosts such as ".com" (from "http://///.com"), which
// would only fail later at DNS resolution.
fn check_host(url: &url::Url) -> Result<(), TransportError> {
    match url.host_str() {
        None | Some("") => Err(TransportError::InvalidUrl("missing host".to_string())),
        Some(host) if host.starts_with('.') || host.contains("..") => Err(
            TransportError::InvalidUrl(format!("empty label in host '{host}'")),
        ),
        Some(_) => Ok(()),
    }
}

fn parse_method(method: &str) -> Result<Method, TransportError> {
    method
        .to_ascii_uppercase()
        .parse::<Method>()
        .map_err(|_| TransportError::InvalidRequest(format!("method '{method}'")))
}

fn authorization(auth: &Credentials) -> Result<HeaderValue, TransportError> {
    let value = match auth {
        Credentials::Basic { user, pass } => {
            format!("Basic {}", BASE64_STANDARD.encode(format!("{user}:{pass}")))
        }
        Credentials::Bearer { bearer } => format!("Bearer {bearer}"),
    };

    let mut header = HeaderValue::from_str(&value)
        .map_err(|_| TransportError::InvalidRequest("credentials".to_string()))?;
    header.set_sensitive(true);
    Ok(header)
}
