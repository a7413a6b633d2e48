//! HTTP Headers Utility
//!
//! Builds the effective header set of a request. Layers are applied in order,
//! each overriding the previous on a name clash:
//! JSON content type, then auth headers, then caller headers.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

use crate::defaults;
use crate::error::FetchError;

/// HTTP header builder for API requests
#[derive(Debug, Default)]
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    /// Create a new header builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add JSON content type
    pub fn with_json_content_type(mut self) -> Self {
        self.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(defaults::http::JSON_CONTENT_TYPE),
        );
        self
    }

    /// Overlay an already-validated header map (e.g. auth headers)
    pub fn with_headers(mut self, headers: &HeaderMap) -> Self {
        for (name, value) in headers {
            self.headers.insert(name.clone(), value.clone());
        }
        self
    }

    /// Overlay caller-supplied headers
    pub fn with_custom_headers(
        mut self,
        custom_headers: &HashMap<String, String>,
    ) -> Result<Self, FetchError> {
        apply_extra_headers(&mut self.headers, custom_headers)?;
        Ok(self)
    }

    /// Build the final HeaderMap
    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

/// Effective headers for one request.
///
/// Fails when a caller header is not a valid header name or value; the
/// request must then not be sent.
pub fn request_headers(
    auth: &HeaderMap,
    caller: &HashMap<String, String>,
) -> Result<HeaderMap, FetchError> {
    Ok(HttpHeaderBuilder::new()
        .with_json_content_type()
        .with_headers(auth)
        .with_custom_headers(caller)?
        .build())
}

/// Apply extra headers to a mutable HeaderMap.
///
/// Extra headers override base headers with the same (case-insensitive) name.
/// The header value is left out of the error message since it may carry a
/// credential.
pub fn apply_extra_headers(
    base: &mut HeaderMap,
    extra: &HashMap<String, String>,
) -> Result<(), FetchError> {
    for (k, v) in extra {
        let name = HeaderName::from_bytes(k.as_bytes()).map_err(|e| {
            FetchError::InvalidHeader(format!("Invalid header name '{k}': {e}"))
        })?;
        let value = HeaderValue::from_str(v).map_err(|e| {
            FetchError::InvalidHeader(format!("Invalid header value for '{k}': {e}"))
        })?;
        base.insert(name, value);
    }
    Ok(())
}
