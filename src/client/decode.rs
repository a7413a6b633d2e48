//! Response interpretation.
//!
//! Turns a received `reqwest::Response` into either an optional decoded
//! payload or a `FetchError` carrying the message shown to callers.

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::defaults;
use crate::error::FetchError;

/// Error body returned by the backend, e.g. `{"detail": "Todo not found"}`.
///
/// `detail` is usually a string, but request validation failures carry a
/// list of `{ "loc": [...], "msg": "...", "type": "..." }` objects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorBody {
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Decode an error body. Only JSON objects qualify; arrays, scalars and
    /// non-JSON text yield `None`.
    pub fn from_json(body: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(body).ok()? {
            Value::Object(mut map) => Some(Self {
                detail: map.remove("detail"),
            }),
            _ => None,
        }
    }

    /// Human-readable message carried by `detail`, if any.
    pub fn message(&self) -> Option<String> {
        let detail = self.detail.as_ref()?;
        match detail {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Array(items) if items.is_empty() => None,
            Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if msgs.is_empty() {
                    Some(detail.to_string())
                } else {
                    Some(msgs.join("; "))
                }
            }
            other => Some(other.to_string()),
        }
    }
}

/// Message for a non-success response.
///
/// Prefers the server's `detail`; otherwise `HTTP <status>: <reason>`.
pub fn error_message(status: StatusCode, body: &str) -> String {
    ErrorBody::from_json(body)
        .and_then(|b| b.message())
        .unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            )
            .trim_end()
            .to_string()
        })
}

/// Whether the declared content type is JSON.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| {
            ct.to_ascii_lowercase()
                .contains(defaults::http::JSON_CONTENT_TYPE)
        })
        .unwrap_or(false)
}

/// Interpret a received response.
///
/// Success bodies are only read when declared as JSON; anything else is a
/// success without data.
pub async fn read_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Option<T>, FetchError> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(FetchError::Status {
            status: status.as_u16(),
            message: error_message(status, &text),
        });
    }

    if !is_json_content_type(response.headers()) {
        return Ok(None);
    }

    let bytes = response.bytes().await?;
    Ok(Some(serde_json::from_slice(&bytes)?))
}
