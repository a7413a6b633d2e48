//! The `{ data, error }` result envelope.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Uniform result of every client call.
///
/// - failure: `error` is set, `data` is `None`
/// - success with a JSON body: `data` is set, `error` is `None`
/// - success without a JSON body: both are `None`
///
/// `data` is an `Option` by contract: a successful call is not guaranteed to
/// carry a body, and callers must handle `None` rather than assume a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful call carrying a decoded body.
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    /// Successful call without a JSON body.
    pub fn empty() -> Self {
        Self {
            data: None,
            error: None,
        }
    }

    /// Failed call.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// Map the payload, keeping the error untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        ApiResponse {
            data: self.data.map(f),
            error: self.error,
        }
    }

    /// Convert into a `Result` for `?`-style handling.
    pub fn into_result(self) -> Result<Option<T>, String> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.data),
        }
    }
}

impl<T> From<FetchError> for ApiResponse<T> {
    fn from(err: FetchError) -> Self {
        Self::failure(err.to_string())
    }
}
