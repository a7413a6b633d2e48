use thiserror::Error;

/// Errors raised while building an [`ApiClient`](crate::ApiClient).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Invalid configuration value (base address, user agent, ...)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The underlying HTTP client could not be created
    #[error("HTTP client error: {0}")]
    Http(String),
}

/// Failure of a single request.
///
/// The `Display` output of each variant is the message surfaced in
/// `ApiResponse::error`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No response was received (connection refused, DNS failure, ...)
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A success body could not be read or decoded as the requested type
    #[error("{0}")]
    Decode(String),

    /// The request body could not be serialized to JSON
    #[error("{0}")]
    Serialize(String),

    /// A caller-supplied header is not a valid header name or value
    #[error("{0}")]
    InvalidHeader(String),

    /// An interceptor refused to send the request
    #[error("{0}")]
    Interceptor(String),
}

impl FetchError {
    /// Build a transport error, substituting the generic message when the
    /// underlying description is empty.
    pub fn transport(description: impl Into<String>) -> Self {
        let description = description.into();
        if description.trim().is_empty() {
            Self::Transport(crate::defaults::http::NETWORK_ERROR_MESSAGE.to_string())
        } else {
            Self::Transport(description)
        }
    }

    /// HTTP status code, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
