//! Default Configuration Values
//!
//! This module centralizes the default values used throughout the client.

/// Backend address defaults
pub mod backend {
    /// Base address used when no environment value is provided.
    pub const BASE_URL: &str = "http://localhost:8000";

    /// Environment variable holding the backend base address.
    pub const BASE_URL_ENV: &str = "API_URL";
}

/// Session storage defaults
pub mod session {
    /// Storage key under which the auth component persists its session record.
    pub const STORAGE_KEY: &str = "auth_session";

    /// File extension used by the file-backed session store.
    pub const FILE_EXTENSION: &str = "json";
}

/// HTTP client defaults
pub mod http {
    /// Default User-Agent string for outbound requests
    pub const USER_AGENT: &str = concat!("api-fetch/", env!("CARGO_PKG_VERSION"));

    /// Content type attached to every request unless the caller overrides it.
    pub const JSON_CONTENT_TYPE: &str = "application/json";

    /// Message used when a transport failure carries no description.
    pub const NETWORK_ERROR_MESSAGE: &str = "Network error";
}
