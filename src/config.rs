//! Client configuration types.
//!
//! `ClientConfig` is resolved once and handed to the client at construction
//! time; nothing is read from the process environment per request.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root address prepended to every endpoint path
    pub base_url: String,
    /// Storage key of the persisted session record
    pub session_key: String,
    /// User agent
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Returns a builder for constructing `ClientConfig`
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Resolve the configuration from the process environment.
    ///
    /// Reads the base address from `API_URL`, falling back to
    /// `http://localhost:8000` when the variable is unset or empty.
    pub fn from_env() -> Self {
        let value = std::env::var(defaults::backend::BASE_URL_ENV).ok();
        Self {
            base_url: Self::resolve_base_url(value.as_deref()),
            ..Self::default()
        }
    }

    /// Base address resolution rule used by [`ClientConfig::from_env`].
    pub fn resolve_base_url(value: Option<&str>) -> String {
        match value {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => defaults::backend::BASE_URL.to_string(),
        }
    }

    /// Full address for an endpoint path.
    ///
    /// The endpoint is appended verbatim; callers pass paths such as `/todos`.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::backend::BASE_URL.to_string(),
            session_key: defaults::session::STORAGE_KEY.to_string(),
            user_agent: Some(defaults::http::USER_AGENT.to_string()),
        }
    }
}

/// Builder for `ClientConfig`
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    session_key: Option<String>,
    user_agent: Option<Option<String>>,
}

impl ClientConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root address prepended to every endpoint path
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the storage key of the session record
    pub fn session_key<S: Into<String>>(mut self, key: S) -> Self {
        self.session_key = Some(key.into());
        self
    }

    /// Set the user agent; `None` sends reqwest's default
    pub fn user_agent<S: Into<String>>(mut self, user_agent: Option<S>) -> Self {
        self.user_agent = Some(user_agent.map(|s| s.into()));
        self
    }

    /// Build the configuration
    pub fn build(self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            session_key: self.session_key.unwrap_or(defaults.session_key),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
        }
    }
}
