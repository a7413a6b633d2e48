//! Session-based authorization headers.
//!
//! The session record is owned and written by an external auth component;
//! this module only reads it from a [`SessionStore`] and turns its token into
//! an `Authorization: Bearer <token>` header.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

pub mod store;

pub use store::{FileSessionStore, MemorySessionStore, SessionStore};

/// Persisted session record.
///
/// Only `token` is interpreted; any other fields written by the auth
/// component are kept opaque.
#[derive(Deserialize)]
pub struct Session {
    #[serde(default)]
    token: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Session {
    /// Decode a stored session entry.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Bearer token, if one is present and non-empty.
    pub fn token(&self) -> Option<SecretString> {
        self.token
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| SecretString::from(t.to_string()))
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("extra", &self.extra)
            .finish()
    }
}

/// Build the authorization headers for the current session.
///
/// Every failure mode yields an empty map: no store, no entry under `key`,
/// an entry that is not a session object, or a missing/empty token. Malformed
/// entries are intentionally treated as "not signed in" rather than reported.
pub fn auth_headers(store: Option<&dyn SessionStore>, key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let Some(store) = store else {
        return headers;
    };
    let Some(raw) = store.get_item(key) else {
        return headers;
    };
    let session = match Session::from_json(&raw) {
        Ok(session) => session,
        Err(e) => {
            tracing::debug!(target: "api_fetch::auth", key=%key, err=%e, "ignoring malformed session entry");
            return headers;
        }
    };
    if let Some(token) = session.token() {
        match HeaderValue::from_str(&format!("Bearer {}", token.expose_secret())) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => {
                tracing::debug!(target: "api_fetch::auth", key=%key, "session token is not a valid header value");
            }
        }
    }
    headers
}
