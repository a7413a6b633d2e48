//! # api-fetch
//!
//! A typed fetch wrapper for calling a JSON backend API.
//!
#![deny(unsafe_code)]

//! Every call returns an [`ApiResponse`] (`{ data, error }`) instead of an
//! `Err`: transport failures, error statuses and undecodable bodies are all
//! folded into `error`. Requests carry `Content-Type: application/json` and,
//! when the persisted session holds a token, `Authorization: Bearer <token>`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use api_fetch::prelude::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Deserialize)]
//! struct Todo { id: u64, title: String }
//!
//! #[derive(Serialize)]
//! struct NewTodo<'a> { title: &'a str }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::builder()
//!         .config(ClientConfig::from_env())
//!         .session_store(FileSessionStore::new("/var/lib/app/session"))
//!         .build()?;
//!
//!     let todos = client.get::<Vec<Todo>>("/todos", None).await;
//!     match todos.into_result() {
//!         Ok(list) => println!("{:?}", list.unwrap_or_default()),
//!         Err(message) => eprintln!("failed: {message}"),
//!     }
//!
//!     let created = client
//!         .post::<Todo, _>("/todos", Some(&NewTodo { title: "x" }), None)
//!         .await;
//!     println!("{:?}", created);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod defaults;
pub mod error;
pub mod http;
pub mod types;

pub use auth::{FileSessionStore, MemorySessionStore, Session, SessionStore, auth_headers};
pub use client::{ApiClient, ApiClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{ClientError, FetchError};
pub use http::interceptor::{HttpInterceptor, LoggingInterceptor, RequestContext};
pub use types::{ApiResponse, RequestOptions};

/// Re-export of the HTTP method type used by [`RequestOptions`].
pub use reqwest::Method;

pub mod prelude {
    pub use crate::auth::{FileSessionStore, MemorySessionStore, SessionStore};
    pub use crate::client::ApiClient;
    pub use crate::config::ClientConfig;
    pub use crate::error::{ClientError, FetchError};
    pub use crate::http::interceptor::{HttpInterceptor, LoggingInterceptor};
    pub use crate::types::{ApiResponse, RequestOptions};
    pub use reqwest::Method;
}
