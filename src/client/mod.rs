//! API Client
//!
//! `ApiClient` dispatches requests to the backend and folds every outcome
//! into an [`ApiResponse`]. It never returns `Err` and never panics on a
//! failed call; transport failures, error statuses and undecodable bodies all
//! become `ApiResponse::error`.

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::auth::{self, SessionStore};
use crate::config::ClientConfig;
use crate::error::{ClientError, FetchError};
use crate::http::headers::request_headers;
use crate::http::interceptor::{HttpInterceptor, RequestContext};
use crate::types::{ApiResponse, RequestOptions};

pub mod decode;
mod verbs;

/// Typed client for the backend API
#[derive(Clone)]
pub struct ApiClient {
    /// HTTP client for making requests
    http_client: reqwest::Client,
    /// Resolved configuration
    config: ClientConfig,
    /// Persisted session storage, when the host provides one
    session_store: Option<Arc<dyn SessionStore>>,
    /// Interceptors applied to every request
    http_interceptors: Vec<Arc<dyn HttpInterceptor>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("session_key", &self.config.session_key)
            .field("has_session_store", &self.session_store.is_some())
            .field("interceptors", &self.http_interceptors.len())
            .finish()
    }
}

impl ApiClient {
    /// Create a client with the given configuration and no session store.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        Self::builder().config(config).build()
    }

    /// Create a client configured from the environment (`API_URL`).
    pub fn from_env() -> Result<Self, ClientError> {
        Self::builder().build()
    }

    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Authorization headers for the current session entry.
    pub fn auth_headers(&self) -> HeaderMap {
        auth::auth_headers(self.session_store.as_deref(), &self.config.session_key)
    }

    /// Send a request to `endpoint` and decode a JSON response as `T`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResponse<T> {
        let ctx = RequestContext {
            method: options.effective_method(),
            url: self.config.url_for(endpoint),
        };
        match self.execute(&ctx, options).await {
            Ok(Some(data)) => ApiResponse::success(data),
            Ok(None) => ApiResponse::empty(),
            Err(e) => self.fail(&ctx, e),
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        options: RequestOptions,
    ) -> Result<Option<T>, FetchError> {
        let headers = request_headers(&self.auth_headers(), &options.headers)?;
        let mut builder = self
            .http_client
            .request(ctx.method.clone(), ctx.url.as_str())
            .headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }
        for it in &self.http_interceptors {
            builder = it.on_before_send(ctx, builder)?;
        }

        let response = builder
            .send()
            .await
            .map_err(|e| FetchError::transport(e.to_string()))?;
        for it in &self.http_interceptors {
            it.on_response(ctx, &response)?;
        }

        decode::read_response(response).await
    }

    fn fail<T>(&self, ctx: &RequestContext, error: FetchError) -> ApiResponse<T> {
        for it in &self.http_interceptors {
            it.on_error(ctx, &error);
        }
        error.into()
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ClientConfig>,
    http_client: Option<reqwest::Client>,
    session_store: Option<Arc<dyn SessionStore>>,
    http_interceptors: Vec<Arc<dyn HttpInterceptor>>,
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit configuration instead of the environment.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a pre-built `reqwest::Client`; the configured user agent is then
    /// not applied.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Read session entries from `store`.
    pub fn session_store<S: SessionStore + 'static>(mut self, store: S) -> Self {
        self.session_store = Some(Arc::new(store));
        self
    }

    /// Read session entries from a shared store.
    pub fn shared_session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    pub fn with_http_interceptor(mut self, interceptor: Arc<dyn HttpInterceptor>) -> Self {
        self.http_interceptors.push(interceptor);
        self
    }

    /// Validate the configuration and build the client.
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let config = self.config.unwrap_or_else(ClientConfig::from_env);
        reqwest::Url::parse(&config.base_url).map_err(|e| {
            ClientError::Configuration(format!("Invalid base URL '{}': {e}", config.base_url))
        })?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(ua) = &config.user_agent {
                    builder = builder.user_agent(ua.as_str());
                }
                builder.build()?
            }
        };

        tracing::debug!(target: "api_fetch::http", base_url=%config.base_url, "api client ready");
        Ok(ApiClient {
            http_client,
            config,
            session_store: self.session_store,
            http_interceptors: self.http_interceptors,
        })
    }
}
