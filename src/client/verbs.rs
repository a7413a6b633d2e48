//! Method helpers over [`ApiClient::fetch`].
//!
//! Each helper fixes the HTTP method, overriding any method set in the
//! options. `post`, `put` and `patch` serialize `body` to JSON when it is
//! `Some` and send no body otherwise. `delete` passes a body already set in
//! the options through unchanged; `get` never sends one.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::ApiClient;
use crate::error::FetchError;
use crate::http::interceptor::RequestContext;
use crate::types::{ApiResponse, RequestOptions};

impl ApiClient {
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: Option<RequestOptions>,
    ) -> ApiResponse<T> {
        let mut options = with_method(Method::GET, options);
        options.body = None;
        self.fetch(endpoint, options).await
    }

    pub async fn post<T, B>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        options: Option<RequestOptions>,
    ) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::POST, endpoint, body, options).await
    }

    pub async fn put<T, B>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        options: Option<RequestOptions>,
    ) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::PUT, endpoint, body, options).await
    }

    pub async fn patch<T, B>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        options: Option<RequestOptions>,
    ) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::PATCH, endpoint, body, options).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: Option<RequestOptions>,
    ) -> ApiResponse<T> {
        self.fetch(endpoint, with_method(Method::DELETE, options)).await
    }

    async fn send_json<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        options: Option<RequestOptions>,
    ) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = match body.map(serde_json::to_string).transpose() {
            Ok(body) => body,
            Err(e) => {
                let ctx = RequestContext {
                    method,
                    url: self.config.url_for(endpoint),
                };
                return self.fail(&ctx, FetchError::Serialize(e.to_string()));
            }
        };
        let mut options = with_method(method, options);
        options.body = body;
        self.fetch(endpoint, options).await
    }
}

fn with_method(method: Method, options: Option<RequestOptions>) -> RequestOptions {
    let mut options = options.unwrap_or_default();
    options.method = Some(method);
    options
}
