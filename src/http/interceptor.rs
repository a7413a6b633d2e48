//! HTTP Interceptor interfaces
//!
//! Interceptors observe each call made through an `ApiClient`: they may
//! adjust the request builder before send, look at the response, and are
//! notified of every failure. Hooks run inline and should stay cheap.

use reqwest::Method;

use crate::error::FetchError;

/// Context passed to interceptors describing the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestContext {
    pub method: Method,
    pub url: String,
}

/// HTTP interceptor trait
pub trait HttpInterceptor: Send + Sync {
    /// Called before sending a request. Return the (possibly modified)
    /// builder, or an error to short-circuit the call.
    fn on_before_send(
        &self,
        _ctx: &RequestContext,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, FetchError> {
        Ok(builder)
    }

    /// Called once a response is received, before its status is interpreted.
    fn on_response(
        &self,
        _ctx: &RequestContext,
        _response: &reqwest::Response,
    ) -> Result<(), FetchError> {
        Ok(())
    }

    /// Called when the call ends in an error envelope.
    fn on_error(&self, _ctx: &RequestContext, _error: &FetchError) {}
}

/// A simple logging interceptor backed by `tracing` (no headers or bodies).
#[derive(Clone, Debug, Default)]
pub struct LoggingInterceptor;

impl HttpInterceptor for LoggingInterceptor {
    fn on_before_send(
        &self,
        ctx: &RequestContext,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, FetchError> {
        tracing::debug!(target: "api_fetch::http", method=%ctx.method, url=%ctx.url, "sending request");
        Ok(builder)
    }

    fn on_response(
        &self,
        ctx: &RequestContext,
        response: &reqwest::Response,
    ) -> Result<(), FetchError> {
        tracing::debug!(target: "api_fetch::http", method=%ctx.method, url=%ctx.url, status=%response.status().as_u16(), "response received");
        Ok(())
    }

    fn on_error(&self, ctx: &RequestContext, error: &FetchError) {
        tracing::debug!(target: "api_fetch::http", method=%ctx.method, url=%ctx.url, status=?error.status(), err=%error, "request error");
    }
}
