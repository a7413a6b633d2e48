//! HTTP Utilities
//!
//! - Header construction and merging
//! - Request interceptors

pub mod headers;
pub mod interceptor;

pub use headers::*;
pub use interceptor::*;
