//! Error handling types for api-fetch.
//!
//! - `ClientError`: failures while constructing a client
//! - `FetchError`: failures of a single call, folded into `ApiResponse` before
//!   they reach the caller

mod conversions;
pub mod types;

pub use types::*;
