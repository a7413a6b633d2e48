//! Core types shared by the client surface.

pub mod envelope;
pub mod request;

pub use envelope::*;
pub use request::*;
