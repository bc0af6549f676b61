//! HTTP request models
//!
//! These types are HTTP-layer only: optional string fields, relaxed
//! validation. Actual validation happens in the handlers.

pub mod request;

pub use request::ReviewRequest;
