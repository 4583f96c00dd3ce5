//! HTTP middleware for request processing.
//!
//! Provides the fault boundary, security headers and observability middleware.

pub mod error_boundary;
pub mod security;
pub mod tracing;
