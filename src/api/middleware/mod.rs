//! HTTP middleware for request processing.
//!
//! Provides fault handling and observability middleware.

pub mod fault;
pub mod tracing;
