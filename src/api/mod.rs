//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Extractors reporting input problems as problem details
//! - [`handlers`] - HTTP request handlers
//! - [`mapping`] - Entity to DTO conversions
//! - [`middleware`] - Fault handling and tracing middleware
//! - [`negotiation`] - JSON/XML content negotiation
//! - [`routes`] - Route configuration and named route templates
//! - [`validation`] - Model validation for request payloads

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod mapping;
pub mod middleware;
pub mod negotiation;
pub mod routes;
pub mod validation;
