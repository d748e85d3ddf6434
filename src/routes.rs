//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/authors/*` - Authors and their courses, see [`crate::api::routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Fault handling** - Hides `500` details outside development mode
//! - **Panic catching** - Handler panics become `500` responses
//!
//! Trailing slashes are trimmed by [`crate::server`] before routing.

use crate::api;
use crate::api::middleware::{fault, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower_http::catch_panic::CatchPanicLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
pub fn app_router(state: AppState) -> Router {
    api::routes::api_routes()
        .with_state(state.clone())
        .layer(CatchPanicLayer::custom(fault::handle_panic))
        .layer(middleware::from_fn_with_state(state, fault::layer))
        .layer(tracing::layer())
}
