//! Fault handling for unexpected errors and panics.

use std::any::Any;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Body sent for every `500` outside development mode.
pub const FAULT_MESSAGE: &str = "An unexpected fault happened. Try again later";

/// Hides internal fault details from clients outside development mode.
///
/// Any `500 Internal Server Error` produced further down the stack (an
/// [`AppError::Internal`] or a caught panic) has its body replaced with
/// [`FAULT_MESSAGE`]. The original detail has already been logged.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .merge(api_routes())
///     .layer(CatchPanicLayer::custom(fault::handle_panic))
///     .layer(middleware::from_fn_with_state(state.clone(), fault::layer));
/// ```
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    let response = next.run(req).await;

    if response.status() != StatusCode::INTERNAL_SERVER_ERROR || st.environment.is_development()
    {
        return response;
    }

    (StatusCode::INTERNAL_SERVER_ERROR, FAULT_MESSAGE).into_response()
}

/// Turns a handler panic into an internal error response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let reason = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::internal("Handler panicked", json!({ "reason": reason })).into_response()
}
