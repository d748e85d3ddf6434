//! Application error type and its HTTP representation.
//!
//! Input problems are reported as RFC 7807 problem details
//! (`application/problem+json`). `404` and `406` carry no body. Internal
//! faults are rendered as JSON here; outside development mode the
//! [`crate::api::middleware::fault`] layer replaces that body with a fixed
//! message.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Field name to the list of messages reported for it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Problem type reported for well-formed input that breaks a validation rule.
pub const VALIDATION_PROBLEM_TYPE: &str = "https://courselibrary.com/modelvalidationproblem";

/// Problem type reported for input that could not be read at all.
pub const INPUT_PROBLEM_TYPE: &str = "https://tools.ietf.org/html/rfc7231#section-6.5.1";

const PROBLEM_DETAIL: &str = "See the errors field for details.";

/// Problem details body for `400` and `422` responses.
#[derive(Debug, Clone, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub instance: String,
    pub errors: FieldErrors,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input was missing or could not be parsed (`400`).
    #[error("one or more errors on input occurred at {instance}")]
    BadRequest { instance: String, errors: FieldErrors },

    /// Input was well formed but broke a validation rule (`422`).
    #[error("one or more validation errors occurred at {instance}")]
    Validation { instance: String, errors: FieldErrors },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("none of the accepted media types can be produced")]
    NotAcceptable,

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(instance: impl Into<String>, errors: FieldErrors) -> Self {
        Self::BadRequest {
            instance: instance.into(),
            errors,
        }
    }

    /// Builds a `400` for a single offending field.
    pub fn bad_input(
        instance: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        Self::bad_request(instance, errors)
    }

    pub fn validation(instance: impl Into<String>, errors: FieldErrors) -> Self {
        Self::Validation {
            instance: instance.into(),
            errors,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn problem_response(
    status: StatusCode,
    kind: &str,
    title: &str,
    instance: String,
    errors: FieldErrors,
) -> Response {
    let body = ProblemDetails {
        kind: kind.to_string(),
        title: title.to_string(),
        status: status.as_u16(),
        detail: PROBLEM_DETAIL.to_string(),
        instance,
        errors,
    };

    (
        status,
        [(header::CONTENT_TYPE, "application/problem+json")],
        Json(body),
    )
        .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::BadRequest { instance, errors } => problem_response(
                status,
                INPUT_PROBLEM_TYPE,
                "One or more errors on input occurred.",
                instance,
                errors,
            ),
            AppError::Validation { instance, errors } => problem_response(
                status,
                VALIDATION_PROBLEM_TYPE,
                "One or more validation errors occurred.",
                instance,
                errors,
            ),
            AppError::NotFound { message, details } => {
                tracing::debug!(%message, %details, "resource not found");
                status.into_response()
            }
            AppError::UnsupportedMediaType(reason) => (status, reason).into_response(),
            AppError::NotAcceptable => status.into_response(),
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "unexpected fault");
                (
                    status,
                    Json(json!({
                        "title": "An unexpected fault happened.",
                        "status": status.as_u16(),
                        "detail": message,
                        "details": details,
                    })),
                )
                    .into_response()
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            return AppError::internal(
                "Database error",
                json!({ "reason": db.message(), "constraint": db.constraint() }),
            );
        }

        AppError::internal("Database error", json!({ "reason": e.to_string() }))
    }
}
