//! Request extractors that report failures as problem details.
//!
//! Axum's stock extractors answer with plain-text rejections. The wrappers
//! here translate them into [`AppError`] so every input problem leaves the
//! API in the same shape:
//!
//! - unparsable path ids and query strings become `400`
//! - a body without a JSON content type becomes `415`
//! - an unreadable JSON body becomes `400`
//! - a readable body that breaks a rule becomes `422`

use std::collections::HashMap;

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;

use crate::api::validation::ValidateModel;
use crate::error::{AppError, FieldErrors};

/// Error key used when the body as a whole could not be read.
pub const BODY_KEY: &str = "$";

/// Error key used when the query string could not be read.
pub const QUERY_KEY: &str = "queryString";

/// JSON body that has been deserialized and passed [`ValidateModel`].
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + ValidateModel,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let instance = req.uri().path().to_string();

        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::MissingJsonContentType(r) => {
                    AppError::UnsupportedMediaType(r.body_text())
                }
                other => AppError::bad_input(&instance, BODY_KEY, other.body_text()),
            })?;

        let errors = payload.validate_model();
        if !errors.is_empty() {
            tracing::debug!(%instance, ?errors, "payload failed validation");
            return Err(AppError::validation(instance, errors));
        }

        Ok(ValidatedJson(payload))
    }
}

/// Query string deserialized into `T`.
pub struct ResourceQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ResourceQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ResourceQuery(value)),
            Err(rejection) => Err(AppError::bad_input(
                parts.uri.path(),
                QUERY_KEY,
                rejection.body_text(),
            )),
        }
    }
}

/// Parses the named path parameters as UUIDs.
///
/// Every unparsable value is reported, keyed by its parameter name.
async fn path_ids<S: Send + Sync>(
    parts: &mut Parts,
    state: &S,
    names: &[&str],
) -> Result<Vec<Uuid>, AppError> {
    let instance = parts.uri.path().to_string();

    let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
        .await
        .map_err(|rejection| AppError::bad_input(&instance, BODY_KEY, rejection.body_text()))?;

    let mut ids = Vec::with_capacity(names.len());
    let mut errors = FieldErrors::new();

    for name in names {
        let Some(raw) = params.get(*name) else {
            return Err(AppError::internal(
                "Route is missing a path parameter",
                json!({ "parameter": name, "path": instance }),
            ));
        };

        match Uuid::parse_str(raw) {
            Ok(id) => ids.push(id),
            Err(_) => {
                errors
                    .entry((*name).to_string())
                    .or_default()
                    .push(format!("The value '{raw}' is not valid."));
            }
        }
    }

    if errors.is_empty() {
        Ok(ids)
    } else {
        Err(AppError::bad_request(instance, errors))
    }
}

/// `{authorId}` path parameter.
#[derive(Debug, Clone, Copy)]
pub struct AuthorPath {
    pub author_id: Uuid,
}

impl<S: Send + Sync> FromRequestParts<S> for AuthorPath {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ids = path_ids(parts, state, &["authorId"]).await?;
        Ok(AuthorPath { author_id: ids[0] })
    }
}

/// `{authorId}` and `{courseId}` path parameters.
#[derive(Debug, Clone, Copy)]
pub struct CoursePath {
    pub author_id: Uuid,
    pub course_id: Uuid,
}

impl<S: Send + Sync> FromRequestParts<S> for CoursePath {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ids = path_ids(parts, state, &["authorId", "courseId"]).await?;
        Ok(CoursePath {
            author_id: ids[0],
            course_id: ids[1],
        })
    }
}
