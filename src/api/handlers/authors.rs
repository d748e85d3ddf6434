//! Handlers for the authors resource.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;
use serde_json::json;

use crate::api::dto::pagination::PAGINATION_HEADER;
use crate::api::dto::{
    AuthorDto, AuthorForCreationDto, AuthorsResourceParameters, PaginationMetadata,
};
use crate::api::extract::{AuthorPath, ResourceQuery, ValidatedJson};
use crate::api::mapping::{to_author_dto, to_new_author};
use crate::api::negotiation::{AcceptedFormat, Negotiated};
use crate::api::routes::{AUTHORS_ALLOW, GET_AUTHOR_ROUTE, url_for};
use crate::domain::entities::AuthorQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Lists authors, optionally filtered, one page at a time.
///
/// # Endpoint
///
/// `GET /api/authors` (also answers `HEAD`)
///
/// # Query Parameters
///
/// - `mainCategory` - Exact category, case-insensitive
/// - `searchQuery` - Substring of first or last name, case-insensitive
/// - `pageNumber` - Page to return (default: 1)
/// - `pageSize` - Items per page (default: 10, max: 20)
///
/// # Response Headers
///
/// ```text
/// X-Pagination: {"totalCount":42,"pageSize":10,"currentPage":1,"totalPages":5,
///                "previousPageLink":null,"nextPageLink":"/api/authors?pageNumber=2&pageSize=10"}
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the query string cannot be parsed.
pub async fn get_authors_handler(
    AcceptedFormat(format): AcceptedFormat,
    State(state): State<AppState>,
    ResourceQuery(params): ResourceQuery<AuthorsResourceParameters>,
) -> Result<impl IntoResponse, AppError> {
    let query = AuthorQuery::from(params);
    let page = state.author_service.list_authors(&query).await?;

    let metadata =
        PaginationMetadata::for_authors(&page, &query, state.public_base_url.as_deref());
    let metadata = serde_json::to_string(&metadata).map_err(|e| {
        AppError::internal(
            "Failed to serialize pagination metadata",
            json!({ "reason": e.to_string() }),
        )
    })?;

    let today = Utc::now().date_naive();
    let authors: Vec<AuthorDto> = page
        .items
        .iter()
        .map(|author| to_author_dto(author, today))
        .collect();

    Ok(([(PAGINATION_HEADER, metadata)], Negotiated(format, authors)))
}

/// Retrieves one author.
///
/// # Endpoint
///
/// `GET /api/authors/{authorId}`
///
/// # Errors
///
/// Returns 400 Bad Request if `authorId` is not a UUID.
/// Returns 404 Not Found with an empty body if the author does not exist.
pub async fn get_author_handler(
    AcceptedFormat(format): AcceptedFormat,
    State(state): State<AppState>,
    AuthorPath { author_id }: AuthorPath,
) -> Result<Negotiated<AuthorDto>, AppError> {
    let author = state.author_service.get_author(author_id).await?;

    Ok(Negotiated(
        format,
        to_author_dto(&author, Utc::now().date_naive()),
    ))
}

/// Creates an author, optionally with initial courses.
///
/// # Endpoint
///
/// `POST /api/authors`
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "Jane",
///   "lastName": "Austen",
///   "dateOfBirth": "1775-12-16",
///   "mainCategory": "Romance",
///   "courses": [{ "title": "Irony", "description": "A close reading" }]
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the new author and a `Location` header pointing at
/// `GET /api/authors/{authorId}`.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not readable JSON.
/// Returns 415 Unsupported Media Type if the body is not declared as JSON.
/// Returns 422 Unprocessable Entity if a validation rule fails.
pub async fn create_author_handler(
    AcceptedFormat(format): AcceptedFormat,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AuthorForCreationDto>,
) -> Result<impl IntoResponse, AppError> {
    let author = state
        .author_service
        .create_author(to_new_author(payload)?)
        .await?;

    let location = url_for(
        state.public_base_url.as_deref(),
        GET_AUTHOR_ROUTE,
        &[("authorId", author.id)],
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Negotiated(format, to_author_dto(&author, Utc::now().date_naive())),
    ))
}

/// Lists the methods supported on the authors collection.
///
/// # Endpoint
///
/// `OPTIONS /api/authors`
pub async fn authors_options_handler() -> impl IntoResponse {
    (StatusCode::OK, [(header::ALLOW, AUTHORS_ALLOW)])
}
