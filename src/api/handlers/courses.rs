//! Handlers for the courses of an author.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::{CourseDto, CourseForCreationDto};
use crate::api::extract::{AuthorPath, CoursePath, ValidatedJson};
use crate::api::mapping::{to_course_dto, to_new_course};
use crate::api::negotiation::{AcceptedFormat, Negotiated};
use crate::api::routes::{GET_COURSE_FOR_AUTHOR_ROUTE, url_for};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all courses of an author.
///
/// # Endpoint
///
/// `GET /api/authors/{authorId}/courses`
///
/// # Errors
///
/// Returns 404 Not Found if the author does not exist.
pub async fn get_courses_handler(
    AcceptedFormat(format): AcceptedFormat,
    State(state): State<AppState>,
    AuthorPath { author_id }: AuthorPath,
) -> Result<Negotiated<Vec<CourseDto>>, AppError> {
    let courses = state.course_service.list_courses(author_id).await?;

    Ok(Negotiated(
        format,
        courses.iter().map(to_course_dto).collect(),
    ))
}

/// Retrieves one course of an author.
///
/// # Endpoint
///
/// `GET /api/authors/{authorId}/courses/{courseId}`
///
/// # Errors
///
/// Returns 404 Not Found if the author or the course does not exist.
pub async fn get_course_handler(
    AcceptedFormat(format): AcceptedFormat,
    State(state): State<AppState>,
    CoursePath {
        author_id,
        course_id,
    }: CoursePath,
) -> Result<Negotiated<CourseDto>, AppError> {
    let course = state
        .course_service
        .get_course(author_id, course_id)
        .await?;

    Ok(Negotiated(format, to_course_dto(&course)))
}

/// Creates a course for an author.
///
/// # Endpoint
///
/// `POST /api/authors/{authorId}/courses`
///
/// # Request Body
///
/// ```json
/// { "title": "Irony", "description": "A close reading" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the author does not exist.
/// Returns 422 Unprocessable Entity if the title is missing, too long, or
/// equal to the description.
pub async fn create_course_handler(
    AcceptedFormat(format): AcceptedFormat,
    State(state): State<AppState>,
    AuthorPath { author_id }: AuthorPath,
    ValidatedJson(payload): ValidatedJson<CourseForCreationDto>,
) -> Result<impl IntoResponse, AppError> {
    let course = state
        .course_service
        .create_course(author_id, to_new_course(payload)?)
        .await?;

    let location = url_for(
        state.public_base_url.as_deref(),
        GET_COURSE_FOR_AUTHOR_ROUTE,
        &[("authorId", author_id), ("courseId", course.id)],
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Negotiated(format, to_course_dto(&course)),
    ))
}
