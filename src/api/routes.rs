//! API route configuration.
//!
//! Named route templates double as the source for `Location` headers, so a
//! created resource always points at the route that serves it.

use crate::api::handlers::{
    authors_options_handler, create_author_handler, create_course_handler, get_author_handler,
    get_authors_handler, get_course_handler, get_courses_handler,
};
use crate::domain::entities::AuthorQuery;
use crate::state::AppState;
use axum::{Router, routing::get};
use url::form_urlencoded;
use uuid::Uuid;

/// Authors collection.
pub const AUTHORS_ROUTE: &str = "/api/authors";

/// Route named "GetAuthor".
pub const GET_AUTHOR_ROUTE: &str = "/api/authors/{authorId}";

/// Courses collection of one author.
pub const COURSES_ROUTE: &str = "/api/authors/{authorId}/courses";

/// Route named "GetCourseForAuthor".
pub const GET_COURSE_FOR_AUTHOR_ROUTE: &str = "/api/authors/{authorId}/courses/{courseId}";

/// Methods allowed on [`AUTHORS_ROUTE`].
pub const AUTHORS_ALLOW: &str = "GET,HEAD,OPTIONS,POST";

/// Fills a route template's `{name}` segments and prefixes the public base
/// URL when one is configured.
///
/// # Example
///
/// ```
/// use course_library::api::routes::{GET_AUTHOR_ROUTE, url_for};
/// use uuid::Uuid;
///
/// let url = url_for(None, GET_AUTHOR_ROUTE, &[("authorId", Uuid::nil())]);
/// assert_eq!(url, "/api/authors/00000000-0000-0000-0000-000000000000");
/// ```
pub fn url_for(base_url: Option<&str>, template: &str, params: &[(&str, Uuid)]) -> String {
    let path = params.iter().fold(template.to_string(), |path, (name, id)| {
        path.replace(&format!("{{{name}}}"), &id.to_string())
    });

    match base_url {
        Some(base) => format!("{}{}", base.trim_end_matches('/'), path),
        None => path,
    }
}

/// Link to one page of the authors listing, keeping the filters of `query`.
///
/// # Example
///
/// ```
/// use course_library::api::routes::authors_page_url;
/// use course_library::domain::entities::AuthorQuery;
///
/// let query = AuthorQuery::new(Some("Rum".to_string()), None, Some(2), Some(5));
/// assert_eq!(
///     authors_page_url(None, &query, 3),
///     "/api/authors?mainCategory=Rum&pageNumber=3&pageSize=5"
/// );
/// ```
pub fn authors_page_url(base_url: Option<&str>, query: &AuthorQuery, page_number: u32) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());

    if let Some(category) = &query.main_category {
        params.append_pair("mainCategory", category);
    }
    if let Some(search) = &query.search_query {
        params.append_pair("searchQuery", search);
    }
    params.append_pair("pageNumber", &page_number.to_string());
    params.append_pair("pageSize", &query.page_size.to_string());

    format!(
        "{}?{}",
        url_for(base_url, AUTHORS_ROUTE, &[]),
        params.finish()
    )
}

/// All API routes.
///
/// # Endpoints
///
/// - `GET     /api/authors`                                - List authors (filtered, paged)
/// - `HEAD    /api/authors`                                - Same as GET, headers only
/// - `OPTIONS /api/authors`                                - Allowed methods
/// - `POST    /api/authors`                                - Create an author with courses
/// - `GET     /api/authors/{authorId}`                     - One author
/// - `GET     /api/authors/{authorId}/courses`             - Courses of an author
/// - `POST    /api/authors/{authorId}/courses`             - Create a course
/// - `GET     /api/authors/{authorId}/courses/{courseId}`  - One course
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            AUTHORS_ROUTE,
            get(get_authors_handler)
                .post(create_author_handler)
                .options(authors_options_handler),
        )
        .route(GET_AUTHOR_ROUTE, get(get_author_handler))
        .route(
            COURSES_ROUTE,
            get(get_courses_handler).post(create_course_handler),
        )
        .route(GET_COURSE_FOR_AUTHOR_ROUTE, get(get_course_handler))
}
