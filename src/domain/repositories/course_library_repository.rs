//! Repository trait for authors and courses.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Author, AuthorQuery, Course, NewAuthor, NewCourse, PagedList};
use crate::error::AppError;

/// Data access boundary for the course library.
///
/// Writes follow the unit-of-work pattern: `add_*` methods only stage records
/// and assign their identifiers, [`save`](Self::save) commits everything
/// staged so far in one transaction. An instance is meant to live for a
/// single request; see [`RepositoryFactory`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCourseLibraryRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryCourseLibraryRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseLibraryRepository: Send + Sync {
    /// Lists authors in insertion order, filtered and paged by `query`.
    ///
    /// `main_category` matches case-insensitively on the whole value.
    /// `search_query` matches case-insensitively anywhere in the first or
    /// last name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_authors(&self, query: &AuthorQuery) -> Result<PagedList<Author>, AppError>;

    /// Finds an author by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Author))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_author(&self, author_id: Uuid) -> Result<Option<Author>, AppError>;

    /// Returns true if an author with this id has been saved.
    async fn author_exists(&self, author_id: Uuid) -> Result<bool, AppError>;

    /// Lists the courses of one author in insertion order.
    async fn get_courses(&self, author_id: Uuid) -> Result<Vec<Course>, AppError>;

    /// Finds a course by id, scoped to its author.
    async fn get_course(&self, author_id: Uuid, course_id: Uuid)
    -> Result<Option<Course>, AppError>;

    /// Stages a new author and its nested courses, assigning fresh ids.
    ///
    /// Nothing is written until [`save`](Self::save) is called.
    fn add_author(&self, author: NewAuthor) -> Author;

    /// Stages a new course for an existing author, assigning a fresh id.
    fn add_course(&self, author_id: Uuid, course: NewCourse) -> Course;

    /// Commits all staged records atomically.
    ///
    /// Staged records are consumed whether or not the commit succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the commit fails (for example a
    /// constraint violation). Nothing staged is written in that case.
    async fn save(&self) -> Result<(), AppError>;
}

/// Produces one repository per request.
pub trait RepositoryFactory: Send + Sync {
    fn scope(&self) -> Arc<dyn CourseLibraryRepository>;
}
