//! Courses of a single author.

use crate::domain::entities::{Course, NewCourse};
use crate::domain::repositories::{CourseLibraryRepository, RepositoryFactory};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Service for reading and creating the courses of an author.
///
/// All operations answer [`AppError::NotFound`] when the author is unknown,
/// before looking at any course.
pub struct CourseService {
    repositories: Arc<dyn RepositoryFactory>,
}

async fn ensure_author(
    repository: &dyn CourseLibraryRepository,
    author_id: Uuid,
) -> Result<(), AppError> {
    if repository.author_exists(author_id).await? {
        Ok(())
    } else {
        Err(AppError::not_found(
            "Author not found",
            json!({ "authorId": author_id }),
        ))
    }
}

impl CourseService {
    pub fn new(repositories: Arc<dyn RepositoryFactory>) -> Self {
        Self { repositories }
    }

    /// Lists the courses of an author in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_courses(&self, author_id: Uuid) -> Result<Vec<Course>, AppError> {
        let repository = self.repositories.scope();
        ensure_author(repository.as_ref(), author_id).await?;

        repository.get_courses(author_id).await
    }

    /// Retrieves one course of an author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author or the course does not
    /// exist, or the course belongs to another author.
    pub async fn get_course(&self, author_id: Uuid, course_id: Uuid) -> Result<Course, AppError> {
        let repository = self.repositories.scope();
        ensure_author(repository.as_ref(), author_id).await?;

        repository
            .get_course(author_id, course_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Course not found",
                    json!({ "authorId": author_id, "courseId": course_id }),
                )
            })
    }

    /// Creates a course for an existing author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Internal`] if the commit fails.
    pub async fn create_course(
        &self,
        author_id: Uuid,
        new_course: NewCourse,
    ) -> Result<Course, AppError> {
        let repository = self.repositories.scope();
        ensure_author(repository.as_ref(), author_id).await?;

        let course = repository.add_course(author_id, new_course);
        repository.save().await?;

        tracing::info!(
            author_id = %author_id,
            course_id = %course.id,
            "Course created"
        );

        Ok(course)
    }
}
