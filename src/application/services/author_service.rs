//! Author listing, lookup and creation.

use crate::domain::entities::{Author, AuthorQuery, NewAuthor, PagedList};
use crate::domain::repositories::RepositoryFactory;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Service for reading and creating authors.
///
/// Every operation opens its own repository scope, so staged writes never
/// leak between requests.
pub struct AuthorService {
    repositories: Arc<dyn RepositoryFactory>,
}

impl AuthorService {
    /// Creates a new author service.
    pub fn new(repositories: Arc<dyn RepositoryFactory>) -> Self {
        Self { repositories }
    }

    /// Lists one page of authors matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_authors(&self, query: &AuthorQuery) -> Result<PagedList<Author>, AppError> {
        self.repositories.scope().get_authors(query).await
    }

    /// Retrieves an author by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_author(&self, author_id: Uuid) -> Result<Author, AppError> {
        self.repositories
            .scope()
            .get_author(author_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Author not found", json!({ "authorId": author_id }))
            })
    }

    /// Creates an author together with its nested courses in one commit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the commit fails; nothing is written
    /// in that case.
    pub async fn create_author(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let course_count = new_author.courses.len();

        let repository = self.repositories.scope();
        let author = repository.add_author(new_author);
        repository.save().await?;

        tracing::info!(
            author_id = %author.id,
            courses = course_count,
            "Author created"
        );

        Ok(author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::testing::MockScope;
    use crate::domain::entities::{NewCourse, paging::MAX_PAGE_SIZE};
    use crate::domain::repositories::MockCourseLibraryRepository;
    use chrono::NaiveDate;

    fn create_test_author(id: Uuid) -> Author {
        Author::new(
            id,
            "Jane".to_string(),
            "Austen".to_string(),
            NaiveDate::from_ymd_opt(1775, 12, 16).unwrap(),
            "Romance".to_string(),
        )
    }

    fn new_author(courses: usize) -> NewAuthor {
        NewAuthor {
            first_name: "Jane".to_string(),
            last_name: "Austen".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1775, 12, 16).unwrap(),
            main_category: "Romance".to_string(),
            courses: (0..courses)
                .map(|i| NewCourse {
                    title: format!("Course {i}"),
                    description: None,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_list_authors_passes_query() {
        let mut mock_repo = MockCourseLibraryRepository::new();

        mock_repo
            .expect_get_authors()
            .withf(|q| {
                q.main_category.as_deref() == Some("Romance") && q.page_size == MAX_PAGE_SIZE
            })
            .times(1)
            .returning(|q| {
                let authors = vec![create_test_author(Uuid::new_v4())];
                Ok(PagedList::new(authors, q, 1))
            });

        let service = AuthorService::new(MockScope::factory(mock_repo));
        let query = AuthorQuery::new(Some("Romance".to_string()), None, None, Some(50));

        let page = service.list_authors(&query).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_count, 1);
    }

    #[tokio::test]
    async fn test_get_author_success() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockCourseLibraryRepository::new();

        mock_repo
            .expect_get_author()
            .withf(move |author_id| *author_id == id)
            .times(1)
            .returning(move |author_id| Ok(Some(create_test_author(author_id))));

        let service = AuthorService::new(MockScope::factory(mock_repo));

        let author = service.get_author(id).await.unwrap();
        assert_eq!(author.id, id);
    }

    #[tokio::test]
    async fn test_get_author_not_found() {
        let mut mock_repo = MockCourseLibraryRepository::new();

        mock_repo
            .expect_get_author()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthorService::new(MockScope::factory(mock_repo));

        let result = service.get_author(Uuid::new_v4()).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_author_stages_then_saves() {
        let mut mock_repo = MockCourseLibraryRepository::new();
        let mut seq = mockall::Sequence::new();

        mock_repo
            .expect_add_author()
            .withf(|a| a.courses.len() == 2)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| create_test_author(Uuid::new_v4()));

        mock_repo
            .expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        let service = AuthorService::new(MockScope::factory(mock_repo));

        let author = service.create_author(new_author(2)).await.unwrap();
        assert_eq!(author.first_name, "Jane");
    }

    #[tokio::test]
    async fn test_create_author_save_failure() {
        let mut mock_repo = MockCourseLibraryRepository::new();

        mock_repo
            .expect_add_author()
            .times(1)
            .returning(|_| create_test_author(Uuid::new_v4()));

        mock_repo
            .expect_save()
            .times(1)
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let service = AuthorService::new(MockScope::factory(mock_repo));

        let result = service.create_author(new_author(0)).await;
        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
