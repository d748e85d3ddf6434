//! PostgreSQL implementation of the course library repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use super::staging::{StagedChange, StagingBuffer};
use crate::domain::entities::{Author, AuthorQuery, Course, NewAuthor, NewCourse, PagedList};
use crate::domain::repositories::{CourseLibraryRepository, RepositoryFactory};
use crate::error::AppError;

const AUTHOR_FILTER: &str = r#"
    WHERE ($1::TEXT IS NULL OR lower(main_category) = lower($1))
      AND ($2::TEXT IS NULL OR first_name ILIKE $2 OR last_name ILIKE $2)
"#;

#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    date_of_birth: NaiveDate,
    main_category: String,
}

impl From<AuthorRow> for Author {
    fn from(r: AuthorRow) -> Self {
        Author::new(
            r.id,
            r.first_name,
            r.last_name,
            r.date_of_birth,
            r.main_category,
        )
    }
}

#[derive(sqlx::FromRow)]
struct CourseRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    author_id: Uuid,
}

impl From<CourseRow> for Course {
    fn from(r: CourseRow) -> Self {
        Course {
            id: r.id,
            title: r.title,
            description: r.description,
            author_id: r.author_id,
        }
    }
}

/// PostgreSQL repository for authors and courses.
///
/// Reads go straight to the pool. Writes are buffered until
/// [`CourseLibraryRepository::save`] runs them inside one transaction.
pub struct PgCourseLibraryRepository {
    pool: Arc<PgPool>,
    staged: StagingBuffer,
}

impl PgCourseLibraryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            staged: StagingBuffer::new(),
        }
    }
}

/// Hands out one [`PgCourseLibraryRepository`] per request, all sharing a pool.
#[derive(Clone)]
pub struct PgRepositoryFactory {
    pool: Arc<PgPool>,
}

impl PgRepositoryFactory {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl RepositoryFactory for PgRepositoryFactory {
    fn scope(&self) -> Arc<dyn CourseLibraryRepository> {
        Arc::new(PgCourseLibraryRepository::new(self.pool.clone()))
    }
}

/// Wraps a search term for `ILIKE`, escaping the pattern metacharacters.
fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl CourseLibraryRepository for PgCourseLibraryRepository {
    async fn get_authors(&self, query: &AuthorQuery) -> Result<PagedList<Author>, AppError> {
        let pattern = query.search_query.as_deref().map(contains_pattern);

        let total_count: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM authors {AUTHOR_FILTER}"))
                .bind(query.main_category.as_deref())
                .bind(pattern.as_deref())
                .fetch_one(self.pool.as_ref())
                .await?;

        let rows: Vec<AuthorRow> = sqlx::query_as(&format!(
            r#"
            SELECT id, first_name, last_name, date_of_birth, main_category
            FROM authors
            {AUTHOR_FILTER}
            ORDER BY seq
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(query.main_category.as_deref())
        .bind(pattern.as_deref())
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(PagedList::new(
            rows.into_iter().map(Author::from).collect(),
            query,
            total_count,
        ))
    }

    async fn get_author(&self, author_id: Uuid) -> Result<Option<Author>, AppError> {
        let row: Option<AuthorRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, date_of_birth, main_category
            FROM authors
            WHERE id = $1
            "#,
        )
        .bind(author_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Author::from))
    }

    async fn author_exists(&self, author_id: Uuid) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM authors WHERE id = $1)")
            .bind(author_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(exists)
    }

    async fn get_courses(&self, author_id: Uuid) -> Result<Vec<Course>, AppError> {
        let rows: Vec<CourseRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, author_id
            FROM courses
            WHERE author_id = $1
            ORDER BY seq
            "#,
        )
        .bind(author_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn get_course(
        &self,
        author_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<Course>, AppError> {
        let row: Option<CourseRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, author_id
            FROM courses
            WHERE author_id = $1 AND id = $2
            "#,
        )
        .bind(author_id)
        .bind(course_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Course::from))
    }

    fn add_author(&self, author: NewAuthor) -> Author {
        self.staged.stage_author(author)
    }

    fn add_course(&self, author_id: Uuid, course: NewCourse) -> Course {
        self.staged.stage_course(author_id, course)
    }

    async fn save(&self) -> Result<(), AppError> {
        let changes = self.staged.take();
        if changes.is_empty() {
            return Ok(());
        }

        // Dropping the transaction on an early return rolls it back.
        let mut tx = self.pool.begin().await?;

        for change in &changes {
            match change {
                StagedChange::Author(a) => {
                    sqlx::query(
                        r#"
                        INSERT INTO authors (id, first_name, last_name, date_of_birth, main_category)
                        VALUES ($1, $2, $3, $4, $5)
                        "#,
                    )
                    .bind(a.id)
                    .bind(&a.first_name)
                    .bind(&a.last_name)
                    .bind(a.date_of_birth)
                    .bind(&a.main_category)
                    .execute(&mut *tx)
                    .await?;
                }
                StagedChange::Course(c) => {
                    sqlx::query(
                        r#"
                        INSERT INTO courses (id, title, description, author_id)
                        VALUES ($1, $2, $3, $4)
                        "#,
                    )
                    .bind(c.id)
                    .bind(&c.title)
                    .bind(c.description.as_deref())
                    .bind(c.author_id)
                    .execute(&mut *tx)
                    .await?;
                }
            }
        }

        tx.commit().await?;
        tracing::debug!(records = changes.len(), "Committed staged changes");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_wraps_term() {
        assert_eq!(contains_pattern("rum"), "%rum%");
    }

    #[test]
    fn test_contains_pattern_escapes_metacharacters() {
        assert_eq!(contains_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }
}
