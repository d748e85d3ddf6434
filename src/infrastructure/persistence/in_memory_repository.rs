//! In-process implementation of the course library repository.
//!
//! Used when no database is wanted, most notably by the handler tests. The
//! filtering and paging rules mirror [`super::PgCourseLibraryRepository`].

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::staging::{StagedChange, StagingBuffer};
use crate::domain::entities::{Author, AuthorQuery, Course, NewAuthor, NewCourse, PagedList};
use crate::domain::repositories::{CourseLibraryRepository, RepositoryFactory};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Store {
    authors: Vec<Author>,
    courses: Vec<Course>,
}

/// Shared store plus a factory for request-scoped repositories over it.
#[derive(Clone, Default)]
pub struct InMemoryRepositoryFactory {
    store: Arc<RwLock<Store>>,
}

impl InMemoryRepositoryFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepositoryFactory for InMemoryRepositoryFactory {
    fn scope(&self) -> Arc<dyn CourseLibraryRepository> {
        Arc::new(InMemoryCourseLibraryRepository {
            store: self.store.clone(),
            staged: StagingBuffer::new(),
        })
    }
}

/// Repository over an in-process store. Obtain one through
/// [`InMemoryRepositoryFactory`].
pub struct InMemoryCourseLibraryRepository {
    store: Arc<RwLock<Store>>,
    staged: StagingBuffer,
}

fn matches_query(author: &Author, query: &AuthorQuery) -> bool {
    let category_matches = query
        .main_category
        .as_deref()
        .is_none_or(|c| author.main_category.to_lowercase() == c.to_lowercase());

    let search_matches = query.search_query.as_deref().is_none_or(|term| {
        let term = term.to_lowercase();
        author.first_name.to_lowercase().contains(&term)
            || author.last_name.to_lowercase().contains(&term)
    });

    category_matches && search_matches
}

#[async_trait]
impl CourseLibraryRepository for InMemoryCourseLibraryRepository {
    async fn get_authors(&self, query: &AuthorQuery) -> Result<PagedList<Author>, AppError> {
        let store = self.store.read().await;

        let matching: Vec<&Author> = store
            .authors
            .iter()
            .filter(|a| matches_query(a, query))
            .collect();

        let items = matching
            .iter()
            .skip(usize::try_from(query.offset()).unwrap_or(usize::MAX))
            .take(query.page_size as usize)
            .map(|a| (*a).clone())
            .collect();

        Ok(PagedList::new(items, query, matching.len() as i64))
    }

    async fn get_author(&self, author_id: Uuid) -> Result<Option<Author>, AppError> {
        let store = self.store.read().await;
        Ok(store.authors.iter().find(|a| a.id == author_id).cloned())
    }

    async fn author_exists(&self, author_id: Uuid) -> Result<bool, AppError> {
        let store = self.store.read().await;
        Ok(store.authors.iter().any(|a| a.id == author_id))
    }

    async fn get_courses(&self, author_id: Uuid) -> Result<Vec<Course>, AppError> {
        let store = self.store.read().await;
        Ok(store
            .courses
            .iter()
            .filter(|c| c.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn get_course(
        &self,
        author_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<Course>, AppError> {
        let store = self.store.read().await;
        Ok(store
            .courses
            .iter()
            .find(|c| c.author_id == author_id && c.id == course_id)
            .cloned())
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

        let mut store = self.store.write().await;

        // Check the whole batch first so a failing commit writes nothing.
        let mut known: HashSet<Uuid> = store.authors.iter().map(|a| a.id).collect();
        for change in &changes {
            match change {
                StagedChange::Author(a) => {
                    known.insert(a.id);
                }
                StagedChange::Course(c) if !known.contains(&c.author_id) => {
                    return Err(AppError::internal(
                        "Foreign key violation",
                        json!({ "constraint": "courses_author_id_fkey", "author_id": c.author_id }),
                    ));
                }
                StagedChange::Course(_) => {}
            }
        }

        for change in changes {
            match change {
                StagedChange::Author(a) => store.authors.push(a),
                StagedChange::Course(c) => store.courses.push(c),
            }
        }

        Ok(())
    }
}
