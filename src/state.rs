//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AuthorService, CourseService};
use crate::config::Environment;
use crate::domain::repositories::RepositoryFactory;

#[derive(Clone)]
pub struct AppState {
    pub author_service: Arc<AuthorService>,
    pub course_service: Arc<CourseService>,
    pub environment: Environment,
    /// Prefix for `Location` headers; `None` yields root-relative paths.
    pub public_base_url: Option<String>,
}

impl AppState {
    /// Wires both services to the same repository factory.
    pub fn new(
        repositories: Arc<dyn RepositoryFactory>,
        environment: Environment,
        public_base_url: Option<String>,
    ) -> Self {
        Self {
            author_service: Arc::new(AuthorService::new(repositories.clone())),
            course_service: Arc::new(CourseService::new(repositories)),
            environment,
            public_base_url,
        }
    }
}
