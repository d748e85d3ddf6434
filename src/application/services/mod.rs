//! Business logic services for the application layer.

pub mod author_service;
pub mod course_service;

pub use author_service::AuthorService;
pub use course_service::CourseService;
