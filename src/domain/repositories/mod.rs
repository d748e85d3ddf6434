//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Testing
//!
//! See `tests/repository_course_library.rs` for the PostgreSQL implementation
//! and `tests/handler_*.rs` for the in-memory one.

pub mod course_library_repository;

pub use course_library_repository::{CourseLibraryRepository, RepositoryFactory};

#[cfg(test)]
pub use course_library_repository::MockCourseLibraryRepository;
