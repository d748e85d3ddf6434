//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgCourseLibraryRepository`] - PostgreSQL storage using SQLx
//! - [`InMemoryCourseLibraryRepository`] - In-process store with the same semantics
//!
//! Both stage writes in a [`staging::StagingBuffer`] until `save` is called.

pub mod in_memory_repository;
pub mod pg_course_library_repository;
pub mod staging;

pub use in_memory_repository::{InMemoryCourseLibraryRepository, InMemoryRepositoryFactory};
pub use pg_course_library_repository::{PgCourseLibraryRepository, PgRepositoryFactory};
