//! Application layer services implementing business logic.
//!
//! Services open a request-scoped repository, run the operation and commit
//! staged writes. Handlers call services and never touch repositories.
//!
//! # Available Services
//!
//! - [`services::author_service::AuthorService`] - Author listing, lookup and creation
//! - [`services::course_service::CourseService`] - Courses of a single author

pub mod services;
