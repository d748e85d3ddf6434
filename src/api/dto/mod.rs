//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde with camelCase field names and validator for input
//! validation.

pub mod author;
pub mod authors_parameters;
pub mod course;
pub mod pagination;

pub use author::{AuthorDto, AuthorForCreationDto};
pub use authors_parameters::AuthorsResourceParameters;
pub use course::{CourseDto, CourseForCreationDto};
pub use pagination::PaginationMetadata;
