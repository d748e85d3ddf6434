//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod authors;
pub mod courses;

pub use authors::{
    authors_options_handler, create_author_handler, get_author_handler, get_authors_handler,
};
pub use courses::{create_course_handler, get_course_handler, get_courses_handler};
