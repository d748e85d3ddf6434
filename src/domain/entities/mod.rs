//! Core domain entities representing the course library data model.
//!
//! Entities are plain data structures. Each persisted entity has a separate
//! `New*` struct used when staging a record that has no identifier yet.
//!
//! # Entity Types
//!
//! - [`Author`] - A person who teaches courses
//! - [`Course`] - A course owned by exactly one author
//! - [`AuthorQuery`] / [`PagedList`] - Filtering and paging of author listings

pub mod author;
pub mod course;
pub mod paging;

pub use author::{Author, NewAuthor};
pub use course::{Course, NewCourse};
pub use paging::{AuthorQuery, PagedList};
