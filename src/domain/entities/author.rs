//! Author entity.

use chrono::NaiveDate;
use uuid::Uuid;

use super::course::NewCourse;

/// A persisted author.
///
/// Courses are owned by the author through [`super::Course::author_id`];
/// removing an author removes its courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub main_category: String,
}

impl Author {
    /// Creates a new Author instance.
    pub fn new(
        id: Uuid,
        first_name: String,
        last_name: String,
        date_of_birth: NaiveDate,
        main_category: String,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            date_of_birth,
            main_category,
        }
    }
}

/// Input data for staging a new author, optionally with its first courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub main_category: String,
    pub courses: Vec<NewCourse>,
}

impl NewAuthor {
    /// Turns the input into an entity carrying the given identifier.
    pub fn into_author(self, id: Uuid) -> (Author, Vec<NewCourse>) {
        let author = Author::new(
            id,
            self.first_name,
            self.last_name,
            self.date_of_birth,
            self.main_category,
        );
        (author, self.courses)
    }
}
