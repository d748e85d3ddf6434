//! Course entity.

use uuid::Uuid;

/// A persisted course. Every course belongs to exactly one author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub author_id: Uuid,
}

/// Input data for staging a new course.
///
/// The owning author is supplied separately, either by the author being
/// staged alongside it or by the route it was posted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: String,
    pub description: Option<String>,
}

impl NewCourse {
    /// Turns the input into an entity owned by `author_id`.
    pub fn into_course(self, id: Uuid, author_id: Uuid) -> Course {
        Course {
            id,
            title: self.title,
            description: self.description,
            author_id,
        }
    }
}
