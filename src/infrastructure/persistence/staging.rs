//! Unit-of-work staging buffer shared by the repository implementations.

use std::sync::{Mutex, PoisonError};

use uuid::Uuid;

use crate::domain::entities::{Author, Course, NewAuthor, NewCourse};

/// A record waiting for the next commit.
#[derive(Debug, Clone)]
pub enum StagedChange {
    Author(Author),
    Course(Course),
}

/// Records staged by one repository instance, in the order they were added.
///
/// An author is always staged before its nested courses so the commit
/// never violates the course → author foreign key.
#[derive(Debug, Default)]
pub struct StagingBuffer {
    changes: Mutex<Vec<StagedChange>>,
}

impl StagingBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage_author(&self, new_author: NewAuthor) -> Author {
        let author_id = Uuid::new_v4();
        let (author, courses) = new_author.into_author(author_id);

        let mut changes = self.lock();
        changes.push(StagedChange::Author(author.clone()));
        for course in courses {
            changes.push(StagedChange::Course(
                course.into_course(Uuid::new_v4(), author_id),
            ));
        }

        author
    }

    pub fn stage_course(&self, author_id: Uuid, new_course: NewCourse) -> Course {
        let course = new_course.into_course(Uuid::new_v4(), author_id);
        self.lock().push(StagedChange::Course(course.clone()));
        course
    }

    /// Removes and returns everything staged so far.
    pub fn take(&self) -> Vec<StagedChange> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<StagedChange>> {
        self.changes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
