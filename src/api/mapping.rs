//! Conversions between entities and DTOs.
//!
//! Each DTO pair has one explicit function; every field rule is spelled out.

use chrono::NaiveDate;
use serde_json::json;

use crate::api::dto::{AuthorDto, AuthorForCreationDto, CourseDto, CourseForCreationDto};
use crate::domain::entities::{Author, Course, NewAuthor, NewCourse};
use crate::error::AppError;
use crate::utils::age::current_age;

/// Projects an author for clients.
///
/// - `name`: first name immediately followed by last name, no separator
/// - `age`: whole years on `today`
pub fn to_author_dto(author: &Author, today: NaiveDate) -> AuthorDto {
    AuthorDto {
        id: author.id,
        name: format!("{}{}", author.first_name, author.last_name),
        age: current_age(author.date_of_birth, today),
        main_category: author.main_category.clone(),
    }
}

pub fn to_course_dto(course: &Course) -> CourseDto {
    CourseDto {
        id: course.id,
        title: course.title.clone(),
        description: course.description.clone(),
        author_id: course.author_id,
    }
}

fn missing(field: &str) -> AppError {
    AppError::internal(
        "Payload was mapped before validation",
        json!({ "field": field }),
    )
}

/// Maps a validated creation payload to a new author with its courses.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if a required field is absent, which means
/// the payload skipped validation.
pub fn to_new_author(dto: AuthorForCreationDto) -> Result<NewAuthor, AppError> {
    Ok(NewAuthor {
        first_name: dto.first_name.ok_or_else(|| missing("firstName"))?,
        last_name: dto.last_name.ok_or_else(|| missing("lastName"))?,
        date_of_birth: dto.date_of_birth.ok_or_else(|| missing("dateOfBirth"))?,
        main_category: dto.main_category.ok_or_else(|| missing("mainCategory"))?,
        courses: dto
            .courses
            .into_iter()
            .map(to_new_course)
            .collect::<Result<_, _>>()?,
    })
}

/// Maps a validated creation payload to a new course.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the title is absent.
pub fn to_new_course(dto: CourseForCreationDto) -> Result<NewCourse, AppError> {
    Ok(NewCourse {
        title: dto.title.ok_or_else(|| missing("title"))?,
        description: dto.description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn author(first: &str, last: &str, born: NaiveDate) -> Author {
        Author::new(
            Uuid::new_v4(),
            first.to_string(),
            last.to_string(),
            born,
            "History".to_string(),
        )
    }

    #[test]
    fn test_name_is_concatenated_without_separator() {
        let dto = to_author_dto(
            &author("Jane", "Austen", date(1775, 12, 16)),
            date(2024, 1, 1),
        );
        assert_eq!(dto.name, "JaneAusten");
    }

    #[test]
    fn test_age_respects_birthday() {
        let a = author("Ada", "Lovelace", date(2000, 6, 15));

        assert_eq!(to_author_dto(&a, date(2024, 6, 14)).age, 23);
        assert_eq!(to_author_dto(&a, date(2024, 6, 15)).age, 24);
    }

    #[test]
    fn test_direct_fields_are_copied() {
        let a = author("Ada", "Lovelace", date(1815, 12, 10));
        let dto = to_author_dto(&a, date(2024, 1, 1));

        assert_eq!(dto.id, a.id);
        assert_eq!(dto.main_category, "History");
    }

    #[test]
    fn test_course_dto() {
        let course = Course {
            id: Uuid::new_v4(),
            title: "Maps".to_string(),
            description: None,
            author_id: Uuid::new_v4(),
        };

        let dto = to_course_dto(&course);
        assert_eq!(dto.id, course.id);
        assert_eq!(dto.author_id, course.author_id);
        assert_eq!(dto.title, "Maps");
        assert!(dto.description.is_none());
    }

    #[test]
    fn test_new_author_from_payload() {
        let dto = AuthorForCreationDto {
            first_name: Some("Jane".to_string()),
            last_name: Some("Austen".to_string()),
            date_of_birth: Some(date(1775, 12, 16)),
            main_category: Some("Romance".to_string()),
            courses: vec![CourseForCreationDto {
                title: Some("Irony".to_string()),
                description: Some("A close reading".to_string()),
            }],
        };

        let new_author = to_new_author(dto).unwrap();
        assert_eq!(new_author.first_name, "Jane");
        assert_eq!(new_author.date_of_birth, date(1775, 12, 16));
        assert_eq!(new_author.courses.len(), 1);
        assert_eq!(new_author.courses[0].title, "Irony");
    }

    #[test]
    fn test_unvalidated_payload_is_rejected() {
        let result = to_new_author(AuthorForCreationDto::default());
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }
}
