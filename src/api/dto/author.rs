//! DTOs for authors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::course::CourseForCreationDto;
use crate::api::validation::{self, ValidateModel};
use crate::error::FieldErrors;

/// Author representation returned to clients.
///
/// `name` and `age` are computed from the stored names and date of birth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub main_category: String,
}

/// Request body for creating an author, optionally with initial courses.
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "Jane",
///   "lastName": "Austen",
///   "dateOfBirth": "1775-12-16",
///   "mainCategory": "Romance",
///   "courses": [{ "title": "Irony", "description": "A close reading" }]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthorForCreationDto {
    #[validate(
        required(message = "The firstName field is required."),
        length(
            max = 50,
            message = "The field firstName must be a string with a maximum length of 50."
        )
    )]
    pub first_name: Option<String>,

    #[validate(
        required(message = "The lastName field is required."),
        length(
            max = 50,
            message = "The field lastName must be a string with a maximum length of 50."
        )
    )]
    pub last_name: Option<String>,

    /// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[serde(
        default,
        deserialize_with = "crate::utils::dates::optional_date::deserialize"
    )]
    #[validate(required(message = "The dateOfBirth field is required."))]
    pub date_of_birth: Option<NaiveDate>,

    #[validate(
        required(message = "The mainCategory field is required."),
        length(
            max = 50,
            message = "The field mainCategory must be a string with a maximum length of 50."
        )
    )]
    pub main_category: Option<String>,

    #[serde(default)]
    pub courses: Vec<CourseForCreationDto>,
}

impl ValidateModel for AuthorForCreationDto {
    fn validate_model(&self) -> FieldErrors {
        let mut errors = validation::collect_field_errors(self.validate());

        validation::extend(
            &mut errors,
            [
                validation::blank_as_missing("firstName", self.first_name.as_deref()),
                validation::blank_as_missing("lastName", self.last_name.as_deref()),
                validation::blank_as_missing("mainCategory", self.main_category.as_deref()),
            ]
            .into_iter()
            .flatten(),
        );

        for (i, course) in self.courses.iter().enumerate() {
            validation::extend_nested(
                &mut errors,
                &format!("courses[{i}]"),
                course.validate_model(),
            );
        }

        errors
    }
}
