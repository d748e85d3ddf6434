//! DTOs for courses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::validation::{self, FieldError, ValidateModel};
use crate::error::FieldErrors;

/// Error key used for rules that concern the course payload as a whole.
pub const COURSE_MODEL_KEY: &str = "CourseForCreationDto";

/// Course representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub author_id: Uuid,
}

/// Request body for creating a course.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CourseForCreationDto {
    #[validate(
        required(message = "The title field is required."),
        length(
            max = 100,
            message = "The field title must be a string with a maximum length of 100."
        )
    )]
    pub title: Option<String>,

    #[validate(length(
        max = 1500,
        message = "The field description must be a string with a maximum length of 1500."
    ))]
    pub description: Option<String>,
}

impl CourseForCreationDto {
    /// Rules involving more than one field.
    ///
    /// The description must differ from the title (exact, case-sensitive
    /// comparison) when both are given.
    pub fn cross_field_errors(&self) -> Vec<FieldError> {
        let mut failures = Vec::new();

        if let (Some(title), Some(description)) = (&self.title, &self.description)
            && title == description
        {
            failures.push(FieldError::new(
                COURSE_MODEL_KEY,
                "The provided description should be different from the title.",
            ));
        }

        failures
    }
}

impl ValidateModel for CourseForCreationDto {
    fn validate_model(&self) -> FieldErrors {
        let mut errors = validation::collect_field_errors(self.validate());
        validation::extend(
            &mut errors,
            validation::blank_as_missing("title", self.title.as_deref()),
        );
        // Whole-object rules only run once every field rule holds.
        if errors.is_empty() {
            validation::extend(&mut errors, self.cross_field_errors());
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(title: Option<&str>, description: Option<&str>) -> CourseForCreationDto {
        CourseForCreationDto {
            title: title.map(String::from),
            description: description.map(String::from),
        }
    }

    #[test]
    fn test_valid_course() {
        assert!(
            course(Some("Rum"), Some("All about rum"))
                .validate_model()
                .is_empty()
        );
        assert!(course(Some("Rum"), None).validate_model().is_empty());
    }

    #[test]
    fn test_title_equal_to_description_is_rejected() {
        let errors = course(Some("Rum"), Some("Rum")).validate_model();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[COURSE_MODEL_KEY],
            vec!["The provided description should be different from the title."]
        );
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        assert!(course(Some("Rum"), Some("rum")).validate_model().is_empty());
    }

    #[test]
    fn test_blank_title_equal_to_description_reports_title_only() {
        let errors = course(Some(""), Some("")).validate_model();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors["title"], vec!["The title field is required."]);
    }

    #[test]
    fn test_long_title_equal_to_description_reports_title_only() {
        let long = "t".repeat(101);
        let errors = course(Some(&long), Some(&long)).validate_model();

        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("title"));
    }

    #[test]
    fn test_missing_title() {
        let errors = course(None, Some("Something")).validate_model();
        assert_eq!(errors["title"], vec!["The title field is required."]);
        assert!(!errors.contains_key(COURSE_MODEL_KEY));
    }

    #[test]
    fn test_blank_title() {
        let errors = course(Some("  "), None).validate_model();
        assert_eq!(errors["title"], vec!["The title field is required."]);
    }

    #[test]
    fn test_length_limits() {
        let long_title = "t".repeat(101);
        let errors = course(Some(&long_title), None).validate_model();
        assert!(errors.contains_key("title"));

        let long_description = "d".repeat(1501);
        let errors = course(Some("Rum"), Some(&long_description)).validate_model();
        assert!(errors.contains_key("description"));

        let exact = "t".repeat(100);
        assert!(course(Some(&exact), None).validate_model().is_empty());
    }

    #[test]
    fn test_deserializes_camel_case() {
        let dto: CourseForCreationDto =
            serde_json::from_str(r#"{"title":"Maps","description":"Charting"}"#).unwrap();
        assert_eq!(dto.title.as_deref(), Some("Maps"));
        assert_eq!(dto.description.as_deref(), Some("Charting"));
    }
}
