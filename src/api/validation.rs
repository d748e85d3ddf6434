//! Model validation for request payloads.
//!
//! Field-level rules (required, maximum length) are declared with
//! `validator` attributes on the DTOs. Rules spanning several fields are
//! plain functions returning [`FieldError`]s. [`ValidateModel`] runs both and
//! produces the map reported in problem details, keyed by wire field names.

use validator::ValidationErrors;

use crate::error::FieldErrors;

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A request payload that can check itself before it is mapped to an entity.
pub trait ValidateModel {
    /// Returns every failed rule, empty when the payload is valid.
    fn validate_model(&self) -> FieldErrors;
}

/// Converts `validator` output into the problem details error map.
pub fn collect_field_errors(result: Result<(), ValidationErrors>) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Err(validation_errors) = result {
        for (field, failures) in validation_errors.field_errors() {
            let key = to_camel_case(&field);
            for failure in failures {
                let message = failure
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("The field {key} is invalid ({}).", failure.code));
                errors.entry(key.clone()).or_default().push(message);
            }
        }
    }

    errors
}

/// Adds the given failures to the map.
pub fn extend(errors: &mut FieldErrors, failures: impl IntoIterator<Item = FieldError>) {
    for failure in failures {
        errors.entry(failure.field).or_default().push(failure.message);
    }
}

/// Merges a nested payload's errors under `prefix`, e.g. `courses[0].title`.
pub fn extend_nested(errors: &mut FieldErrors, prefix: &str, nested: FieldErrors) {
    for (field, messages) in nested {
        errors
            .entry(format!("{prefix}.{field}"))
            .or_default()
            .extend(messages);
    }
}

/// Reports a present but blank value as missing.
///
/// Absent values are left to the `required` attribute.
pub fn blank_as_missing(field: &str, value: Option<&str>) -> Option<FieldError> {
    value
        .filter(|v| v.trim().is_empty())
        .map(|_| FieldError::new(field, format!("The {field} field is required.")))
}

/// `first_name` → `firstName`.
pub fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;

    for c in field.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}
