//! Field rules for [`TaskInput`].
//!
//! A failure is reported as `"field: rule"` entries joined with `", "`, in
//! the order the fields are declared, e.g. `"title: required"` or
//! `"title: max, description: max"`.

use validator::{Validate, ValidationError};

use crate::error::TaskError;
use crate::models::TaskInput;

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 255;

/// Fields in declaration order; fixes the order of reported violations.
const FIELD_ORDER: [&str; 2] = ["title", "description"];

pub(crate) fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::new("required"));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ValidationError::new("max"));
    }
    Ok(())
}

/// Only called when a description is present.
pub(crate) fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.is_empty() {
        return Err(ValidationError::new("min"));
    }
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(ValidationError::new("max"));
    }
    Ok(())
}

/// Check `input` against the task field rules.
pub fn validate_task(input: &TaskInput) -> Result<(), TaskError> {
    let errors = match input.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let field_errors = errors.field_errors();
    let message = FIELD_ORDER
        .iter()
        .filter_map(|field| field_errors.get(*field).map(|errs| (field, errs)))
        .flat_map(|(field, errs)| errs.iter().map(move |err| format!("{field}: {}", err.code)))
        .collect::<Vec<_>>()
        .join(", ");

    Err(TaskError::Validation(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(input: &TaskInput) -> String {
        match validate_task(input) {
            Err(TaskError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_input() {
        let input = TaskInput {
            description: Some("two liters".into()),
            ..TaskInput::new("Buy milk")
        };
        assert!(validate_task(&input).is_ok());
    }

    #[test]
    fn test_empty_title_is_required() {
        assert_eq!(message(&TaskInput::new("")), "title: required");
    }

    #[test]
    fn test_title_length_bounds() {
        assert!(validate_task(&TaskInput::new("a".repeat(100))).is_ok());
        assert_eq!(message(&TaskInput::new("a".repeat(101))), "title: max");
    }

    #[test]
    fn test_title_length_counts_chars_not_bytes() {
        assert!(validate_task(&TaskInput::new("é".repeat(100))).is_ok());
    }

    #[test]
    fn test_description_length_bounds() {
        let ok = TaskInput {
            description: Some("d".repeat(255)),
            ..TaskInput::new("t")
        };
        let too_long = TaskInput {
            description: Some("d".repeat(256)),
            ..TaskInput::new("t")
        };
        let empty = TaskInput {
            description: Some(String::new()),
            ..TaskInput::new("t")
        };

        assert!(validate_task(&ok).is_ok());
        assert_eq!(message(&too_long), "description: max");
        assert_eq!(message(&empty), "description: min");
    }

    #[test]
    fn test_multiple_violations_follow_field_order() {
        let input = TaskInput {
            description: Some("d".repeat(300)),
            ..TaskInput::new("")
        };
        assert_eq!(message(&input), "title: required, description: max");
    }
}
