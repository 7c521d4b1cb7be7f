//! Listing field validation

use thiserror::Error;

/// Errors that can occur during listing validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ListingValidationError {
    #[error("Field '{field}' exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },
}

const MAX_SHORT_FIELD_LENGTH: usize = 255;
const MAX_TEXT_FIELD_LENGTH: usize = 4000;

/// Validate the length of a listing field.
///
/// `discount` and `review` are free text; every other field is a short label.
pub fn validate_field_length(field: &'static str, value: &str) -> Result<(), ListingValidationError> {
    let max = match field {
        "discount" | "review" => MAX_TEXT_FIELD_LENGTH,
        _ => MAX_SHORT_FIELD_LENGTH,
    };

    if value.chars().count() > max {
        return Err(ListingValidationError::TooLong { field, max });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_fields() {
        assert!(validate_field_length("city", "Philadelphia").is_ok());
        assert!(validate_field_length("city", &"c".repeat(255)).is_ok());
        assert_eq!(
            validate_field_length("city", &"c".repeat(256)),
            Err(ListingValidationError::TooLong {
                field: "city",
                max: 255
            })
        );
    }

    #[test]
    fn test_text_fields() {
        assert!(validate_field_length("discount", &"d".repeat(4000)).is_ok());
        assert!(validate_field_length("review", &"r".repeat(4001)).is_err());
    }

    #[test]
    fn test_error_message_names_field() {
        let err = validate_field_length("zip", &"1".repeat(300)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Field 'zip' exceeds maximum length of 255 characters"
        );
    }
}
