//! Field validation for new contacts
//!
//! Rules are checked in a fixed order and the first failure is reported:
//! name before number, and within a field emptiness, then length, then
//! the character pattern.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

pub const NAME_MIN_LEN: usize = 2;
pub const NUMBER_MIN_LEN: usize = 6;
pub const NUMBER_MAX_LEN: usize = 10;

/// Letters from any script, single apostrophes, dashes or spaces between them
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}+(['\- ]?[\p{L} ])*$").unwrap());

/// Optional leading `+`, digit groups separated by spaces, dashes or dots,
/// with an optional parenthesised area code
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\+?[0-9]{1,4}[-.\s]?\(?[0-9]{1,3}\)?[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,9}$",
    )
    .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Number,
}

impl Field {
    fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Number => "number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    Required,
    TooShort { min: usize },
    TooLong { max: usize },
    InvalidCharacters,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(.field, .kind))]
pub struct ValidationError {
    pub field: Field,
    pub kind: ValidationKind,
}

impl ValidationError {
    pub fn new(field: Field, kind: ValidationKind) -> Self {
        Self { field, kind }
    }

    pub fn message(&self) -> String {
        describe(&self.field, &self.kind)
    }
}

fn describe(field: &Field, kind: &ValidationKind) -> String {
    match (*field, *kind) {
        (Field::Name, ValidationKind::Required) => "Name is required".to_string(),
        (Field::Number, ValidationKind::Required) => "Number is required".to_string(),
        (field, ValidationKind::TooShort { min }) => {
            format!("{} must be at least {} characters", field, min)
        }
        (field, ValidationKind::TooLong { max }) => {
            format!("{} must be at most {} characters", field, max)
        }
        (Field::Name, ValidationKind::InvalidCharacters) => {
            "name may contain only letters, apostrophe, dash and spaces".to_string()
        }
        (Field::Number, ValidationKind::InvalidCharacters) => {
            "number must be digits and can contain spaces, dashes, parentheses and can start with +"
                .to_string()
        }
    }
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new(Field::Name, ValidationKind::Required));
    }
    if name.chars().count() < NAME_MIN_LEN {
        return Err(ValidationError::new(
            Field::Name,
            ValidationKind::TooShort { min: NAME_MIN_LEN },
        ));
    }
    if !NAME_PATTERN.is_match(name) {
        return Err(ValidationError::new(
            Field::Name,
            ValidationKind::InvalidCharacters,
        ));
    }
    Ok(())
}

pub fn validate_number(number: &str) -> Result<(), ValidationError> {
    if number.is_empty() {
        return Err(ValidationError::new(
            Field::Number,
            ValidationKind::Required,
        ));
    }
    let len = number.chars().count();
    if len < NUMBER_MIN_LEN {
        return Err(ValidationError::new(
            Field::Number,
            ValidationKind::TooShort {
                min: NUMBER_MIN_LEN,
            },
        ));
    }
    if len > NUMBER_MAX_LEN {
        return Err(ValidationError::new(
            Field::Number,
            ValidationKind::TooLong {
                max: NUMBER_MAX_LEN,
            },
        ));
    }
    if !NUMBER_PATTERN.is_match(number) {
        return Err(ValidationError::new(
            Field::Number,
            ValidationKind::InvalidCharacters,
        ));
    }
    Ok(())
}

/// Validate both draft fields, reporting the first failure
pub fn validate_contact(name: &str, number: &str) -> Result<(), ValidationError> {
    validate_name(name)?;
    validate_number(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_typical_names() {
        for name in [
            "Adrian",
            "Jacob Mercer",
            "Charles de Batz de Castelmore d'Artagnan",
            "Mary-Jane",
            "Jo",
            "Анна Каренина",
            "José Müller",
        ] {
            assert!(validate_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_rejects_bad_names() {
        assert_eq!(
            validate_name("").unwrap_err().kind,
            ValidationKind::Required
        );
        assert_eq!(
            validate_name("A").unwrap_err().kind,
            ValidationKind::TooShort { min: 2 }
        );
        assert_eq!(
            validate_name("R2D2").unwrap_err().kind,
            ValidationKind::InvalidCharacters
        );
        assert_eq!(
            validate_name("'Quoted").unwrap_err().kind,
            ValidationKind::InvalidCharacters
        );
        assert_eq!(
            validate_name("Double--dash").unwrap_err().kind,
            ValidationKind::InvalidCharacters
        );
    }

    #[test]
    fn test_single_cyrillic_letter_is_too_short() {
        // Length counts characters, not bytes
        let err = validate_name("Я").unwrap_err();
        assert_eq!(err.kind, ValidationKind::TooShort { min: 2 });
    }

    #[test]
    fn test_accepts_typical_numbers() {
        for number in [
            "459-12-56",
            "123-45-67",
            "000-00-00",
            "+380671234",
            "+1(44)1234",
            "12 34 56",
            "123456",
            "1234567890",
        ] {
            assert!(validate_number(number).is_ok(), "{number} should be valid");
        }
    }

    #[test]
    fn test_number_length_bounds() {
        assert_eq!(
            validate_number("12345").unwrap_err().kind,
            ValidationKind::TooShort { min: 6 }
        );
        assert_eq!(
            validate_number("12345678901").unwrap_err().kind,
            ValidationKind::TooLong { max: 10 }
        );
        assert_eq!(
            validate_number("").unwrap_err().kind,
            ValidationKind::Required
        );
    }

    #[test]
    fn test_number_rejects_letters() {
        let err = validate_number("12-ab-34").unwrap_err();
        assert_eq!(err.field, Field::Number);
        assert_eq!(err.kind, ValidationKind::InvalidCharacters);
    }

    #[test]
    fn test_name_is_checked_before_number() {
        let err = validate_contact("X", "1").unwrap_err();
        assert_eq!(err.field, Field::Name);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            validate_name("").unwrap_err().to_string(),
            "Name is required"
        );
        assert_eq!(
            validate_name("A").unwrap_err().to_string(),
            "name must be at least 2 characters"
        );
        assert_eq!(
            validate_number("12345678901").unwrap_err().to_string(),
            "number must be at most 10 characters"
        );
    }

    #[test]
    fn test_is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(validate_number("").unwrap_err());
        assert_eq!(err.to_string(), "Number is required");
        assert!(err.source().is_none());
    }
}
