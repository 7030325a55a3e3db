//! Field rules for student records. Every function here is pure so the same
//! checks run for the add form, the edit form, and the write paths of the
//! store without any shared state.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::NewStudent;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 50;
pub const MAX_EMAIL_LENGTH: usize = 100;
pub const MIN_COURSE_LENGTH: usize = 2;
pub const MAX_COURSE_LENGTH: usize = 100;
pub const MIN_AGE: i64 = 16;
pub const MAX_AGE: i64 = 100;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// The editable fields of a student record.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Age,
    Course,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Age => "age",
            Field::Course => "course",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid {field}: {message}")]
    InvalidFormat { field: Field, message: String },
    #[error("Invalid {field}: must be between {min} and {max} (got {value}).")]
    OutOfRange {
        field: Field,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl ValidationError {
    /// Field that failed, so forms can move focus back to it.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::InvalidFormat { field, .. } => *field,
            ValidationError::OutOfRange { field, .. } => *field,
        }
    }

    fn invalid(field: Field, message: &str) -> Self {
        ValidationError::InvalidFormat {
            field,
            message: message.to_string(),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Letters, whitespace, hyphens and apostrophes, 2-50 characters.
pub fn validate_name(raw: &str) -> ValidationResult<String> {
    let name = raw.trim();
    let length = name.chars().count();
    let allowed = name
        .chars()
        .all(|ch| ch.is_ascii_alphabetic() || is_name_space(ch) || ch == '-' || ch == '\'');

    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) || !allowed {
        return Err(ValidationError::invalid(
            Field::Name,
            "use only letters, spaces, hyphens, and apostrophes (2-50 characters).",
        ));
    }
    Ok(name.to_string())
}

/// ASCII whitespace plus vertical tab. Unicode spaces such as NBSP are
/// rejected so two names never differ only by an invisible character.
fn is_name_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Check the `local@domain.tld` shape and return the lowercase address.
pub fn validate_email(raw: &str) -> ValidationResult<String> {
    let email = raw.trim();
    if email.chars().count() > MAX_EMAIL_LENGTH || !EMAIL_RE.is_match(email) {
        return Err(ValidationError::invalid(
            Field::Email,
            "enter an address such as user@example.com (at most 100 characters).",
        ));
    }
    Ok(email.to_lowercase())
}

pub fn validate_age(age: i64) -> ValidationResult<i64> {
    if (MIN_AGE..=MAX_AGE).contains(&age) {
        Ok(age)
    } else {
        Err(ValidationError::OutOfRange {
            field: Field::Age,
            value: age,
            min: MIN_AGE,
            max: MAX_AGE,
        })
    }
}

/// Parse raw terminal input before applying the age bounds.
pub fn parse_age(raw: &str) -> ValidationResult<i64> {
    let age = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid(Field::Age, "enter a whole number."))?;
    validate_age(age)
}

pub fn validate_course(raw: &str) -> ValidationResult<String> {
    let course = raw.trim();
    let length = course.chars().count();
    if !(MIN_COURSE_LENGTH..=MAX_COURSE_LENGTH).contains(&length) {
        return Err(ValidationError::invalid(
            Field::Course,
            "use between 2 and 100 characters.",
        ));
    }
    Ok(course.to_string())
}

/// Run every field rule in form order and build a normalized record.
pub fn validate_student(
    name: &str,
    email: &str,
    age: i64,
    course: &str,
) -> ValidationResult<NewStudent> {
    Ok(NewStudent {
        name: validate_name(name)?,
        email: validate_email(email)?,
        age: validate_age(age)?,
        course: validate_course(course)?,
    })
}
