//! Domain models that mirror the `students` table. `Student` is a persisted
//! row, `NewStudent` is the same record before the store assigns an id, and
//! `StudentPatch` carries the per-field overrides collected by the edit form.

use std::fmt;

use crate::validation::{
    parse_age, validate_course, validate_email, validate_name, ValidationResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Primary key assigned by the store. Never reused after a delete.
    pub id: i64,
    pub name: String,
    /// Always stored lowercase.
    pub email: String,
    pub age: i64,
    pub course: String,
}

impl Student {
    /// Copy the editable fields, dropping the id.
    pub fn to_new(&self) -> NewStudent {
        NewStudent {
            name: self.name.clone(),
            email: self.email.clone(),
            age: self.age,
            course: self.course.clone(),
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Email: {}, Age: {}, Course: {}",
            self.id, self.name, self.email, self.age, self.course
        )
    }
}

/// A record that has not been persisted yet. Build one through
/// [`crate::validation::validate_student`] so the fields arrive normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub age: i64,
    pub course: String,
}

impl NewStudent {
    /// Attach the id handed out by the store.
    pub fn with_id(self, id: i64) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
            course: self.course,
        }
    }
}

/// Raw overrides for an update. `None` or blank text keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
    pub course: Option<String>,
}

impl StudentPatch {
    /// Merge the overrides into `current`. Retained values are taken as already
    /// valid; every supplied value goes through the same rule as on create.
    pub fn apply(&self, current: &Student) -> ValidationResult<NewStudent> {
        let name = match supplied(&self.name) {
            Some(raw) => validate_name(raw)?,
            None => current.name.clone(),
        };
        let email = match supplied(&self.email) {
            Some(raw) => validate_email(raw)?,
            None => current.email.clone(),
        };
        let age = match supplied(&self.age) {
            Some(raw) => parse_age(raw)?,
            None => current.age,
        };
        let course = match supplied(&self.course) {
            Some(raw) => validate_course(raw)?,
            None => current.course.clone(),
        };

        Ok(NewStudent {
            name,
            email,
            age,
            course,
        })
    }

    pub fn is_empty(&self) -> bool {
        [&self.name, &self.email, &self.age, &self.course]
            .into_iter()
            .all(|value| supplied(value).is_none())
    }
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|raw| !raw.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Field, ValidationError};

    fn ada() -> Student {
        Student {
            id: 7,
            name: "Ada Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            age: 28,
            course: "Math".to_string(),
        }
    }

    #[test]
    fn display_matches_record_summary() {
        assert_eq!(
            ada().to_string(),
            "ID: 7, Name: Ada Lovelace, Email: ada@x.com, Age: 28, Course: Math"
        );
    }

    #[test]
    fn blank_patch_keeps_every_field() {
        let patch = StudentPatch {
            name: Some("   ".to_string()),
            ..StudentPatch::default()
        };
        assert!(patch.is_empty());
        assert_eq!(patch.apply(&ada()).unwrap(), ada().to_new());
    }

    #[test]
    fn supplied_values_are_validated_and_normalized() {
        let patch = StudentPatch {
            email: Some("Countess@Example.ORG".to_string()),
            age: Some("36".to_string()),
            ..StudentPatch::default()
        };
        let updated = patch.apply(&ada()).unwrap();
        assert_eq!(updated.name, "Ada Lovelace");
        assert_eq!(updated.email, "countess@example.org");
        assert_eq!(updated.age, 36);
        assert_eq!(updated.course, "Math");
    }

    #[test]
    fn supplied_invalid_value_is_rejected() {
        let patch = StudentPatch {
            age: Some("101".to_string()),
            ..StudentPatch::default()
        };
        let err = patch.apply(&ada()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: Field::Age,
                value: 101,
                ..
            }
        ));
    }

    #[test]
    fn retained_values_skip_revalidation() {
        let mut legacy = ada();
        legacy.course = "X".to_string();
        let patch = StudentPatch {
            name: Some("Ada King".to_string()),
            ..StudentPatch::default()
        };
        let updated = patch.apply(&legacy).unwrap();
        assert_eq!(updated.course, "X");
        assert_eq!(updated.name, "Ada King");
    }
}
