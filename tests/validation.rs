use student_records::validation::{
    parse_age, validate_age, validate_course, validate_email, validate_name, validate_student,
    Field, ValidationError,
};

#[test]
fn age_bounds_are_inclusive() {
    assert_eq!(validate_age(16), Ok(16));
    assert_eq!(validate_age(100), Ok(100));
    assert!(matches!(
        validate_age(15),
        Err(ValidationError::OutOfRange { value: 15, .. })
    ));
    assert!(validate_age(101).is_err());
}

#[test]
fn age_input_must_be_a_whole_number() {
    assert_eq!(parse_age(" 42 "), Ok(42));
    let err = parse_age("forty").unwrap_err();
    assert!(matches!(
        err,
        ValidationError::InvalidFormat {
            field: Field::Age,
            ..
        }
    ));
    assert!(parse_age("18.5").is_err());
}

#[test]
fn email_is_trimmed_and_lowercased() {
    assert_eq!(
        validate_email("  Ada.Lovelace+maths@Example.CO.UK ").unwrap(),
        "ada.lovelace+maths@example.co.uk"
    );
}

#[test]
fn malformed_emails_are_rejected() {
    for email in ["", "ada", "ada@", "@example.com", "ada@example", "ada@example.c", "a b@x.com"] {
        assert!(validate_email(email).is_err(), "{email} should be rejected");
    }
}

#[test]
fn names_allow_hyphens_and_apostrophes() {
    assert_eq!(validate_name("Mary-Jane O'Neil").unwrap(), "Mary-Jane O'Neil");
    assert!(validate_name("R2D2").is_err());
    assert!(validate_name("Ada_Lovelace").is_err());
}

#[test]
fn names_reject_unicode_spaces() {
    for name in ["Ada\u{00A0}King", "Ada\u{3000}King", "Ada\u{2028}King"] {
        let err = validate_name(name).unwrap_err();
        assert_eq!(err.field(), Field::Name, "{name:?} should be rejected");
    }
    assert_eq!(validate_name("Ada\tKing").unwrap(), "Ada\tKing");
}

#[test]
fn course_length_is_checked_after_trimming() {
    assert!(validate_course("  M  ").is_err());
    assert_eq!(validate_course(" CS ").unwrap(), "CS");
    assert!(validate_course(&"c".repeat(100)).is_ok());
    assert!(validate_course(&"c".repeat(101)).is_err());
}

#[test]
fn validate_student_reports_first_failing_field_in_form_order() {
    let err = validate_student("A", "bad", 3, "").unwrap_err();
    assert_eq!(err.field(), Field::Name);

    let err = validate_student("Ada", "bad", 3, "").unwrap_err();
    assert_eq!(err.field(), Field::Email);

    let student = validate_student(" Ada ", "ADA@X.COM", 28, " Math ").unwrap();
    assert_eq!(student.name, "Ada");
    assert_eq!(student.email, "ada@x.com");
    assert_eq!(student.course, "Math");
}
