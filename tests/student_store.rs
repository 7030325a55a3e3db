use std::time::Duration;

use student_records::db::{SqliteStudentStore, StoreError, StudentStore};
use student_records::models::{NewStudent, StudentPatch};
use student_records::validation::validate_student;

fn new_student(name: &str, email: &str, age: i64, course: &str) -> NewStudent {
    validate_student(name, email, age, course).unwrap()
}

fn seeded_store() -> SqliteStudentStore {
    let store = SqliteStudentStore::open_in_memory().unwrap();
    for (name, email, age, course) in [
        ("Charles Babbage", "charles@x.com", 48, "Engineering"),
        ("Ada Lovelace", "ada@x.com", 28, "Math"),
        ("alan turing", "alan@x.com", 41, "Logic"),
    ] {
        store.create(&new_student(name, email, age, course)).unwrap();
    }
    store
}

#[test]
fn create_then_read_back() {
    let store = SqliteStudentStore::open_in_memory().unwrap();
    let created = store
        .create(&new_student("Ada Lovelace", "ada@x.com", 28, "Math"))
        .unwrap();
    assert_eq!(created.id, 1);

    let fetched = store.get_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(
        fetched.to_string(),
        "ID: 1, Name: Ada Lovelace, Email: ada@x.com, Age: 28, Course: Math"
    );
    assert_eq!(store.count().unwrap(), 1);
    assert_eq!(store.get_all().unwrap(), vec![created]);
}

#[test]
fn add_lookup_delete_lifecycle() {
    let store = SqliteStudentStore::open_in_memory().unwrap();
    let ada = new_student("Ada Lovelace", "Ada@X.com", 28, "Math");

    let created = store.create(&ada).unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(store.get_by_id(1).unwrap().unwrap().email, "ada@x.com");
    assert_eq!(store.count().unwrap(), 1);

    assert!(store.delete(1).unwrap());
    assert_eq!(store.count().unwrap(), 0);
    assert_eq!(store.get_by_id(1).unwrap(), None);
}

#[test]
fn missing_id_reads_as_none() {
    let store = seeded_store();
    assert_eq!(store.get_by_id(99).unwrap(), None);
}

#[test]
fn duplicate_email_is_rejected_regardless_of_case() {
    let store = seeded_store();
    let clash = NewStudent {
        name: "Ada Byron".to_string(),
        email: "ADA@X.COM".to_string(),
        age: 30,
        course: "Poetry".to_string(),
    };

    let err = store.create(&clash).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey { .. }));
    assert_eq!(err.code(), "duplicate_key");
    assert_eq!(err.to_string(), "Email ada@x.com already exists.");
    assert_eq!(store.count().unwrap(), 3);
}

#[test]
fn store_revalidates_records_before_writing() {
    let store = SqliteStudentStore::open_in_memory().unwrap();
    let invalid = NewStudent {
        name: "Ada Lovelace".to_string(),
        email: "ada@x.com".to_string(),
        age: 12,
        course: "Math".to_string(),
    };

    let err = store.create(&invalid).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.count().unwrap(), 0);

    let unnormalized = NewStudent {
        name: "  Ada Lovelace ".to_string(),
        email: "Ada@X.com".to_string(),
        age: 28,
        course: "Math".to_string(),
    };
    let created = store.create(&unnormalized).unwrap();
    assert_eq!(created.name, "Ada Lovelace");
    assert_eq!(created.email, "ada@x.com");
}

#[test]
fn update_applies_patch_and_keeps_id() {
    let store = seeded_store();
    let current = store.get_by_id(2).unwrap().unwrap();
    let patch = StudentPatch {
        course: Some("Analytical Engines".to_string()),
        ..StudentPatch::default()
    };

    let merged = patch.apply(&current).unwrap();
    let updated = store.update(current.id, &merged).unwrap();
    assert_eq!(updated.id, 2);
    assert_eq!(updated.name, "Ada Lovelace");
    assert_eq!(updated.course, "Analytical Engines");
    assert_eq!(store.get_by_id(2).unwrap().unwrap(), updated);
}

#[test]
fn update_to_taken_email_leaves_row_unchanged() {
    let store = seeded_store();
    let before = store.get_by_id(3).unwrap().unwrap();
    let mut changed = before.to_new();
    changed.email = "ada@x.com".to_string();

    let err = store.update(before.id, &changed).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey { .. }));
    assert_eq!(store.get_by_id(3).unwrap().unwrap(), before);

    changed.email = "ADA@X.COM".to_string();
    let err = store.update(before.id, &changed).unwrap_err();
    assert_eq!(err.code(), "duplicate_key");
    assert_eq!(store.get_by_id(3).unwrap().unwrap(), before);
}

#[test]
fn update_may_keep_its_own_email() {
    let store = seeded_store();
    let mut changed = store.get_by_id(2).unwrap().unwrap().to_new();
    changed.age = 36;
    assert_eq!(store.update(2, &changed).unwrap().age, 36);
}

#[test]
fn update_of_missing_id_is_not_found() {
    let store = seeded_store();
    let err = store
        .update(42, &new_student("Grace Hopper", "grace@navy.mil", 45, "Compilers"))
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { id: 42 }));
    assert_eq!(err.to_string(), "Student not found with ID: 42");
}

#[test]
fn delete_reports_whether_a_row_was_removed() {
    let store = seeded_store();
    assert!(store.delete(1).unwrap());
    assert!(!store.delete(1).unwrap());
    assert!(!store.delete(99).unwrap());
    assert_eq!(store.count().unwrap(), 2);
    assert_eq!(store.get_by_id(1).unwrap(), None);
}

#[test]
fn search_is_case_insensitive_and_ordered_by_name() {
    let store = seeded_store();

    let names: Vec<String> = store
        .search_by_name("A")
        .unwrap()
        .into_iter()
        .map(|student| student.name)
        .collect();
    assert_eq!(names, ["Ada Lovelace", "alan turing", "Charles Babbage"]);

    let hits = store.search_by_name("LOVE").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 2);

    assert!(store.search_by_name("zzz").unwrap().is_empty());
    assert_eq!(store.search_by_name("").unwrap().len(), 3);
}

#[test]
fn search_treats_wildcards_literally() {
    let store = seeded_store();
    assert!(store.search_by_name("%").unwrap().is_empty());
    assert!(store.search_by_name("_").unwrap().is_empty());
}

#[test]
fn ids_are_not_reused_after_deleting_the_newest_row() {
    let store = seeded_store();
    assert!(store.delete(3).unwrap());
    let created = store
        .create(&new_student("Grace Hopper", "grace@navy.mil", 45, "Compilers"))
        .unwrap();
    assert_eq!(created.id, 4);
}

#[test]
fn file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.sqlite");
    let timeout = Duration::from_secs(1);

    let store = SqliteStudentStore::open(&path, timeout).unwrap();
    store
        .create(&new_student("Ada Lovelace", "ada@x.com", 28, "Math"))
        .unwrap();
    store
        .create(&new_student("Alan Turing", "alan@x.com", 41, "Logic"))
        .unwrap();
    assert!(store.delete(2).unwrap());
    store.close().unwrap();

    let reopened = SqliteStudentStore::open(&path, timeout).unwrap();
    assert_eq!(reopened.count().unwrap(), 1);
    let created = reopened
        .create(&new_student("Grace Hopper", "grace@navy.mil", 45, "Compilers"))
        .unwrap();
    assert_eq!(created.id, 3);
    reopened.close().unwrap();
}

#[test]
fn unopenable_path_is_a_connection_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("students.sqlite");

    let err = SqliteStudentStore::open(&path, Duration::from_secs(1))
        .err()
        .unwrap();
    assert!(matches!(err, StoreError::ConnectionFailure { .. }));
    assert_eq!(err.code(), "connection_failure");
}
