//! One function per statement shape against the `students` table. Every query
//! is parameterized; callers are expected to have validated the record.

use rusqlite::{ffi, params, Connection, Error as SqlError, OptionalExtension, Row};

use super::error::{StoreError, StoreResult};
use crate::models::{NewStudent, Student};

const STUDENT_COLUMNS: &str = "id, name, email, age, course";

/// Insert a row and return it hydrated with the id SQLite assigned.
pub fn insert_student(conn: &Connection, student: &NewStudent) -> StoreResult<Student> {
    conn.execute(
        "INSERT INTO students (name, email, age, course) VALUES (?1, ?2, ?3, ?4)",
        params![student.name, student.email, student.age, student.course],
    )
    .map_err(|err| map_unique_constraint(err, &student.email))?;

    let id = conn.last_insert_rowid();
    Ok(student.clone().with_id(id))
}

/// Every student, oldest id first.
pub fn fetch_students(conn: &Connection) -> StoreResult<Vec<Student>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {STUDENT_COLUMNS} FROM students ORDER BY id"
    ))?;

    let students = stmt
        .query_map([], student_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(students)
}

pub fn fetch_student(conn: &Connection, id: i64) -> StoreResult<Option<Student>> {
    let student = conn
        .query_row(
            &format!("SELECT {STUDENT_COLUMNS} FROM students WHERE id = ?1"),
            params![id],
            student_from_row,
        )
        .optional()?;

    Ok(student)
}

/// Case-insensitive substring match on the name, ordered by name. Wildcard
/// characters in `fragment` match literally.
pub fn search_students_by_name(conn: &Connection, fragment: &str) -> StoreResult<Vec<Student>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {STUDENT_COLUMNS} FROM students
         WHERE name LIKE ?1 ESCAPE '\\'
         ORDER BY name COLLATE NOCASE, id"
    ))?;

    let students = stmt
        .query_map([like_pattern(fragment.trim())], student_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(students)
}

/// Replace every editable column of an existing row.
pub fn update_student(conn: &Connection, id: i64, student: &NewStudent) -> StoreResult<Student> {
    let updated = conn
        .execute(
            "UPDATE students SET name = ?1, email = ?2, age = ?3, course = ?4 WHERE id = ?5",
            params![student.name, student.email, student.age, student.course, id],
        )
        .map_err(|err| map_unique_constraint(err, &student.email))?;

    if updated == 0 {
        Err(StoreError::NotFound { id })
    } else {
        Ok(student.clone().with_id(id))
    }
}

/// Returns `false` when no row had this id.
pub fn delete_student(conn: &Connection, id: i64) -> StoreResult<bool> {
    let deleted = conn.execute("DELETE FROM students WHERE id = ?1", params![id])?;
    Ok(deleted > 0)
}

pub fn count_students(conn: &Connection) -> StoreResult<u64> {
    let total: i64 = conn.query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
    Ok(u64::try_from(total).unwrap_or_default())
}

fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        age: row.get(3)?,
        course: row.get(4)?,
    })
}

fn like_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// The only unique column is `email`, so a unique-constraint failure always
/// means the address is taken. Other constraint failures pass through.
fn map_unique_constraint(err: SqlError, email: &str) -> StoreError {
    match err.sqlite_error() {
        Some(cause) if cause.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE => {
            StoreError::DuplicateKey {
                email: email.to_string(),
            }
        }
        _ => err.into(),
    }
}
