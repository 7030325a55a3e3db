use std::path::Path;
use std::time::Duration;

use log::{info, warn};
use rusqlite::Connection;

use super::connection::{open_connection, open_in_memory_connection};
use super::error::{StoreError, StoreResult};
use super::students::{
    count_students, delete_student, fetch_student, fetch_students, insert_student,
    search_students_by_name, update_student,
};
use crate::models::{NewStudent, Student};
use crate::validation::validate_student;

/// Operations the UI needs from persistent storage. Kept as a trait so the
/// session logic can run against doubles in tests.
pub trait StudentStore {
    fn create(&self, student: &NewStudent) -> StoreResult<Student>;
    fn get_by_id(&self, id: i64) -> StoreResult<Option<Student>>;
    fn get_all(&self) -> StoreResult<Vec<Student>>;
    fn search_by_name(&self, fragment: &str) -> StoreResult<Vec<Student>>;
    fn update(&self, id: i64, student: &NewStudent) -> StoreResult<Student>;
    /// `Ok(false)` when the id does not exist.
    fn delete(&self, id: i64) -> StoreResult<bool>;
    fn count(&self) -> StoreResult<u64>;
}

/// SQLite-backed store that owns the process's single connection.
pub struct SqliteStudentStore {
    conn: Connection,
}

impl SqliteStudentStore {
    pub fn open(path: &Path, busy_timeout: Duration) -> StoreResult<Self> {
        let conn = open_connection(path, busy_timeout)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = open_in_memory_connection()?;
        Ok(Self { conn })
    }

    /// Release the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> StoreResult<()> {
        match self.conn.close() {
            Ok(()) => {
                info!("event=db_close module=db status=ok");
                Ok(())
            }
            Err((_conn, err)) => {
                warn!("event=db_close module=db status=error error={err}");
                Err(err.into())
            }
        }
    }
}

impl StudentStore for SqliteStudentStore {
    fn create(&self, student: &NewStudent) -> StoreResult<Student> {
        let result = revalidate(student).and_then(|clean| insert_student(&self.conn, &clean));
        match &result {
            Ok(created) => info!(
                "event=student_create module=store status=ok id={}",
                created.id
            ),
            Err(err) => log_write_error("student_create", None, err),
        }
        result
    }

    fn get_by_id(&self, id: i64) -> StoreResult<Option<Student>> {
        fetch_student(&self.conn, id)
    }

    fn get_all(&self) -> StoreResult<Vec<Student>> {
        fetch_students(&self.conn)
    }

    fn search_by_name(&self, fragment: &str) -> StoreResult<Vec<Student>> {
        search_students_by_name(&self.conn, fragment)
    }

    fn update(&self, id: i64, student: &NewStudent) -> StoreResult<Student> {
        let result =
            revalidate(student).and_then(|clean| update_student(&self.conn, id, &clean));
        match &result {
            Ok(_) => info!("event=student_update module=store status=ok id={id}"),
            Err(err) => log_write_error("student_update", Some(id), err),
        }
        result
    }

    fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = delete_student(&self.conn, id);
        match &result {
            Ok(removed) => info!(
                "event=student_delete module=store status=ok id={id} removed={removed}"
            ),
            Err(err) => log_write_error("student_delete", Some(id), err),
        }
        result
    }

    fn count(&self) -> StoreResult<u64> {
        count_students(&self.conn)
    }
}

/// Write paths never trust the caller: run the field rules again so the row
/// stored is always the normalized form.
fn revalidate(student: &NewStudent) -> StoreResult<NewStudent> {
    validate_student(&student.name, &student.email, student.age, &student.course)
        .map_err(StoreError::from)
}

fn log_write_error(event: &str, id: Option<i64>, err: &StoreError) {
    match id {
        Some(id) => warn!(
            "event={event} module=store status=error id={id} error_code={}",
            err.code()
        ),
        None => warn!(
            "event={event} module=store status=error error_code={}",
            err.code()
        ),
    }
}
