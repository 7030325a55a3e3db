//! Persistence module split across logical submodules.

mod connection;
mod error;
mod store;
mod students;

pub use connection::{ensure_schema, open_connection, open_in_memory_connection};
pub use error::{StoreError, StoreResult};
pub use store::{SqliteStudentStore, StudentStore};
pub use students::{
    count_students, delete_student, fetch_student, fetch_students, insert_student,
    search_students_by_name, update_student,
};
