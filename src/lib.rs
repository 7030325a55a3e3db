//! Core library surface for the student records terminal application.
pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod ui;
pub mod validation;

pub use config::{AppConfig, Cli};
pub use db::{SqliteStudentStore, StoreError, StoreResult, StudentStore};
pub use logging::init_logging;
pub use models::{NewStudent, Student, StudentPatch};
pub use ui::{run_app, App};
pub use validation::{validate_student, Field, ValidationError};
