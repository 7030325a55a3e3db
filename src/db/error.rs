use thiserror::Error;

use crate::validation::ValidationError;

pub type StoreResult<T> = Result<T, StoreError>;

/// Typed outcomes of store operations. Only `ConnectionFailure` is fatal; the
/// UI reports every other variant in its status line and keeps running.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Email {email} already exists.")]
    DuplicateKey { email: String },
    #[error("Student not found with ID: {id}")]
    NotFound { id: i64 },
    #[error("failed to open student database at {path}")]
    ConnectionFailure {
        path: String,
        #[source]
        source: rusqlite::Error,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl StoreError {
    /// Short machine-readable tag used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::DuplicateKey { .. } => "duplicate_key",
            StoreError::NotFound { .. } => "not_found",
            StoreError::ConnectionFailure { .. } => "connection_failure",
            StoreError::Validation(_) => "validation",
            StoreError::Sqlite(_) => "sqlite",
        }
    }
}
