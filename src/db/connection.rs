use std::path::Path;
use std::time::{Duration, Instant};

use log::{error, info};
use rusqlite::Connection;

use super::error::{StoreError, StoreResult};

const MEMORY_LOCATION: &str = ":memory:";

/// Open the database file, apply the busy timeout, and bootstrap the schema.
/// Any failure here is a `ConnectionFailure`: callers must not serve requests
/// without a live, bootstrapped connection.
pub fn open_connection(path: &Path, busy_timeout: Duration) -> StoreResult<Connection> {
    let location = path.display().to_string();
    bootstrap(&location, busy_timeout, || Connection::open(path))
}

/// Private in-memory database, used by tests and throwaway sessions.
pub fn open_in_memory_connection() -> StoreResult<Connection> {
    bootstrap(MEMORY_LOCATION, Duration::ZERO, Connection::open_in_memory)
}

fn bootstrap(
    location: &str,
    busy_timeout: Duration,
    open: impl FnOnce() -> rusqlite::Result<Connection>,
) -> StoreResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start location={location}");

    let result = open().and_then(|conn| {
        if !busy_timeout.is_zero() {
            conn.busy_timeout(busy_timeout)?;
        }
        ensure_schema(&conn)?;
        Ok(conn)
    });

    match result {
        Ok(conn) => {
            info!(
                "event=db_open module=db status=ok location={location} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(source) => {
            error!(
                "event=db_open module=db status=error location={location} duration_ms={} error={source}",
                started_at.elapsed().as_millis()
            );
            Err(StoreError::ConnectionFailure {
                path: location.to_string(),
                source,
            })
        }
    }
}

/// Create the `students` table when it is missing. Safe to run on every start.
/// `AUTOINCREMENT` keeps ids from being handed out twice, and the bounds mirror
/// the validation rules so the table rejects bad rows on its own.
pub fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS students (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL CHECK (length(name) BETWEEN 2 AND 50),
            email TEXT NOT NULL UNIQUE COLLATE NOCASE CHECK (length(email) <= 100),
            age INTEGER NOT NULL CHECK (age BETWEEN 16 AND 100),
            course TEXT NOT NULL CHECK (length(course) BETWEEN 2 AND 100)
        )",
        [],
    )?;
    Ok(())
}
