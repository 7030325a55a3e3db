//! Runtime configuration. Every flag has an environment fallback, and the
//! defaults place the database and logs under `~/.student-records`.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueHint};
use directories::BaseDirs;

use crate::logging::{default_log_level, normalize_level};

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".student-records";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "students.sqlite";
const LOG_DIR_NAME: &str = "logs";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Parser)]
#[command(
    name = "student-records",
    version,
    about = "Manage student records in a local SQLite database from the terminal"
)]
pub struct Cli {
    #[arg(
        long,
        env = "STUDENT_RECORDS_DB",
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        help = "SQLite database file (default: ~/.student-records/students.sqlite)"
    )]
    pub db: Option<PathBuf>,
    #[arg(
        long,
        env = "STUDENT_RECORDS_LOG_DIR",
        value_name = "DIR",
        value_hint = ValueHint::DirPath,
        help = "Directory for log files (default: ~/.student-records/logs)"
    )]
    pub log_dir: Option<PathBuf>,
    #[arg(
        long,
        env = "STUDENT_RECORDS_LOG",
        value_name = "LEVEL",
        help = "Log level: trace|debug|info|warn|error"
    )]
    pub log_level: Option<String>,
    #[arg(
        long,
        env = "STUDENT_RECORDS_CONNECT_TIMEOUT",
        value_name = "SECS",
        default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS,
        help = "Seconds to wait for a locked database before giving up"
    )]
    pub connect_timeout: u64,
}

/// Fully resolved settings handed to `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: &'static str,
    pub connect_timeout: Duration,
}

impl AppConfig {
    /// Fill in defaults, check the log level, and make sure the database's
    /// parent directory exists.
    pub fn resolve(cli: Cli) -> Result<Self> {
        let db_path = match cli.db {
            Some(path) => path,
            None => data_dir()?.join(DB_FILE_NAME),
        };
        let log_dir = match cli.log_dir {
            Some(path) => path,
            None => data_dir()?.join(LOG_DIR_NAME),
        };
        let log_level = match cli.log_level.as_deref() {
            Some(level) => normalize_level(level)?,
            None => default_log_level(),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent).context("failed to create data directory")?;
        }

        Ok(Self {
            db_path,
            log_dir,
            log_level,
            connect_timeout: Duration::from_secs(cli.connect_timeout),
        })
    }
}

/// Resolve the absolute path to the application folder inside the user's home.
fn data_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}
