//! Binary entry point: resolve configuration, start file logging, open the
//! database, and drive the Ratatui event loop until the user exits.
use anyhow::Context;
use clap::Parser;
use log::{error, info};

use student_records::{init_logging, run_app, App, AppConfig, Cli, SqliteStudentStore};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::resolve(Cli::parse())?;
    let _logger = init_logging(config.log_level, &config.log_dir)?;

    let store = SqliteStudentStore::open(&config.db_path, config.connect_timeout)
        .with_context(|| {
            format!(
                "could not connect to the student database at {}",
                config.db_path.display()
            )
        })
        .inspect_err(|err| error!("event=app_start module=app status=error error={err:#}"))?;

    let mut app = App::new(store).context("failed to load students")?;
    let result = run_app(&mut app);

    let closed = app.into_store().close();
    match &result {
        Ok(()) => info!("event=app_shutdown module=app status=ok"),
        Err(err) => error!("event=app_shutdown module=app status=error error={err:#}"),
    }
    result?;
    closed.context("failed to close the student database")
}
