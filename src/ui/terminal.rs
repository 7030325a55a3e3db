use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::{info, warn};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::app::App;
use crate::db::StudentStore;

type Backend = CrosstermBackend<Stdout>;

/// Spin up the terminal backend, enter the draw loop, and keep processing input
/// until the user quits. The terminal is restored even when setup or the loop
/// fails.
pub fn run_app<S: StudentStore>(app: &mut App<S>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, app);
    let cleanup = cleanup_terminal(&mut terminal);
    result.and(cleanup)
}

fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode().context("failed to enable raw mode")?;

    let mut stdout = io::stdout();
    let entered = execute!(stdout, EnterAlternateScreen)
        .context("failed to enter alternate screen");
    undo_on_error(entered, || restore_raw_mode(&mut io::stdout(), false))?;

    let terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal backend");
    undo_on_error(terminal, || restore_raw_mode(&mut io::stdout(), true))
}

/// Run `undo` when a setup step failed, then hand back the original result.
fn undo_on_error<T>(step: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if step.is_err() {
        undo();
    }
    step
}

/// Best-effort rollback of a partially entered terminal state.
fn restore_raw_mode(stdout: &mut Stdout, leave_alternate_screen: bool) {
    if leave_alternate_screen {
        if let Err(err) = execute!(stdout, LeaveAlternateScreen) {
            warn!("event=terminal_restore module=ui status=error step=leave_screen error={err}");
        }
    }
    if let Err(err) = disable_raw_mode() {
        warn!("event=terminal_restore module=ui status=error step=raw_mode error={err}");
    }
}

fn event_loop<S: StudentStore>(terminal: &mut Terminal<Backend>, app: &mut App<S>) -> Result<()> {
    loop {
        terminal
            .draw(|frame| app.draw(frame))
            .context("failed to draw frame")?;

        if !event::poll(Duration::from_millis(250)).context("event polling failed")? {
            continue;
        }
        let Event::Key(key_event) = event::read().context("failed to read event")? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            info!("event=app_interrupt module=ui status=ok");
            return Ok(());
        }

        if app.handle_key(key_event.code) {
            return Ok(());
        }
    }
}

fn cleanup_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal
        .show_cursor()
        .context("failed to restore cursor visibility")
}

#[cfg(test)]
mod tests {
    use super::undo_on_error;
    use anyhow::anyhow;

    #[test]
    fn failed_setup_step_runs_its_rollback() {
        let mut rolled_back = false;
        let result: anyhow::Result<()> =
            undo_on_error(Err(anyhow!("no tty")), || rolled_back = true);
        assert!(result.is_err());
        assert!(rolled_back);
    }

    #[test]
    fn successful_setup_step_keeps_terminal_state() {
        let mut rolled_back = false;
        let result = undo_on_error(Ok(7), || rolled_back = true);
        assert_eq!(result.unwrap(), 7);
        assert!(!rolled_back);
    }
}
