use std::io::{Stderr, stderr};

use anyhow::{Context, Result};
use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::error;

pub type TuiTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Switch to raw mode on the alternate screen and build a terminal over stderr
pub fn setup_terminal() -> Result<TuiTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stderr = stderr();
    execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

/// Undo [`setup_terminal`]; safe to call after a failed run
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(stderr(), LeaveAlternateScreen, cursor::Show)
        .context("Failed to leave alternate screen")?;
    Ok(())
}

/// Combine the outcome of a run with the outcome of its teardown.
///
/// The run's own error wins; a teardown failure is logged and only surfaces
/// when the run itself succeeded.
pub fn finish(result: Result<()>, teardown: Result<()>) -> Result<()> {
    match (result, teardown) {
        (Err(err), Err(teardown_err)) => {
            error!(error = %teardown_err, "terminal teardown failed");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), teardown) => teardown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_finish_prefers_run_error() {
        let err = finish(Err(anyhow!("draw failed")), Err(anyhow!("raw mode stuck")))
            .unwrap_err();
        assert_eq!(err.to_string(), "draw failed");
    }

    #[test]
    fn test_finish_reports_teardown_after_clean_run() {
        let err = finish(Ok(()), Err(anyhow!("raw mode stuck"))).unwrap_err();
        assert_eq!(err.to_string(), "raw mode stuck");
        assert!(finish(Ok(()), Ok(())).is_ok());
        assert!(finish(Err(anyhow!("draw failed")), Ok(())).is_err());
    }
}
