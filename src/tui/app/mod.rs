//! Terminal ownership for TUI applications
//!
//! [`App`] puts the terminal into raw mode on the alternate screen with mouse
//! capture and restores it on drop, so an early return or error never leaves
//! the user's shell in a broken state.

pub mod status_footer;

use std::io::{self, Stdout, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// A terminal in raw mode on the alternate screen.
pub struct App {
    terminal: CrosstermTerminal,
}

impl App {
    /// Take over the terminal.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            undo_setup();
            return Err(err.into());
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                undo_setup();
                Err(err.into())
            }
        }
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Wait up to `timeout` for the next input event.
    pub fn next_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    fn restore(&mut self) -> Result<()> {
        disable_raw_mode()?;
        leave_screen(self.terminal.backend_mut())?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

/// Leave the alternate screen and stop mouse capture.
fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)
}

/// Undo a partial `App::new` before an `App` exists to drop.
fn undo_setup() {
    let _ = leave_screen(&mut io::stdout());
    let _ = disable_raw_mode();
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::warn!("failed to restore terminal: {err}");
        }
    }
}
