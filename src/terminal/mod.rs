//! Terminal lifecycle.
//!
//! [`TerminalManager`] switches the terminal into raw mode on the alternate
//! screen and puts it back when dropped. [`install_panic_hook`] covers the
//! case where a panic unwinds past the manager.

mod panic;
mod setup;

pub use panic::install_panic_hook;
pub use setup::{enter_tui_mode, leave_tui_mode, restore_terminal};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub type GameTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the ratatui terminal and restores the tty on drop.
pub struct TerminalManager {
    terminal: GameTerminal,
    restored: bool,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen and clear it.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = enter_tui_mode(&mut stdout) {
            restore_terminal();
            return Err(e.into());
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut GameTerminal {
        &mut self.terminal
    }

    /// Put the terminal back. Later calls, including the one from `Drop`,
    /// do nothing.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_tui_mode(self.terminal.backend_mut());
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        self.restore();
    }
}
