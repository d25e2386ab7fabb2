//! Terminal session management for the demo binary.
//!
//! [`TerminalSession`] enters raw mode and the alternate screen on creation
//! and restores the terminal when dropped. [`setup_panic_hook`] does the same
//! restoration on panic, before the panic message is printed.
//!
//! # Example
//!
//! ```no_run
//! use multistate::terminal::{setup_panic_hook, TerminalSession};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut session = TerminalSession::new()?;
//!     session.terminal().draw(|_frame| {})?;
//!     // Restored on drop
//!     Ok(())
//! }
//! ```

use color_eyre::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use std::panic;

/// Enter the alternate screen and hide the cursor.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, Hide)
}

/// Leave TUI mode and restore the terminal to normal state.
///
/// Safe to call more than once; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Install a panic hook that restores the terminal first.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        leave_tui_mode(&mut io::stdout());
        original_hook(panic_info);
    }));
}

/// Raw-mode, alternate-screen terminal restored on drop.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalSession {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal now. Later calls (and drop) are no-ops.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_tui_mode(self.terminal.backend_mut());
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.restore();
    }
}
