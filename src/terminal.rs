//! Raw-mode bring-up and teardown for the interactive frontend.
use std::io;

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};

/// Which input source and renderer the process runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontend {
    /// Read keys from a raw-mode terminal rather than a byte stream.
    pub raw_input: bool,
    /// Draw the full-screen interface on the alternate screen.
    pub full_screen: bool,
}

impl Frontend {
    pub fn detect() -> Self {
        Self::for_ttys(io::stdin().is_tty(), io::stdout().is_tty())
    }

    /// A terminal on stdin always gets raw mode, so Ctrl+C arrives as a key
    /// even when stdout is redirected.
    pub fn for_ttys(stdin_tty: bool, stdout_tty: bool) -> Self {
        Self {
            raw_input: stdin_tty,
            full_screen: stdin_tty && stdout_tty,
        }
    }
}

/// Holds the terminal in raw mode, optionally on the alternate screen.
/// Dropping it puts the terminal back, on every exit path including errors
/// and panics.
#[derive(Debug)]
pub struct TerminalGuard {
    alternate_screen: bool,
}

impl TerminalGuard {
    pub fn acquire(alternate_screen: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        if alternate_screen {
            if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
                let _ = disable_raw_mode();
                return Err(e);
            }
        }
        tracing::debug!(alternate_screen, "terminal switched to raw mode");
        Ok(Self { alternate_screen })
    }

    pub fn restore(&self) -> io::Result<()> {
        if self.alternate_screen {
            execute!(io::stdout(), Show, LeaveAlternateScreen)?;
        }
        disable_raw_mode()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        match self.restore() {
            Ok(()) => tracing::debug!("terminal restored"),
            Err(e) => tracing::error!("failed to restore terminal: {e}"),
        }
    }
}
