//! Raw-mode terminal lifecycle for the console view.
use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches to the alternate screen in raw mode with the cursor hidden.
///
/// The returned guard puts the terminal back when dropped, so a panic
/// unwinding through the frontend still leaves a usable shell.
pub fn init() -> Result<(Tui, TerminalGuard)> {
    enable_raw_mode().context("enabling raw mode")?;
    let guard = TerminalGuard { active: true };

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide).context("entering alternate screen")?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

fn restore() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    disable_raw_mode()
}

pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Restores the terminal now and reports failures instead of ignoring them.
    pub fn finish(mut self) -> Result<()> {
        self.active = false;
        restore().context("restoring terminal")
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = restore();
        }
    }
}
