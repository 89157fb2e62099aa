//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

use super::output::hide_cursor;

/// Holds raw mode (and a hidden cursor) until dropped.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        hide_cursor();
        Ok(Self { active: true })
    }

    /// Leave raw mode early (also happens on drop).
    pub fn release(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            print!("\x1b[?25h");
            super::output::flush();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}
