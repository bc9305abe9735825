//! Terminal mouse capture
//!
//! Mouse reporting is what lets the app see presses anywhere on screen.
//! `MouseCapture` enables it once and disables it exactly once, on
//! `release()` or when dropped.

use std::io::{self, Write};

use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};

pub struct MouseCapture<W: Write> {
    writer: W,
    active: bool,
}

impl<W: Write> MouseCapture<W> {
    /// Enable mouse reporting on `writer`
    pub fn acquire(mut writer: W) -> io::Result<Self> {
        execute!(writer, EnableMouseCapture)?;
        log::debug!("Mouse capture enabled");
        Ok(Self {
            writer,
            active: true,
        })
    }

    /// Disable mouse reporting; later calls do nothing
    pub fn release(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.writer, DisableMouseCapture)?;
        log::debug!("Mouse capture released");
        Ok(())
    }
}

impl<W: Write> Drop for MouseCapture<W> {
    fn drop(&mut self) {
        let _ = self.release();
    }
}

#[cfg(test)]
#[path = "mouse_capture_tests.rs"]
mod mouse_capture_tests;
