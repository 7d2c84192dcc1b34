//! Terminal output.
//!
//! Writes a [`CellBuffer`] to the terminal through crossterm: queued
//! cursor moves and prints, one flush per frame. Rows are emitted as
//! attribute runs so a frame costs a handful of escape sequences, not
//! one per cell.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::types::{Attr, Cell};

use super::buffer::CellBuffer;

/// Renders cell buffers to stdout.
pub struct TermRenderer {
    out: io::Stdout,
    fullscreen: bool,
}

impl TermRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            fullscreen: false,
        }
    }

    /// Enter the alternate screen and raw mode, hide the cursor.
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(self.out, EnterAlternateScreen, Hide)?;
        self.fullscreen = true;
        Ok(())
    }

    /// Leave the alternate screen and restore the terminal.
    pub fn leave_fullscreen(&mut self) -> io::Result<()> {
        if self.fullscreen {
            execute!(self.out, Show, LeaveAlternateScreen)?;
            disable_raw_mode()?;
            self.fullscreen = false;
        }
        Ok(())
    }

    /// Render a frame. Rows beyond the terminal height are clipped.
    pub fn render(&mut self, buffer: &CellBuffer) -> io::Result<()> {
        let rows = terminal::size().map(|(_, h)| h).unwrap_or(buffer.height());

        queue!(self.out, Clear(ClearType::All))?;
        for y in 0..buffer.height().min(rows) {
            queue!(self.out, MoveTo(0, y))?;
            render_row(&mut self.out, &buffer.row_cells(y))?;
        }
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()
    }
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TermRenderer {
    fn drop(&mut self) {
        let _ = self.leave_fullscreen();
    }
}

/// Emit one row as runs of equal attributes.
fn render_row(out: &mut impl Write, cells: &[Cell]) -> io::Result<()> {
    let mut i = 0;
    while i < cells.len() {
        let attrs = cells[i].attrs;
        let mut run = String::new();
        while i < cells.len() && cells[i].attrs == attrs {
            run.push(cells[i].ch);
            i += 1;
        }

        queue!(out, SetAttribute(Attribute::Reset))?;
        if attrs.contains(Attr::BOLD) {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if attrs.contains(Attr::DIM) {
            queue!(out, SetAttribute(Attribute::Dim))?;
        }
        if attrs.contains(Attr::ITALIC) {
            queue!(out, SetAttribute(Attribute::Italic))?;
        }
        if attrs.contains(Attr::UNDERLINE) {
            queue!(out, SetAttribute(Attribute::Underlined))?;
        }
        if attrs.contains(Attr::INVERSE) {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(out, Print(run))?;
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
