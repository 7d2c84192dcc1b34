//! Cell buffer and drawing primitives.
//!
//! A 2D grid of [`Cell`]s that represents one rendered frame. The frame
//! derived fills it; the terminal renderer outputs it.
//!
//! Flat storage with row-major indexing: `index = y * width + x`. Wide
//! characters occupy their cell plus a `\0` continuation cell that the
//! output layer skips.

use crate::types::{Attr, BorderStyle, Cell};

use unicode_width::UnicodeWidthChar;

/// Marker stored after a wide character.
const CONTINUATION: char = '\0';

/// A 2D buffer of terminal cells.
#[derive(Debug, Clone, PartialEq)]
pub struct CellBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl CellBuffer {
    /// Create a new buffer filled with blank cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Cell at (x, y), if in bounds.
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Write one cell. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Draw a string starting at (x, y), clipped at the right edge.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, attrs: Attr) {
        let mut cx = x;
        for ch in text.chars() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if cx >= self.width || cx + w > self.width {
                break;
            }
            self.set(cx, y, Cell { ch, attrs });
            if w == 2 {
                self.set(
                    cx + 1,
                    y,
                    Cell {
                        ch: CONTINUATION,
                        attrs,
                    },
                );
            }
            cx += w;
        }
    }

    /// Draw a rectangular border. Interiors are left untouched.
    pub fn draw_box(&mut self, x: u16, y: u16, width: u16, height: u16, style: BorderStyle) {
        let Some((tl, tr, bl, br, h, v)) = style.chars() else {
            return;
        };
        if width < 2 || height < 2 {
            return;
        }

        let right = x + width - 1;
        let bottom = y + height - 1;

        self.set(x, y, Cell { ch: tl, attrs: Attr::NONE });
        self.set(right, y, Cell { ch: tr, attrs: Attr::NONE });
        self.set(x, bottom, Cell { ch: bl, attrs: Attr::NONE });
        self.set(right, bottom, Cell { ch: br, attrs: Attr::NONE });

        for cx in (x + 1)..right {
            self.set(cx, y, Cell { ch: h, attrs: Attr::NONE });
            self.set(cx, bottom, Cell { ch: h, attrs: Attr::NONE });
        }
        for cy in (y + 1)..bottom {
            self.set(x, cy, Cell { ch: v, attrs: Attr::NONE });
            self.set(right, cy, Cell { ch: v, attrs: Attr::NONE });
        }
    }

    /// One row as plain text, continuation cells skipped.
    ///
    /// Used by the output layer and by tests asserting on frame content.
    pub fn row_string(&self, y: u16) -> String {
        let mut row = String::with_capacity(self.width as usize);
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                if cell.ch != CONTINUATION {
                    row.push(cell.ch);
                }
            }
        }
        row
    }

    /// Cells of one row with their attributes, continuation cells skipped.
    pub fn row_cells(&self, y: u16) -> Vec<Cell> {
        (0..self.width)
            .filter_map(|x| self.get(x, y).copied())
            .filter(|c| c.ch != CONTINUATION)
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
