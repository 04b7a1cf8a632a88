//! ANSI true-color serialization of a character grid.

use std::fmt::Write;

use super::color::CellColor;

/// Reset all SGR attributes.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Append a 24-bit foreground color escape: `ESC[38;2;R;G;Bm`.
#[inline]
pub fn push_fg(out: &mut String, color: CellColor) {
    // Writing to a String cannot fail.
    let _ = write!(out, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
}

/// Serialize one grid row into `out`.
///
/// A color escape is emitted only when the color differs from the previous
/// cell. The row always ends with [`ANSI_RESET`] so no styling leaks past it.
pub fn render_row(chars: &[char], colors: &[CellColor], out: &mut String) {
    out.clear();
    let mut current: Option<CellColor> = None;

    for (&c, &color) in chars.iter().zip(colors) {
        if current != Some(color) {
            push_fg(out, color);
            current = Some(color);
        }
        out.push(c);
    }

    out.push_str(ANSI_RESET);
}

/// Row-buffer pool for ANSI rendering.
///
/// Keeps one `String` per grid row across frames. Rows are cleared and
/// refilled in place, so once the buffers have grown to fit a frame no
/// further allocation happens at the same grid height.
#[derive(Debug, Default)]
pub struct RowBuffers {
    rows: Vec<String>,
}

impl RowBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize the pool to `height` rows, each with room for `width` cells.
    ///
    /// Existing row strings are kept; only missing rows are created.
    pub fn ensure(&mut self, width: u32, height: u32) {
        let height = height as usize;
        // Escape (up to 19 bytes) + glyph (up to 4 bytes) per cell, plus reset.
        let row_bytes = width as usize * 23 + ANSI_RESET.len();
        if self.rows.len() > height {
            self.rows.truncate(height);
        }
        while self.rows.len() < height {
            self.rows.push(String::with_capacity(row_bytes));
        }
    }

    /// Render a whole grid, one row buffer per grid row.
    pub fn render(&mut self, chars: &[char], colors: &[CellColor], width: u32) {
        let w = (width as usize).max(1);
        for ((row, row_chars), row_colors) in self
            .rows
            .iter_mut()
            .zip(chars.chunks(w))
            .zip(colors.chunks(w))
        {
            render_row(row_chars, row_colors, row);
        }
    }

    /// Rendered rows, top to bottom.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Copy all rows into one newline-separated string.
    pub fn join(&self) -> String {
        let total: usize = self.rows.iter().map(|r| r.len() + 1).sum();
        let mut out = String::with_capacity(total);
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(row);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
