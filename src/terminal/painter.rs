//! Screen painter for converted frames.
//!
//! Writes each ANSI row at an absolute cursor position instead of relying
//! on newlines, so a frame never scrolls the screen. The whole frame is
//! assembled first and written with a single `write_all` to reduce flicker.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::ascii::ANSI_RESET;

/// Erase from cursor to end of line.
const CLEAR_LINE_TAIL: &str = "\x1b[K";
/// Erase from cursor to end of screen.
const CLEAR_SCREEN_TAIL: &str = "\x1b[J";
/// Reverse video, used for the status line.
const REVERSE: &str = "\x1b[7m";

/// Paints frames and the status line, reusing one output buffer.
#[derive(Debug, Default)]
pub struct Painter {
    output: String,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose a frame and optional status line into the internal buffer.
    ///
    /// Rows beyond `max_rows` are dropped.
    pub fn compose(&mut self, ansi_frame: &str, status: Option<&str>, max_rows: u16) -> &str {
        self.output.clear();

        let mut row: u16 = 0;
        for line in ansi_frame.lines().take(max_rows as usize) {
            move_to(&mut self.output, row);
            self.output.push_str(line);
            self.output.push_str(CLEAR_LINE_TAIL);
            row += 1;
        }

        move_to(&mut self.output, row);
        self.output.push_str(CLEAR_SCREEN_TAIL);

        if let Some(status) = status {
            self.output.push_str(REVERSE);
            self.output.push_str(status);
            self.output.push_str(ANSI_RESET);
            self.output.push_str(CLEAR_LINE_TAIL);
        }

        &self.output
    }

    /// Compose and write a frame to `out`.
    pub fn paint<W: Write>(
        &mut self,
        out: &mut W,
        ansi_frame: &str,
        status: Option<&str>,
        max_rows: u16,
    ) -> io::Result<()> {
        let bytes = self.compose(ansi_frame, status, max_rows).as_bytes();
        out.write_all(bytes)?;
        out.flush()
    }
}

/// Move the cursor to column 1 of 0-based `row`.
fn move_to(out: &mut String, row: u16) {
    // Writing to a String cannot fail.
    let _ = write!(out, "\x1b[{};1H", row + 1);
}
