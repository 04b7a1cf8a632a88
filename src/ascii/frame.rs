//! Rendered character grid handed to the screen painter.

use super::color::CellColor;

/// ASCII-rendered frame.
///
/// Holds its own copy of the glyphs and colors, so it stays valid after
/// the converter moves on to the next frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AsciiFrame {
    /// Glyphs, row-major
    pub chars: Vec<char>,
    /// One color per glyph, row-major
    pub colors: Vec<CellColor>,
    /// Width in characters
    pub width: u32,
    /// Height in characters
    pub height: u32,
}

impl AsciiFrame {
    /// Create a frame from glyphs and colors.
    pub fn new(chars: Vec<char>, colors: Vec<CellColor>, width: u32, height: u32) -> Self {
        debug_assert_eq!(chars.len(), colors.len());
        debug_assert_eq!(chars.len(), width as usize * height as usize);
        Self {
            chars,
            colors,
            width,
            height,
        }
    }

    /// Glyph and color at `(x, y)`.
    pub fn cell(&self, x: u32, y: u32) -> Option<(char, CellColor)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) as usize;
        Some((self.chars[idx], self.colors[idx]))
    }

    /// Iterate over rows as `(glyphs, colors)` slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = (&[char], &[CellColor])> {
        let w = (self.width as usize).max(1);
        self.chars.chunks(w).zip(self.colors.chunks(w))
    }

    /// Plain text without colors, rows joined by newlines.
    pub fn to_string_display(&self) -> String {
        if self.width == 0 || self.height == 0 {
            return String::new();
        }

        self.rows()
            .map(|(glyphs, _)| glyphs.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AsciiFrame {
        let chars = vec!['#', '.', ':', '@', '*', '+'];
        let colors = (0..6).map(|i| CellColor::new(i, i, i)).collect();
        AsciiFrame::new(chars, colors, 3, 2)
    }

    #[test]
    fn test_to_string_display() {
        assert_eq!(sample().to_string_display(), "#.:\n@*+");
    }

    #[test]
    fn test_to_string_display_empty() {
        assert_eq!(AsciiFrame::default().to_string_display(), "");
    }

    #[test]
    fn test_cell_lookup() {
        let frame = sample();
        assert_eq!(frame.cell(0, 1), Some(('@', CellColor::new(3, 3, 3))));
        assert_eq!(frame.cell(3, 0), None);
        assert_eq!(frame.cell(0, 2), None);
    }

    #[test]
    fn test_rows_are_top_to_bottom() {
        let frame = sample();
        let rows: Vec<_> = frame.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, &['#', '.', ':']);
        assert_eq!(rows[1].1[0], CellColor::new(3, 3, 3));
    }
}
