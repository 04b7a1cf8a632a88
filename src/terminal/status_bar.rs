//! Status line shown under the ASCII frame.

use std::time::{Duration, Instant};

use crate::ascii::{ColorScheme, Preset};

/// Frames-per-second counter, refreshed once per second.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
    fps: f64,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Count a displayed frame at `now`.
    pub fn tick(&mut self, now: Instant) {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed >= Duration::from_secs(1) {
            self.fps = self.frames as f64 / elapsed.as_secs_f64();
            self.frames = 0;
            self.window_start = now;
        }
    }

    /// Rate measured over the last completed window.
    pub fn fps(&self) -> f64 {
        self.fps
    }
}

/// Status line: preset, color scheme, FPS and key help.
#[derive(Debug, Clone)]
pub struct StatusBar {
    /// Whether the status bar is visible
    pub visible: bool,
    counter: FpsCounter,
}

impl StatusBar {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            counter: FpsCounter::new(Instant::now()),
        }
    }

    /// Record a displayed frame.
    pub fn frame_displayed(&mut self, now: Instant) {
        self.counter.tick(now);
    }

    pub fn fps(&self) -> f64 {
        self.counter.fps()
    }

    /// Rows this bar occupies.
    pub fn height(&self) -> u16 {
        u16::from(self.visible)
    }

    /// Format the status text, cut to `max_width` characters.
    ///
    /// Format: " Preset: classic | Color: true | FPS: 29.8 | q quit, p preset, c color "
    pub fn format(&self, preset: Preset, scheme: ColorScheme, max_width: usize) -> String {
        let text = format!(
            " Preset: {} | Color: {} | FPS: {:.1} | q quit, p preset, c color ",
            preset,
            scheme,
            self.fps()
        );
        text.chars().take(max_width).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_updates_after_one_second() {
        let start = Instant::now();
        let mut counter = FpsCounter::new(start);
        for i in 1..=10 {
            counter.tick(start + Duration::from_millis(i * 50));
        }
        assert_eq!(counter.fps(), 0.0);

        for i in 11..=20 {
            counter.tick(start + Duration::from_millis(i * 50));
        }
        // 20 frames over exactly one second
        assert!((counter.fps() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_contains_state() {
        let bar = StatusBar::new(true);
        let text = bar.format(Preset::Blocks, ColorScheme::Neon, 200);
        assert!(text.contains("Preset: blocks"));
        assert!(text.contains("Color: neon"));
        assert!(text.contains("FPS: 0.0"));
    }

    #[test]
    fn test_format_truncates() {
        let bar = StatusBar::new(true);
        assert_eq!(bar.format(Preset::Classic, ColorScheme::True, 10).chars().count(), 10);
    }

    #[test]
    fn test_height_follows_visibility() {
        assert_eq!(StatusBar::new(true).height(), 1);
        assert_eq!(StatusBar::new(false).height(), 0);
    }
}
