//! Synthetic frame source for running without a camera.
//!
//! Produces a deterministic animated BGR frame: a hue sweep across the
//! width, darkened toward the edges, with a bright disc orbiting the center.

use super::types::{CaptureError, Frame, FrameFormat, FrameSource};

/// Animated test pattern generator.
#[derive(Debug, Clone)]
pub struct TestPattern {
    width: u32,
    height: u32,
    tick: u64,
    /// Stop after this many frames (None = endless)
    limit: Option<u64>,
}

impl TestPattern {
    /// Create an endless pattern of the given resolution.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tick: 0,
            limit: None,
        }
    }

    /// Stop producing frames after `frames` frames.
    pub fn with_limit(mut self, frames: u64) -> Self {
        self.limit = Some(frames);
        self
    }

    /// Render frame number `tick` without advancing the generator.
    pub fn render(&self, tick: u64) -> Frame {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut data = Vec::with_capacity(w * h * 3);

        let center_x = w as f32 / 2.0;
        let center_y = h as f32 / 2.0;
        let max_dist = (center_x.powi(2) + center_y.powi(2)).sqrt().max(1.0);

        // Disc orbits the center once every 120 frames
        let angle = (tick % 120) as f32 / 120.0 * std::f32::consts::TAU;
        let orbit = w.min(h) as f32 / 4.0;
        let disc_x = center_x + orbit * angle.cos();
        let disc_y = center_y + orbit * angle.sin();
        let disc_r = (w.min(h) as f32 / 8.0).max(1.0);

        let shift = (tick * 4 % 256) as u32;

        for y in 0..h {
            for x in 0..w {
                let fx = x as f32 + 0.5;
                let fy = y as f32 + 0.5;
                let dist = ((fx - center_x).powi(2) + (fy - center_y).powi(2)).sqrt();
                let vignette = (1.0 - dist / max_dist).max(0.0);

                let hue = ((x as u32 * 256 / self.width.max(1)) + shift) % 256;
                let [r, g, b] = hue_to_rgb(hue as u8);

                let in_disc = ((fx - disc_x).powi(2) + (fy - disc_y).powi(2)).sqrt() <= disc_r;
                let (r, g, b) = if in_disc {
                    (255, 255, 255)
                } else {
                    (
                        (r as f32 * vignette) as u8,
                        (g as f32 * vignette) as u8,
                        (b as f32 * vignette) as u8,
                    )
                };

                data.extend_from_slice(&[b, g, r]);
            }
        }

        Frame::new(data, self.width, self.height, FrameFormat::Bgr)
    }
}

impl FrameSource for TestPattern {
    fn next_frame(&mut self) -> Result<Frame, CaptureError> {
        if self.width == 0 || self.height == 0 {
            return Err(CaptureError::Device(format!(
                "invalid pattern resolution {}x{}",
                self.width, self.height
            )));
        }
        if let Some(limit) = self.limit {
            if self.tick >= limit {
                return Err(CaptureError::Closed);
            }
        }
        let frame = self.render(self.tick);
        self.tick += 1;
        Ok(frame)
    }

    fn name(&self) -> &str {
        "pattern"
    }
}

/// Piecewise-linear hue wheel, 0..=255 maps once around.
fn hue_to_rgb(hue: u8) -> [u8; 3] {
    let region = hue / 43;
    let rem = (hue - region * 43) as u16 * 6;
    let rise = rem.min(255) as u8;
    let fall = 255 - rise;
    match region {
        0 => [255, rise, 0],
        1 => [fall, 255, 0],
        2 => [0, 255, rise],
        3 => [0, fall, 255],
        4 => [rise, 0, 255],
        _ => [255, 0, fall],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_frame_shape() {
        let mut source = TestPattern::new(64, 48);
        let frame = source.next_frame().unwrap();
        assert_eq!(frame.width, 64);
        assert_eq!(frame.height, 48);
        assert_eq!(frame.format, FrameFormat::Bgr);
        assert_eq!(frame.data.len(), frame.expected_len());
    }

    #[test]
    fn test_pattern_is_deterministic() {
        let source = TestPattern::new(32, 24);
        assert_eq!(source.render(7).data, source.render(7).data);
        assert_ne!(source.render(0).data, source.render(30).data);
    }

    #[test]
    fn test_pattern_limit_reports_closed() {
        let mut source = TestPattern::new(8, 8).with_limit(2);
        assert!(source.next_frame().is_ok());
        assert!(source.next_frame().is_ok());
        assert!(matches!(source.next_frame(), Err(CaptureError::Closed)));
    }

    #[test]
    fn test_zero_resolution_is_device_error() {
        let mut source = TestPattern::new(0, 10);
        assert!(matches!(source.next_frame(), Err(CaptureError::Device(_))));
    }

    #[test]
    fn test_hue_wheel_endpoints() {
        assert_eq!(hue_to_rgb(0), [255, 0, 0]);
        assert_eq!(hue_to_rgb(86), [0, 255, 0]);
    }
}
