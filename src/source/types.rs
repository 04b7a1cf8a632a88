//! Frame types and the capture-source contract.

/// Channel layout of a captured frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameFormat {
    /// R, G, B (3 bytes per pixel)
    Rgb,
    /// B, G, R (3 bytes per pixel). What most webcam stacks hand out.
    #[default]
    Bgr,
    /// R, G, B, A (4 bytes per pixel, alpha ignored)
    Rgba,
    /// B, G, R, A (4 bytes per pixel, alpha ignored)
    Bgra,
}

impl FrameFormat {
    /// Number of bytes per pixel.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            FrameFormat::Rgb | FrameFormat::Bgr => 3,
            FrameFormat::Rgba | FrameFormat::Bgra => 4,
        }
    }

    /// Order of the first three color channels.
    pub fn channel_order(&self) -> ChannelOrder {
        match self {
            FrameFormat::Rgb | FrameFormat::Rgba => ChannelOrder::Rgb,
            FrameFormat::Bgr | FrameFormat::Bgra => ChannelOrder::Bgr,
        }
    }
}

/// Order of the three color samples of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
    Bgr,
}

impl ChannelOrder {
    /// Reorder a sample from this order into R, G, B.
    #[inline]
    pub fn to_rgb(self, sample: [u8; 3]) -> [u8; 3] {
        match self {
            ChannelOrder::Rgb => sample,
            ChannelOrder::Bgr => [sample[2], sample[1], sample[0]],
        }
    }

    /// Reorder an R, G, B triple back into this order.
    #[inline]
    pub fn rgb_to_order(self, rgb: [u8; 3]) -> [u8; 3] {
        match self {
            ChannelOrder::Rgb => rgb,
            ChannelOrder::Bgr => [rgb[2], rgb[1], rgb[0]],
        }
    }
}

/// A captured video frame.
///
/// Owned by the capture source. The converter only borrows it for the
/// duration of one conversion.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw pixel data, row-major, no row padding
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Pixel format
    pub format: FrameFormat,
}

impl Frame {
    /// Wrap raw pixel data.
    pub fn new(data: Vec<u8>, width: u32, height: u32, format: FrameFormat) -> Self {
        Self {
            data,
            width,
            height,
            format,
        }
    }

    /// Get the number of bytes per pixel.
    pub fn bytes_per_pixel(&self) -> usize {
        self.format.bytes_per_pixel()
    }

    /// Bytes the pixel data must hold for the declared dimensions.
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * self.bytes_per_pixel()
    }
}

/// Errors reported by a frame source.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// The source had no frame ready
    #[error("No frame available from capture source")]
    NoFrame,
    /// The source was closed or reached its end
    #[error("Capture source closed")]
    Closed,
    /// Device-level failure
    #[error("Capture device error: {0}")]
    Device(String),
}

/// Anything that can hand out frames on demand.
///
/// A source must report [`CaptureError::NoFrame`] rather than repeating an
/// old frame or fabricating a blank one.
pub trait FrameSource {
    /// Fetch the next frame.
    fn next_frame(&mut self) -> Result<Frame, CaptureError>;

    /// Human-readable source name for the status line.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_per_pixel() {
        assert_eq!(FrameFormat::Rgb.bytes_per_pixel(), 3);
        assert_eq!(FrameFormat::Bgr.bytes_per_pixel(), 3);
        assert_eq!(FrameFormat::Rgba.bytes_per_pixel(), 4);
        assert_eq!(FrameFormat::Bgra.bytes_per_pixel(), 4);
    }

    #[test]
    fn test_default_format_is_bgr() {
        assert_eq!(FrameFormat::default(), FrameFormat::Bgr);
    }

    #[test]
    fn test_channel_order_roundtrip() {
        let sample = [10, 20, 30];
        assert_eq!(ChannelOrder::Bgr.to_rgb(sample), [30, 20, 10]);
        assert_eq!(ChannelOrder::Rgb.to_rgb(sample), sample);
        for order in [ChannelOrder::Rgb, ChannelOrder::Bgr] {
            assert_eq!(order.rgb_to_order(order.to_rgb(sample)), sample);
        }
    }

    #[test]
    fn test_expected_len() {
        let frame = Frame::new(vec![0; 24], 2, 3, FrameFormat::Rgba);
        assert_eq!(frame.expected_len(), 24);
    }

    #[test]
    fn test_capture_error_display() {
        assert_eq!(
            format!("{}", CaptureError::NoFrame),
            "No frame available from capture source"
        );
        assert_eq!(
            format!("{}", CaptureError::Device("busy".to_string())),
            "Capture device error: busy"
        );
    }
}
