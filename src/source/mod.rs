//! Frame sources feeding the converter.
//!
//! Anything implementing [`FrameSource`] can drive the viewer.
//! [`TestPattern`] is always available so the viewer runs without a device;
//! [`CameraSource`] reads a webcam and is only built with the `camera`
//! feature.

#[cfg(feature = "camera")]
mod camera;
mod pattern;
mod types;

#[cfg(feature = "camera")]
pub use camera::CameraSource;
pub use pattern::TestPattern;
pub use types::{CaptureError, ChannelOrder, Frame, FrameFormat, FrameSource};
