//! Webcam capture through nokhwa.
//!
//! The camera is opened and read on a background thread because
//! `nokhwa::Camera` is not `Send`. The thread keeps only the most recent
//! frame; [`CameraSource::next_frame`] takes it out of the slot, so a frame
//! is handed out at most once and a slow camera shows up as
//! [`CaptureError::NoFrame`].

use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    CameraFormat, CameraIndex, FrameFormat as NokhwaFrameFormat, RequestedFormat,
    RequestedFormatType, Resolution,
};
use nokhwa::Camera;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::types::{CaptureError, Frame, FrameFormat, FrameSource};

/// Latest captured frame, or the error that stopped the capture thread.
type Slot = Arc<Mutex<Option<Result<Frame, CaptureError>>>>;

/// Live webcam frame source.
pub struct CameraSource {
    name: String,
    slot: Slot,
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for CameraSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraSource")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl CameraSource {
    /// Open camera `index` and start streaming at roughly `width` x `height`.
    ///
    /// # Errors
    /// [`CaptureError::Device`] if the camera cannot be opened or its stream
    /// cannot be started.
    pub fn open(index: u32, width: u32, height: u32, fps: u32) -> Result<Self, CaptureError> {
        let slot: Slot = Arc::new(Mutex::new(None));
        let stop = Arc::new(AtomicBool::new(false));
        let (ready_tx, ready_rx) = mpsc::channel::<Result<String, CaptureError>>();

        let thread_slot = Arc::clone(&slot);
        let thread_stop = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            let mut camera = match open_camera(index, width, height, fps) {
                Ok(camera) => camera,
                Err(e) => {
                    let _ = ready_tx.send(Err(e));
                    return;
                }
            };
            let _ = ready_tx.send(Ok(camera.info().human_name()));
            capture_loop(&mut camera, &thread_slot, &thread_stop);
            let _ = camera.stop_stream();
        });

        match ready_rx.recv() {
            Ok(Ok(name)) => {
                log::info!("Opened camera {}: {}", index, name);
                Ok(Self {
                    name,
                    slot,
                    stop,
                    thread: Some(handle),
                })
            }
            Ok(Err(e)) => {
                let _ = handle.join();
                Err(e)
            }
            Err(_) => {
                let _ = handle.join();
                Err(CaptureError::Device(format!(
                    "camera {} thread exited during startup",
                    index
                )))
            }
        }
    }
}

/// Open the camera, trying common formats before letting it choose.
fn open_camera(index: u32, width: u32, height: u32, fps: u32) -> Result<Camera, CaptureError> {
    let resolution = Resolution::new(width, height);
    let attempts = [
        RequestedFormatType::Closest(CameraFormat::new(resolution, NokhwaFrameFormat::MJPEG, fps)),
        RequestedFormatType::Closest(CameraFormat::new(resolution, NokhwaFrameFormat::YUYV, fps)),
        RequestedFormatType::AbsoluteHighestFrameRate,
    ];

    let mut last_error = None;
    for requested in attempts {
        let label = format!("{:?}", requested);
        match Camera::new(
            CameraIndex::Index(index),
            RequestedFormat::new::<RgbFormat>(requested),
        ) {
            Ok(mut camera) => {
                camera.open_stream().map_err(|e| {
                    CaptureError::Device(format!("camera {}: cannot start stream: {}", index, e))
                })?;
                return Ok(camera);
            }
            Err(e) => {
                log::debug!("Camera {} rejected format {}: {}", index, label, e);
                last_error = Some(e.to_string());
            }
        }
    }

    Err(CaptureError::Device(format!(
        "could not open camera {}: {}",
        index,
        last_error.unwrap_or_else(|| "no usable format".to_string())
    )))
}

/// Read frames until asked to stop, keeping only the newest.
fn capture_loop(camera: &mut Camera, slot: &Slot, stop: &AtomicBool) {
    while !stop.load(Ordering::Relaxed) {
        let result = match camera.frame() {
            Ok(buffer) => match buffer.decode_image::<RgbFormat>() {
                Ok(image) => {
                    let (w, h) = image.dimensions();
                    Ok(Frame::new(image.into_raw(), w, h, FrameFormat::Rgb))
                }
                Err(e) => {
                    // A corrupt frame is not fatal; wait for the next one.
                    log::debug!("Dropping undecodable camera frame: {}", e);
                    continue;
                }
            },
            Err(e) => Err(CaptureError::Device(e.to_string())),
        };

        let fatal = result.is_err();
        if let Ok(mut guard) = slot.lock() {
            *guard = Some(result);
        }
        if fatal {
            return;
        }
        thread::sleep(Duration::from_millis(1));
    }
}

impl FrameSource for CameraSource {
    fn next_frame(&mut self) -> Result<Frame, CaptureError> {
        let taken = self
            .slot
            .lock()
            .map_err(|_| CaptureError::Device("capture thread panicked".to_string()))?
            .take();
        match taken {
            Some(result) => result,
            None if self.thread.as_ref().is_some_and(JoinHandle::is_finished) => {
                Err(CaptureError::Closed)
            }
            None => Err(CaptureError::NoFrame),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for CameraSource {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_device_is_device_error() {
        // No machine running the tests has this many cameras.
        match CameraSource::open(9999, 640, 480, 30) {
            Err(CaptureError::Device(msg)) => assert!(msg.contains("9999"), "{}", msg),
            Err(other) => panic!("expected Device error, got {:?}", other),
            Ok(_) => panic!("camera 9999 unexpectedly opened"),
        }
    }
}
