//! Live-camera acquisition.
//!
//! The stream is the one long-lived resource in the whole program, so its
//! lifetime is pinned down hard: `stop` is idempotent, and `Drop` calls it,
//! so the device is released on every exit path, not just the explicit stop.

use crate::{CaptureError, MediaKind, Sample};
use nokhwa::Camera;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};

const JPEG_QUALITY: u8 = 90;

/// An open camera stream that can produce still frames on demand.
pub trait CameraStream {
    /// Native resolution of the stream, (width, height).
    fn resolution(&self) -> (u32, u32);

    /// Grabs the current frame and encodes it as a JPEG [`Sample`].
    fn capture_frame(&mut self) -> Result<Sample, CaptureError>;

    /// Releases the underlying device. Safe to call more than once; only the
    /// first call does anything.
    fn stop(&mut self);
}

/// Opens the camera at `index` and starts its stream.
pub fn open_camera(index: u32) -> Result<Box<dyn CameraStream>, CaptureError> {
    let requested =
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);

    let mut camera = Camera::new(CameraIndex::Index(index), requested)
        .map_err(|e| CaptureError::CameraUnavailable(e.to_string()))?;

    camera
        .open_stream()
        .map_err(|e| CaptureError::CameraUnavailable(e.to_string()))?;

    let resolution = camera.resolution();
    tracing::info!(
        "Opened camera {index} at {}x{}",
        resolution.width(),
        resolution.height()
    );

    Ok(Box::new(NokhwaCameraStream {
        camera,
        stopped: false,
    }))
}

struct NokhwaCameraStream {
    camera: Camera,
    stopped: bool,
}

impl CameraStream for NokhwaCameraStream {
    fn resolution(&self) -> (u32, u32) {
        let resolution = self.camera.resolution();
        (resolution.width(), resolution.height())
    }

    fn capture_frame(&mut self) -> Result<Sample, CaptureError> {
        let buffer = self
            .camera
            .frame()
            .map_err(|e| CaptureError::CameraUnavailable(e.to_string()))?;

        let frame = buffer
            .decode_image::<RgbFormat>()
            .map_err(|e| CaptureError::FrameEncode(e.to_string()))?;

        let mut jpeg = Vec::new();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
        image::DynamicImage::ImageRgb8(frame)
            .write_with_encoder(encoder)
            .map_err(|e| CaptureError::FrameEncode(e.to_string()))?;

        tracing::debug!("Captured frame of {} bytes", jpeg.len());

        Sample::new(jpeg.into(), MediaKind::Frame)
    }

    fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;

        match self.camera.stop_stream() {
            Ok(()) => tracing::info!("Camera stream released"),
            Err(e) => tracing::error!("Failed to release camera stream: {e}"),
        }
    }
}

impl Drop for NokhwaCameraStream {
    fn drop(&mut self) {
        self.stop();
    }
}
