use crate::controller::Session;
use crate::notify::Notifier;
use crate::state::SessionState;
use capture::CaptureError;
use capture::camera::CameraStream;

/// The live-capture mode: a [`Session`] plus exclusive ownership of the
/// camera stream.
///
/// The stream is opened at most once per activation and released on every
/// deactivation path. An explicit [`stop_camera`](Self::stop_camera) exists
/// for the normal path; dropping this struct releases the stream too, so an
/// abrupt exit cannot leak the device.
pub struct LiveSession<N> {
    session: Session<N>,
    camera: Option<Box<dyn CameraStream>>,
}

impl<N: Notifier> LiveSession<N> {
    pub fn new(session: Session<N>) -> Self {
        Self {
            session,
            camera: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        self.session.state()
    }

    #[must_use]
    pub fn camera_is_open(&self) -> bool {
        self.camera.is_some()
    }

    /// Opens the camera through `opener`. A second call while the stream is
    /// open is ignored; an open failure is absorbed by the session like any
    /// other capture error.
    pub fn start_camera<F>(&mut self, opener: F, index: u32)
    where
        F: Fn(u32) -> Result<Box<dyn CameraStream>, CaptureError>,
    {
        if self.camera.is_some() {
            tracing::warn!("Camera is already open; ignoring start request");
            return;
        }

        match opener(index) {
            Ok(camera) => {
                self.camera = Some(camera);
            }
            Err(error) => {
                self.session.report_capture_error(&error);
            }
        }
    }

    /// Grabs the current frame from the open stream and submits it. May be
    /// invoked repeatedly while the stream stays open.
    pub async fn capture_and_submit(&mut self) {
        let Some(camera) = self.camera.as_mut() else {
            self.session
                .report_capture_error(&CaptureError::CameraUnavailable(
                    "Camera is not started".to_string(),
                ));
            return;
        };

        match camera.capture_frame() {
            Ok(sample) => {
                self.session.choose_sample(sample);
                self.session.submit().await;
            }
            Err(error) => {
                self.session.report_capture_error(&error);
            }
        }
    }

    /// Releases the stream. Idempotent; also happens implicitly on drop.
    pub fn stop_camera(&mut self) {
        if let Some(mut camera) = self.camera.take() {
            camera.stop();
        }
    }
}
