//! Test doubles for the camera seam. The counters let tests assert the
//! resource law: every successful open is matched by exactly one stop.

use crate::camera::CameraStream;
use crate::{CaptureError, MediaKind, Sample};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct CameraCounters {
    pub opens: AtomicUsize,
    pub stops: AtomicUsize,
    pub frames: AtomicUsize,
}

impl CameraCounters {
    #[must_use]
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn stops(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames.load(Ordering::SeqCst)
    }
}

pub struct TestCameraStream {
    counters: Arc<CameraCounters>,
    frame_payload: Vec<u8>,
    stopped: bool,
}

impl CameraStream for TestCameraStream {
    fn resolution(&self) -> (u32, u32) {
        (640, 480)
    }

    fn capture_frame(&mut self) -> Result<Sample, CaptureError> {
        self.counters.frames.fetch_add(1, Ordering::SeqCst);
        Sample::new(self.frame_payload.clone().into(), MediaKind::Frame)
    }

    fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        self.counters.stops.fetch_add(1, Ordering::SeqCst);
    }
}

impl Drop for TestCameraStream {
    fn drop(&mut self) {
        self.stop();
    }
}

/// An opener closure in the shape the session layer expects, backed by
/// [`TestCameraStream`]. When `available` is false, every open fails with
/// `CameraUnavailable` and nothing is counted as opened.
pub fn make_test_camera_opener(
    counters: Arc<CameraCounters>,
    frame_payload: Vec<u8>,
    available: bool,
) -> impl Fn(u32) -> Result<Box<dyn CameraStream>, CaptureError> {
    move |_index| {
        if !available {
            return Err(CaptureError::CameraUnavailable(
                "Permission denied".to_string(),
            ));
        }
        counters.opens.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(TestCameraStream {
            counters: counters.clone(),
            frame_payload: frame_payload.clone(),
            stopped: false,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_is_counted_once_even_with_drop() {
        let counters = Arc::new(CameraCounters::default());
        let opener = make_test_camera_opener(counters.clone(), b"frame".to_vec(), true);

        let mut stream = opener(0).unwrap();
        assert_eq!(counters.opens(), 1);

        stream.stop();
        stream.stop();
        drop(stream);

        assert_eq!(counters.stops(), 1);
    }

    #[test]
    fn unavailable_camera_fails_to_open() {
        let counters = Arc::new(CameraCounters::default());
        let opener = make_test_camera_opener(counters.clone(), vec![], false);

        match opener(0) {
            Err(CaptureError::CameraUnavailable(_)) => (),
            other => panic!("Expected CameraUnavailable, got: {:?}", other.map(|_| ())),
        }
        assert_eq!(counters.opens(), 0);
        assert_eq!(counters.stops(), 0);
    }
}
