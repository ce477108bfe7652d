use crate::error::DetectorApiError;
use crate::json::detection::{DetectionResult, VideoDetectionResult};
use crate::json::health::Health;
use async_trait::async_trait;
use bytes::Bytes;

/// The remote uniform-detection service, as seen by this program.
///
/// Every method is one request; nothing here retries. The `confidence`
/// argument is the service-side filtering threshold forwarded verbatim as a
/// query parameter. It is unrelated to the local decision threshold that
/// turns detections into a verdict.
#[async_trait]
pub trait DetectorApi: Send + Sync {
    /// Attempt a call to the API that only tests whether the service and its
    /// model are up.
    #[must_use]
    async fn health(&self) -> Result<Health, DetectorApiError>;

    /// Submit one still image.
    #[must_use]
    async fn detect_image(
        &self,
        image: Bytes,
        confidence: f64,
    ) -> Result<DetectionResult, DetectorApiError>;

    /// Submit one video file. The service samples frames internally and
    /// returns one result per sampled frame.
    #[must_use]
    async fn detect_video(
        &self,
        video: Bytes,
        confidence: f64,
    ) -> Result<VideoDetectionResult, DetectorApiError>;

    /// Submit one JPEG frame captured from a live camera.
    #[must_use]
    async fn detect_live_frame(
        &self,
        frame: Bytes,
        confidence: f64,
    ) -> Result<DetectionResult, DetectorApiError>;
}
