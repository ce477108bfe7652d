use crate::error::DetectorApiError;
use crate::json::detection::{DetectionResult, VideoDetectionResult};
use crate::json::health::Health;
use crate::traits::DetectorApi;
use async_trait::async_trait;
use bytes::Bytes;

mockall::mock! {
    pub DetectorApiMock {}

    #[async_trait]
    impl DetectorApi for DetectorApiMock {
        async fn health(&self) -> Result<Health, DetectorApiError>;
        async fn detect_image(
            &self,
            image: Bytes,
            confidence: f64,
        ) -> Result<DetectionResult, DetectorApiError>;
        async fn detect_video(
            &self,
            video: Bytes,
            confidence: f64,
        ) -> Result<VideoDetectionResult, DetectorApiError>;
        async fn detect_live_frame(
            &self,
            frame: Bytes,
            confidence: f64,
        ) -> Result<DetectionResult, DetectorApiError>;
    }
}
