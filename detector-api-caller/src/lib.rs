pub mod config;
pub mod error;
pub mod json;
pub mod mocks;
pub mod traits;

use async_trait::async_trait;
use bytes::Bytes;
use config::DetectorApiConfig;
use error::{DetectorApiError, GENERIC_REJECTION_MESSAGE};
use json::detection::{DetectionResult, VideoDetectionResult};
use json::health::Health;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use traits::DetectorApi;

pub fn make_detector_client(config: DetectorApiConfig) -> anyhow::Result<Arc<dyn DetectorApi>> {
    let builder = reqwest::ClientBuilder::new();
    let client = match &config.detector_api_proxy {
        Some(proxy) => builder
            .proxy(reqwest::Proxy::all(proxy)?)
            .build()
            .expect("Client builder with proxy failed"),
        None => builder.build().expect("Client builder failed"),
    };

    let result = DetectorApiClient { client, config };

    Ok(Arc::new(result))
}

struct DetectorApiClient {
    client: reqwest::Client,
    config: DetectorApiConfig,
}

/// Body of every non-2xx response of the service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

impl DetectorApiClient {
    /// One multipart upload, one response. The payload goes in form field
    /// `file`; the service-side filtering threshold goes in the query string.
    async fn post_sample<T: DeserializeOwned>(
        &self,
        endpoint_path: &str,
        payload: Bytes,
        file_name: &str,
        mime: &str,
        confidence: f64,
    ) -> Result<T, DetectorApiError> {
        let base_url = &self.config.detector_api_base_url;
        let url = format!("{base_url}{endpoint_path}");

        let part = reqwest::multipart::Part::stream(payload)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .expect("Constant mime type must parse");
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(url)
            .query(&[("confidence", confidence)])
            .multipart(form)
            .send()
            .await
            .map_err(DetectorApiError::Transport)?;

        let status = response.status();
        if status.is_success() {
            let result = response
                .json::<T>()
                .await
                .map_err(DetectorApiError::MalformedResponse)?;
            tracing::debug!("Call to `{endpoint_path}` succeeded with status {status}");
            return Ok(result);
        }

        // The service reports its reason in a `detail` field. Surface it
        // verbatim when present; anything else becomes the generic message.
        let detail = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.detail)
            .unwrap_or_else(|_| GENERIC_REJECTION_MESSAGE.to_string());

        tracing::debug!("Call to `{endpoint_path}` rejected with status {status}: {detail}");

        Err(DetectorApiError::ServiceRejected(detail))
    }
}

#[async_trait]
impl DetectorApi for DetectorApiClient {
    async fn health(&self) -> Result<Health, DetectorApiError> {
        let base_url = &self.config.detector_api_base_url;
        let url = format!("{base_url}/api/health");

        let response = self
            .client
            .get(url)
            .headers(json_headers_map())
            .send()
            .await
            .map_err(DetectorApiError::Transport)?;

        let health = response
            .json::<Health>()
            .await
            .map_err(DetectorApiError::MalformedResponse)?;

        tracing::debug!("Health call succeeded with output: {health:?}");

        Ok(health)
    }

    async fn detect_image(
        &self,
        image: Bytes,
        confidence: f64,
    ) -> Result<DetectionResult, DetectorApiError> {
        self.post_sample(
            "/api/detect",
            image,
            "sample",
            "application/octet-stream",
            confidence,
        )
        .await
    }

    async fn detect_video(
        &self,
        video: Bytes,
        confidence: f64,
    ) -> Result<VideoDetectionResult, DetectorApiError> {
        self.post_sample(
            "/api/detect/video",
            video,
            "sample",
            "application/octet-stream",
            confidence,
        )
        .await
    }

    async fn detect_live_frame(
        &self,
        frame: Bytes,
        confidence: f64,
    ) -> Result<DetectionResult, DetectorApiError> {
        // Live frames are always JPEG; the capture layer encodes them itself.
        self.post_sample(
            "/api/detect/live-frame",
            frame,
            "frame.jpg",
            "image/jpeg",
            confidence,
        )
        .await
    }
}

fn json_headers_map() -> reqwest::header::HeaderMap {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        "Accept",
        "application/json".parse().expect("Parsing must work"),
    );
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    pub fn base_url() -> String {
        "http://127.0.0.1:8000".to_string()
    }

    #[fixture]
    fn config(base_url: String) -> DetectorApiConfig {
        DetectorApiConfig {
            detector_api_base_url: base_url,
            detector_api_proxy: None,
        }
    }

    #[tokio::test]
    #[rstest]
    #[ignore = "If you want to run this, start the detection service, set the fixture url then run it"]
    async fn health(config: DetectorApiConfig) {
        let client = make_detector_client(config).unwrap();
        let health = client.health().await.unwrap();
        println!("Health: {health:?}");
    }

    #[tokio::test]
    #[rstest]
    #[ignore = "If you want to run this, start the detection service, set the image path then run it"]
    async fn detect_image(config: DetectorApiConfig) {
        let image = std::fs::read("test.jpg").unwrap();
        let client = make_detector_client(config).unwrap();
        let result = client.detect_image(image.into(), 0.25).await.unwrap();
        println!("Detections ({}): {:?}", result.count(), result.detections);
    }

    #[tokio::test]
    #[rstest]
    #[ignore = "If you want to run this, start the detection service, set the video path then run it"]
    async fn detect_video(config: DetectorApiConfig) {
        let video = std::fs::read("test.mp4").unwrap();
        let client = make_detector_client(config).unwrap();
        let result = client.detect_video(video.into(), 0.25).await.unwrap();
        println!("Frames analyzed: {}", result.results.len());
    }

    #[rstest]
    fn transport_failure_is_distinguishable(config: DetectorApiConfig) {
        // Port 9 on localhost is the discard service; nothing listens there
        // in practice, so the request never gets a response.
        let config = DetectorApiConfig {
            detector_api_base_url: "http://127.0.0.1:9".to_string(),
            ..config
        };
        let client = make_detector_client(config).unwrap();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let result = runtime.block_on(client.detect_image(Bytes::from_static(b"xx"), 0.25));

        match result {
            Err(DetectorApiError::Transport(_)) => (),
            other => panic!("Expected a transport error, got: {other:?}"),
        }
    }
}
