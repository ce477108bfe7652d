//! Wire types returned by the detection endpoints.
//!
//! All values coming from the service are untrusted and passed through as
//! received: confidences are not clamped to [0, 1], labels carry no
//! invariant, and bounding boxes are opaque four-number tuples kept only for
//! display.

use serde::Deserialize;

/// One located object instance within a sample.
#[must_use]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Detection {
    pub confidence: f64,
    #[serde(rename = "class")]
    pub class_label: String,
    pub bbox: [f64; 4],
}

/// The parsed outcome of one detection call. Detections keep the order the
/// service returned them in.
#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DetectionResult {
    #[serde(default)]
    pub detections: Vec<Detection>,
    #[serde(default)]
    pub detections_count: Option<usize>,
    #[serde(default)]
    pub image_width: Option<u32>,
    #[serde(default)]
    pub image_height: Option<u32>,
}

impl DetectionResult {
    pub fn new(detections: Vec<Detection>) -> Self {
        Self {
            detections_count: Some(detections.len()),
            detections,
            image_width: None,
            image_height: None,
        }
    }

    /// The service-declared count, falling back to the list length. Per-frame
    /// video results omit the count field.
    #[must_use]
    pub fn count(&self) -> usize {
        self.detections_count.unwrap_or(self.detections.len())
    }
}

/// One `DetectionResult` per sampled frame, in frame order.
#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VideoDetectionResult {
    pub results: Vec<DetectionResult>,
}

/// What one detection call produced, across all three endpoints.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum DetectOutcome {
    Single(DetectionResult),
    PerFrame(VideoDetectionResult),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_image_response() {
        let body = r#"{
            "filename": "person.jpg",
            "confidence_threshold": 0.25,
            "detections_count": 2,
            "detections": [
                {"confidence": 0.95, "class": "uniforme_senati", "bbox": [10.0, 20.0, 110.0, 220.0]},
                {"confidence": 0.41, "class": "uniforme_senati", "bbox": [5.5, 6.5, 50.0, 60.0]}
            ]
        }"#;

        let result: DetectionResult = serde_json::from_str(body).unwrap();

        assert_eq!(result.count(), 2);
        // Order must stay as returned by the service
        assert_eq!(result.detections[0].confidence, 0.95);
        assert_eq!(result.detections[1].confidence, 0.41);
        assert_eq!(result.detections[0].class_label, "uniforme_senati");
        assert_eq!(result.detections[1].bbox, [5.5, 6.5, 50.0, 60.0]);
    }

    #[test]
    fn parse_empty_image_response() {
        let body = r#"{"detections_count": 0, "detections": []}"#;
        let result: DetectionResult = serde_json::from_str(body).unwrap();
        assert!(result.detections.is_empty());
        assert_eq!(result.count(), 0);
    }

    #[test]
    fn parse_video_response_without_per_frame_counts() {
        let body = r#"{
            "results": [
                {"detections": []},
                {"detections": [{"confidence": 0.92, "class": "uniforme_senati", "bbox": [1.0, 2.0, 3.0, 4.0]}]}
            ]
        }"#;

        let result: VideoDetectionResult = serde_json::from_str(body).unwrap();

        assert_eq!(result.results.len(), 2);
        assert_eq!(result.results[0].count(), 0);
        assert_eq!(result.results[1].count(), 1);
        assert_eq!(result.results[1].detections[0].confidence, 0.92);
    }

    #[test]
    fn out_of_range_confidence_is_passed_through() {
        let body = r#"{"detections": [{"confidence": 1.7, "class": "x", "bbox": [0,0,0,0]}]}"#;
        let result: DetectionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.detections[0].confidence, 1.7);
    }
}
