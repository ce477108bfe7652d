//! The decision rule that turns raw detections into the single "uniform
//! present / uniform absent" answer shown to the operator.
//!
//! Everything here is pure and total. Confidences are taken as the service
//! sent them; out-of-range values are not clamped or rejected.

use detector_api_caller::json::detection::{DetectOutcome, DetectionResult};

/// The local decision threshold. A single detection at or above this value
/// makes the whole submission a "uniform present".
///
/// Not to be confused with the service-side filtering `confidence` query
/// parameter (default 0.25), which only controls what the service bothers to
/// return. All capture modes share this one constant so they cannot drift
/// apart.
pub const DECISION_THRESHOLD: f64 = 0.90;

/// True iff any detection in the result reaches `threshold`. An empty result
/// is a clean "absent".
#[must_use]
pub fn decide(result: &DetectionResult, threshold: f64) -> bool {
    result.detections.iter().any(|d| d.confidence >= threshold)
}

/// True iff [`decide`] holds for at least one element. An empty sequence is
/// "absent".
#[must_use]
pub fn decide_frames<'a>(
    results: impl IntoIterator<Item = &'a DetectionResult>,
    threshold: f64,
) -> bool {
    results.into_iter().any(|r| decide(r, threshold))
}

/// Applies the fixed [`DECISION_THRESHOLD`] to whatever one detection call
/// produced.
#[must_use]
pub fn decide_outcome(outcome: &DetectOutcome) -> bool {
    match outcome {
        DetectOutcome::Single(result) => decide(result, DECISION_THRESHOLD),
        DetectOutcome::PerFrame(video) => decide_frames(&video.results, DECISION_THRESHOLD),
    }
}
