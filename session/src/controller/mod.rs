use crate::notify::{Notifier, NotifyKind, NotifyOptions};
use crate::state::{SessionPhase, SessionState};
use capture::{CaptureError, MediaKind, Sample};
use detector_api_caller::error::{DetectorApiError, GENERIC_REJECTION_MESSAGE};
use detector_api_caller::json::detection::DetectOutcome;
use detector_api_caller::traits::DetectorApi;
use std::sync::Arc;
use utils::struct_name;

const STRUCT_NAME: &str = struct_name!(SessionState);

pub const UNIFORM_PRESENT_MESSAGE: &str = "Uniform detected";
pub const UNIFORM_ABSENT_MESSAGE: &str = "No uniform detected";

/// One capture mode's controller. The same type serves all three modes; the
/// sample's [`MediaKind`] picks the endpoint, and the outcome shape (single
/// result vs per-frame sequence) rides in [`DetectOutcome`].
///
/// Every failure is absorbed here: each maps to exactly one notification and
/// at most one state transition, and the operator can always retry.
pub struct Session<N> {
    state: SessionState,
    detector_api: Arc<dyn DetectorApi>,
    notifier: Arc<N>,
    service_confidence: f64,
    notify_options: NotifyOptions,
}

impl<N: Notifier> Session<N> {
    pub fn new(
        detector_api: Arc<dyn DetectorApi>,
        notifier: Arc<N>,
        service_confidence: f64,
        notify_options: NotifyOptions,
    ) -> Self {
        Self {
            state: SessionState::default(),
            detector_api,
            notifier,
            service_confidence,
            notify_options,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Accepts a freshly acquired sample. The previous sample (and its
    /// preview file) is released, and any prior result is cleared with it.
    pub fn choose_sample(&mut self, sample: Sample) {
        tracing::debug!(
            "New {:?} sample chosen ({} bytes)",
            sample.kind(),
            sample.payload().len()
        );
        self.state.replace_sample(sample);
    }

    /// Absorbs an acquisition failure. Pre-submit validation failures
    /// (nothing chosen, wrong media kind) leave the state untouched; real
    /// capture failures move the session to `Failed`. Either way the
    /// operator hears about it exactly once.
    pub fn report_capture_error(&mut self, error: &CaptureError) {
        match error {
            CaptureError::NoFileSelected | CaptureError::WrongMediaKind(_) => (),
            CaptureError::CameraUnavailable(_)
            | CaptureError::FileRead { .. }
            | CaptureError::FrameEncode(_)
            | CaptureError::PreviewWrite(_) => {
                self.state.fail(self.clear_result_on_failure());
            }
        }

        self.notifier
            .notify(NotifyKind::Error, &error.to_string(), self.notify_options);
    }

    /// Submits the current sample: one request, one terminal transition, one
    /// notification. With no sample chosen, no request goes out and the
    /// state does not move.
    pub async fn submit(&mut self) {
        if self.state.phase() == SessionPhase::AwaitingResult {
            // The trigger is supposed to be disabled while a request is in
            // flight; nothing is queued or cancelled.
            tracing::warn!("Submit requested while {STRUCT_NAME} is awaiting a result; ignored");
            return;
        }

        let Some(sample) = self.state.sample() else {
            self.notifier.notify(
                NotifyKind::Error,
                &CaptureError::NoFileSelected.to_string(),
                self.notify_options,
            );
            return;
        };

        let payload = sample.payload();
        let kind = sample.kind();

        // Observers must see the in-flight phase before the call suspends.
        self.state.set_awaiting();

        let result = match kind {
            MediaKind::Image => self
                .detector_api
                .detect_image(payload, self.service_confidence)
                .await
                .map(DetectOutcome::Single),
            MediaKind::Frame => self
                .detector_api
                .detect_live_frame(payload, self.service_confidence)
                .await
                .map(DetectOutcome::Single),
            MediaKind::Video => self
                .detector_api
                .detect_video(payload, self.service_confidence)
                .await
                .map(DetectOutcome::PerFrame),
        };

        match result {
            Ok(outcome) => {
                let verdict = verdict::decide_outcome(&outcome);
                self.state.complete(outcome, verdict);

                let (notify_kind, message) = if verdict {
                    (NotifyKind::Success, UNIFORM_PRESENT_MESSAGE)
                } else {
                    (NotifyKind::Error, UNIFORM_ABSENT_MESSAGE)
                };
                self.notifier
                    .notify(notify_kind, message, self.notify_options);
            }
            Err(error) => {
                tracing::debug!("Detection call failed: {error:?}");
                self.state.fail(self.clear_result_on_failure());
                self.notifier.notify(
                    NotifyKind::Error,
                    &rejection_message(&error),
                    self.notify_options,
                );
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn force_awaiting(&mut self) {
        self.state.set_awaiting();
    }

    // Image and live sessions drop their stale result on failure; a video
    // session has nothing to clear beyond the preview.
    fn clear_result_on_failure(&self) -> bool {
        !matches!(
            self.state.sample().map(Sample::kind),
            Some(MediaKind::Video)
        )
    }
}

fn rejection_message(error: &DetectorApiError) -> String {
    match error {
        // Verbatim service detail
        DetectorApiError::ServiceRejected(detail) => detail.clone(),
        // "Could not reach detection service"
        DetectorApiError::Transport(_) => error.to_string(),
        DetectorApiError::MalformedResponse(_) => GENERIC_REJECTION_MESSAGE.to_string(),
    }
}
