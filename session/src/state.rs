use capture::Sample;
use detector_api_caller::json::detection::DetectOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No sample chosen yet
    Idle,
    /// Sample acquired, preview available, nothing submitted
    Captured,
    /// Request in flight
    AwaitingResult,
    /// Result and verdict available
    Ready,
    /// Last submission failed; retryable
    Failed,
}

/// The per-mode mutable record. Only the owning controller mutates it; the
/// presentation side reads it through the accessors.
#[must_use]
#[derive(Debug)]
pub struct SessionState {
    phase: SessionPhase,
    sample: Option<Sample>,
    outcome: Option<DetectOutcome>,
    verdict: Option<bool>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Idle,
            sample: None,
            outcome: None,
            verdict: None,
        }
    }
}

impl SessionState {
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn sample(&self) -> Option<&Sample> {
        self.sample.as_ref()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&DetectOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn verdict(&self) -> Option<bool> {
        self.verdict
    }

    /// Replaces the current sample. Dropping the previous one releases its
    /// preview file. Any prior result belongs to that sample, so it goes too.
    pub(crate) fn replace_sample(&mut self, sample: Sample) {
        self.sample = Some(sample);
        self.outcome = None;
        self.verdict = None;
        self.phase = SessionPhase::Captured;
    }

    pub(crate) fn set_awaiting(&mut self) {
        self.phase = SessionPhase::AwaitingResult;
    }

    /// The terminal success transition. Outcome, verdict and phase move
    /// together so an observer can never see a partial result.
    pub(crate) fn complete(&mut self, outcome: DetectOutcome, verdict: bool) {
        self.outcome = Some(outcome);
        self.verdict = Some(verdict);
        self.phase = SessionPhase::Ready;
    }

    pub(crate) fn fail(&mut self, clear_result: bool) {
        if clear_result {
            self.outcome = None;
            self.verdict = None;
        }
        self.phase = SessionPhase::Failed;
    }
}
