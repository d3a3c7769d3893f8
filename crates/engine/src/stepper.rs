//! Five-stage stepper state machine.
//!
//! The stepper advances through the fixed stage catalog one step at a time.
//! Each step is a three-phase transition driven by messages from the UI
//! loop: [`Stepper::begin`] marks the step in flight, [`Stepper::resolve`]
//! applies the drawn outcome after the simulated latency, and
//! [`Stepper::settle`] advances past a successful step after the settle
//! delay. A failed step stays on the same stage until the user retries.

use flowdeck_types::{LogEntry, MockOutcome, Stage, stage_count, stages};
use thiserror::Error;

/// Outcome state of the most recent step attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Why an advance request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("a step is already in flight")]
    InFlight,
    #[error("all stages are complete")]
    Complete,
}

/// Mutable state of the integration demo.
///
/// `current_stage` counts completed stages and never decreases; the demo is
/// terminal once it reaches the stage count. The activity log is append-only
/// and has no size cap.
#[derive(Debug, Default)]
pub struct Stepper {
    current_stage: usize,
    loading: bool,
    status: StepStatus,
    last_outcome: Option<MockOutcome>,
    activity: Vec<LogEntry>,
}

impl Stepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next stage to run; equals the stage count when complete.
    pub fn current_stage(&self) -> usize {
        self.current_stage
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status(&self) -> StepStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.current_stage >= stage_count()
    }

    /// The stage the next advance would run, `None` once the demo is done.
    pub fn active_stage(&self) -> Option<&'static Stage> {
        stages().get(self.current_stage)
    }

    /// Completed share of the demo, `0.0..=1.0`.
    pub fn progress_ratio(&self) -> f64 {
        self.current_stage as f64 / stage_count() as f64
    }

    pub fn last_outcome(&self) -> Option<&MockOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn activity(&self) -> &[LogEntry] {
        &self.activity
    }

    /// Start the next step (or retry the failed one).
    ///
    /// Rejected while a step is in flight or once all stages are consumed;
    /// on acceptance the step is marked loading and exactly one log entry is
    /// appended before any timer runs.
    pub fn begin(&mut self) -> Result<&'static Stage, StepError> {
        if self.loading {
            return Err(StepError::InFlight);
        }
        let stage = self.active_stage().ok_or(StepError::Complete)?;
        self.loading = true;
        self.status = StepStatus::Idle;
        self.push(format!("Initiating {}...", stage.name));
        tracing::debug!(stage = stage.name, "step started");
        Ok(stage)
    }

    /// Apply the drawn outcome for the step in flight.
    ///
    /// On success the step stays loading until [`Stepper::settle`] runs; on
    /// failure loading clears immediately and the stepper waits on a retry.
    pub fn resolve(&mut self, outcome: MockOutcome) {
        if !self.loading {
            return;
        }
        let Some(stage) = self.active_stage() else {
            return;
        };
        match &outcome {
            MockOutcome::Response(_) => {
                self.status = StepStatus::Success;
                self.push(format!("{} completed successfully", stage.name));
                tracing::debug!(stage = stage.name, "step succeeded");
            }
            MockOutcome::Error(_) => {
                self.status = StepStatus::Error;
                self.loading = false;
                self.push(format!("{} failed", stage.name));
                tracing::debug!(stage = stage.name, "step failed");
            }
        }
        self.last_outcome = Some(outcome);
    }

    /// Advance past a successfully resolved step and return to idle.
    pub fn settle(&mut self) {
        if self.status != StepStatus::Success {
            return;
        }
        self.current_stage = (self.current_stage + 1).min(stage_count());
        self.loading = false;
        self.status = StepStatus::Idle;
    }

    fn push(&mut self, message: String) {
        self.activity.push(LogEntry::now(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdeck_types::{MockError, MockResponse};

    fn success_for(stepper: &Stepper) -> MockOutcome {
        let stage = stepper.active_stage().expect("active stage");
        MockOutcome::Response(MockResponse::new(stage, 7, 600))
    }

    fn failure_for(stepper: &Stepper) -> MockOutcome {
        let stage = stepper.active_stage().expect("active stage");
        MockOutcome::Error(MockError::new(stage))
    }

    #[test]
    fn begin_sets_loading_and_logs_once() {
        let mut stepper = Stepper::new();
        assert_eq!(stepper.activity().len(), 0);
        stepper.begin().expect("first step accepted");
        assert!(stepper.is_loading());
        assert_eq!(stepper.status(), StepStatus::Idle);
        assert_eq!(stepper.activity().len(), 1);
        assert_eq!(stepper.activity()[0].message, "Initiating Login ERP...");
    }

    #[test]
    fn begin_is_rejected_while_in_flight() {
        let mut stepper = Stepper::new();
        stepper.begin().unwrap();
        assert_eq!(stepper.begin(), Err(StepError::InFlight));
        // no extra log entry for the rejected request
        assert_eq!(stepper.activity().len(), 1);
    }

    #[test]
    fn success_advances_exactly_one_stage() {
        let mut stepper = Stepper::new();
        stepper.begin().unwrap();
        let outcome = success_for(&stepper);
        stepper.resolve(outcome);
        assert_eq!(stepper.status(), StepStatus::Success);
        assert!(stepper.is_loading());
        assert_eq!(stepper.current_stage(), 0);
        stepper.settle();
        assert_eq!(stepper.current_stage(), 1);
        assert!(!stepper.is_loading());
        assert_eq!(stepper.status(), StepStatus::Idle);
    }

    #[test]
    fn failure_keeps_stage_and_sets_error() {
        let mut stepper = Stepper::new();
        stepper.begin().unwrap();
        let outcome = failure_for(&stepper);
        stepper.resolve(outcome);
        assert_eq!(stepper.status(), StepStatus::Error);
        assert!(!stepper.is_loading());
        assert_eq!(stepper.current_stage(), 0);
        assert_eq!(stepper.activity().last().unwrap().message, "Login ERP failed");
    }

    #[test]
    fn retry_after_failure_reruns_the_same_stage() {
        let mut stepper = Stepper::new();
        stepper.begin().unwrap();
        let outcome = failure_for(&stepper);
        stepper.resolve(outcome);
        let stage = stepper.begin().expect("retry accepted");
        assert_eq!(stage.name, "Login ERP");
        let outcome = success_for(&stepper);
        stepper.resolve(outcome);
        stepper.settle();
        assert_eq!(stepper.current_stage(), 1);
    }

    #[test]
    fn settle_without_success_is_a_no_op() {
        let mut stepper = Stepper::new();
        stepper.settle();
        assert_eq!(stepper.current_stage(), 0);
        stepper.begin().unwrap();
        stepper.settle();
        assert_eq!(stepper.current_stage(), 0);
        assert!(stepper.is_loading());
    }

    #[test]
    fn full_run_terminates_and_rejects_further_advances() {
        let mut stepper = Stepper::new();
        for _ in 0..flowdeck_types::stage_count() {
            stepper.begin().unwrap();
            let outcome = success_for(&stepper);
            stepper.resolve(outcome);
            stepper.settle();
        }
        assert!(stepper.is_complete());
        assert_eq!(stepper.current_stage(), flowdeck_types::stage_count());
        assert_eq!(stepper.begin(), Err(StepError::Complete));
    }

    #[test]
    fn activity_log_preserves_insertion_order() {
        let mut stepper = Stepper::new();
        stepper.begin().unwrap();
        let outcome = failure_for(&stepper);
        stepper.resolve(outcome);
        stepper.begin().unwrap();
        let outcome = success_for(&stepper);
        stepper.resolve(outcome);
        stepper.settle();
        let messages: Vec<&str> = stepper.activity().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Initiating Login ERP...",
                "Login ERP failed",
                "Initiating Login ERP...",
                "Login ERP completed successfully",
            ]
        );
    }

    #[test]
    fn resolve_without_begin_is_ignored() {
        let mut stepper = Stepper::new();
        let stage = stepper.active_stage().unwrap();
        stepper.resolve(MockOutcome::Response(MockResponse::new(stage, 1, 500)));
        assert_eq!(stepper.status(), StepStatus::Idle);
        assert!(stepper.last_outcome().is_none());
        assert_eq!(stepper.activity().len(), 0);
    }
}
