//! Outcome generation for simulated calls.
//!
//! The stepper never rolls dice itself: it takes a [`MockOutcome`] drawn
//! from an [`OutcomeSource`]. The production source is backed by `rand`
//! (optionally seeded for reproducible demos); tests use
//! [`ScriptedOutcomes`] to force either branch.

use flowdeck_types::{MockError, MockOutcome, MockResponse, Stage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies the random parts of a simulated call outcome.
pub trait OutcomeSource: Send {
    /// Whether the current step attempt succeeds.
    fn step_succeeds(&mut self) -> bool;
    /// Synthetic document number, `0..100_000`.
    fn doc_entry(&mut self) -> u32;
    /// Simulated call duration in milliseconds, `500..2_000`.
    fn duration_ms(&mut self) -> u32;
}

/// Draw a full outcome for a stage from the given source.
pub fn draw(stage: &Stage, source: &mut dyn OutcomeSource) -> MockOutcome {
    if source.step_succeeds() {
        MockOutcome::Response(MockResponse::new(stage, source.doc_entry(), source.duration_ms()))
    } else {
        MockOutcome::Error(MockError::new(stage))
    }
}

/// `rand`-backed outcome source with a configurable failure probability.
#[derive(Debug)]
pub struct RandomOutcomes {
    rng: StdRng,
    fail_rate: f64,
}

impl RandomOutcomes {
    pub fn new(fail_rate: f64) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            fail_rate,
        }
    }

    /// Deterministic source for reproducible demo runs.
    pub fn seeded(seed: u64, fail_rate: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            fail_rate,
        }
    }
}

impl OutcomeSource for RandomOutcomes {
    fn step_succeeds(&mut self) -> bool {
        self.rng.gen_range(0.0..1.0) > self.fail_rate
    }

    fn doc_entry(&mut self) -> u32 {
        self.rng.gen_range(0..100_000)
    }

    fn duration_ms(&mut self) -> u32 {
        self.rng.gen_range(500..2_000)
    }
}

/// Outcome source that plays back a fixed script of success flags.
///
/// Once the script is exhausted every further attempt succeeds. Document
/// numbers and durations are fixed.
#[derive(Debug, Default)]
pub struct ScriptedOutcomes {
    script: std::collections::VecDeque<bool>,
}

impl ScriptedOutcomes {
    pub fn new(script: impl IntoIterator<Item = bool>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl OutcomeSource for ScriptedOutcomes {
    fn step_succeeds(&mut self) -> bool {
        self.script.pop_front().unwrap_or(true)
    }

    fn doc_entry(&mut self) -> u32 {
        12_345
    }

    fn duration_ms(&mut self) -> u32 {
        750
    }
}
