//! # Flowdeck TUI Library
//!
//! Terminal user interface for the Flowdeck demo dashboard. It renders the
//! simulated integration workflow and the inventory browser with Ratatui,
//! and drives them from a single tokio event loop that routes terminal
//! input, step timers, and animation ticks.
//!
//! ## Architecture
//!
//! The UI follows a message-driven design: key presses and timer
//! completions become [`flowdeck_types::Msg`] values, the central
//! [`app::App`] state applies them and reports requested side effects as
//! [`flowdeck_types::Effect`]s, and the runtime turns those effects into
//! scheduled timer tasks.

mod app;
mod theme;
mod ui;

use anyhow::Result;
use flowdeck_engine::schedule::StepTiming;

/// Startup configuration handed over from the binary.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Probability that a simulated step fails.
    pub fail_rate: f64,
    /// Optional seed for a reproducible outcome sequence.
    pub seed: Option<u64>,
    /// The two fixed step delays.
    pub timing: StepTiming,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            fail_rate: 0.1,
            seed: None,
            timing: StepTiming::default(),
        }
    }
}

/// Runs the main TUI application loop.
///
/// Sets up the terminal, drives the event loop until the user quits, and
/// restores the terminal on the way out.
///
/// # Errors
///
/// Returns an error for terminal setup/teardown failures or a broken event
/// loop; domain-level step failures are part of the demo and never surface
/// here.
pub async fn run(options: RunOptions) -> Result<()> {
    ui::runtime::run_app(options).await
}
