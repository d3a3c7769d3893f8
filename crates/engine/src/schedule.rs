//! Scheduled-task support for the simulated call timers.
//!
//! Each step runs on two fixed delays: the simulated call latency and, on
//! success, a settle delay before the stage advances. Timers are plain tokio
//! tasks that resolve to the follow-up [`Msg`]; the returned `JoinHandle`
//! doubles as the cancellation handle, so the runtime can abort anything
//! still pending at shutdown instead of letting a stale completion mutate
//! state.

use std::time::Duration;

use flowdeck_types::Msg;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// The two fixed delays of a step attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTiming {
    /// Simulated network latency before the outcome is drawn.
    pub latency: Duration,
    /// Delay between a successful resolution and the stage advance.
    pub settle: Duration,
}

impl Default for StepTiming {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(2000),
            settle: Duration::from_millis(900),
        }
    }
}

/// Spawn a timer that resolves to `msg` after `delay`.
pub fn delayed(delay: Duration, msg: Msg) -> JoinHandle<Msg> {
    tokio::spawn(async move {
        sleep(delay).await;
        msg
    })
}
