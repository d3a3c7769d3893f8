//! # Flowdeck Engine
//!
//! The functional core of the dashboard: the five-stage stepper state
//! machine, the injectable outcome source that stands in for a backend, the
//! pure inventory filter/summary derivations, and the scheduled-task
//! abstraction the UI uses for its simulated-latency timers.
//!
//! Nothing in this crate draws to the terminal; state updates are pure and
//! the only async surface is [`schedule::delayed`].

pub mod inventory;
pub mod outcome;
pub mod schedule;
pub mod stepper;

pub use outcome::{OutcomeSource, RandomOutcomes, ScriptedOutcomes};
pub use stepper::{StepError, StepStatus, Stepper};
