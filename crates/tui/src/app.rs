//! Application state and update logic for the Flowdeck TUI.
//!
//! `App` is the central state container: the active view, the integration
//! stepper, and the inventory filter inputs. All mutation happens in
//! [`App::update`], which takes a [`Msg`] and reports requested side
//! effects; the runtime owns the timers those effects describe.

use flowdeck_engine::inventory::{self, FilterState};
use flowdeck_engine::schedule::StepTiming;
use flowdeck_engine::{OutcomeSource, Stepper, outcome};
use flowdeck_types::{Effect, ItemStatus, Msg, View, base_inventory};

/// Spinner frames for the in-flight step indicator.
pub(crate) const THROBBER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

const STATUS_CHOICES: [Option<ItemStatus>; 3] =
    [None, Some(ItemStatus::Available), Some(ItemStatus::NotPurchased)];

pub struct App {
    /// Currently displayed view
    pub view: View,
    /// Integration demo state machine
    pub stepper: Stepper,
    /// The two fixed step delays
    pub timing: StepTiming,
    /// Inventory free-text search input
    pub search: String,
    /// Distinct vendors of the dataset, selector order
    pub vendor_choices: Vec<String>,
    /// Vendor selector position; 0 is the "All" wildcard
    pub vendor_idx: usize,
    /// Status selector position into [`STATUS_CHOICES`]
    pub status_idx: usize,
    /// Animation frame for the step spinner
    pub throbber_idx: usize,
    /// Set once the user asked to leave
    pub should_quit: bool,
    outcomes: Box<dyn OutcomeSource>,
}

impl App {
    pub fn new(outcomes: Box<dyn OutcomeSource>, timing: StepTiming) -> Self {
        Self {
            view: View::default(),
            stepper: Stepper::new(),
            timing,
            search: String::new(),
            vendor_choices: inventory::vendors(base_inventory()),
            vendor_idx: 0,
            status_idx: 0,
            throbber_idx: 0,
            should_quit: false,
            outcomes,
        }
    }

    /// Label of the current vendor selection, `"All"` for the wildcard.
    pub fn vendor_label(&self) -> &str {
        match self.vendor_idx {
            0 => "All",
            n => &self.vendor_choices[n - 1],
        }
    }

    /// Label of the current status selection, `"All"` for the wildcard.
    pub fn status_label(&self) -> &'static str {
        match STATUS_CHOICES[self.status_idx] {
            None => "All",
            Some(status) => status.label(),
        }
    }

    /// The filter the inventory view derives everything from.
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            search: self.search.clone(),
            vendor: (self.vendor_idx > 0).then(|| self.vendor_choices[self.vendor_idx - 1].clone()),
            status: STATUS_CHOICES[self.status_idx],
        }
    }

    /// Apply a message and return the side effects to perform.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        let mut effects = Vec::new();
        match msg {
            Msg::Tick => {
                if self.stepper.is_loading() {
                    self.throbber_idx = (self.throbber_idx + 1) % THROBBER.len();
                }
            }
            Msg::Resize(_, _) => {}
            Msg::SwitchView(view) => self.view = view,
            Msg::NextView => {
                self.view = match self.view {
                    View::Integration => View::Inventory,
                    View::Inventory => View::Integration,
                };
            }
            Msg::RunStep => {
                if self.stepper.begin().is_ok() {
                    self.throbber_idx = 0;
                    effects.push(Effect::ScheduleElapsed);
                }
            }
            Msg::StepElapsed => {
                if self.stepper.is_loading()
                    && let Some(stage) = self.stepper.active_stage()
                {
                    let drawn = outcome::draw(stage, self.outcomes.as_mut());
                    let succeeded = drawn.is_success();
                    self.stepper.resolve(drawn);
                    if succeeded {
                        effects.push(Effect::ScheduleSettle);
                    }
                }
            }
            Msg::StepSettled => self.stepper.settle(),
            Msg::SearchChar(c) => self.search.push(c),
            Msg::SearchBackspace => {
                self.search.pop();
            }
            Msg::SearchClear => self.search.clear(),
            Msg::CycleVendor(delta) => {
                let len = self.vendor_choices.len() as isize + 1;
                self.vendor_idx = (self.vendor_idx as isize + delta).rem_euclid(len) as usize;
            }
            Msg::CycleStatus(delta) => {
                let len = STATUS_CHOICES.len() as isize;
                self.status_idx = (self.status_idx as isize + delta).rem_euclid(len) as usize;
            }
            Msg::Quit => self.should_quit = true,
        }
        effects
    }
}
