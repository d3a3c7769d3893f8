//! Runtime: terminal lifecycle and the unified event loop.
//!
//! Responsibilities
//! - Own the terminal (enter/leave alternate screen, raw mode).
//! - Drive a single loop that routes input, step timers, and animation
//!   ticks through `App::update`.
//! - Turn reported `Effect`s into scheduled timer tasks and keep their
//!   abort handles, so nothing outstanding can fire past shutdown.
//!
//! A dedicated input thread blocks on `crossterm::event::read()` and
//! forwards events over a channel; keeping the blocking read off the async
//! loop ensures reliable event delivery across terminals. Ticking is
//! adaptive: a fast interval while a step is in flight (spinner animation),
//! a slow one when idle.

use std::io::Stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::{StreamExt, stream::FuturesUnordered};
use ratatui::{Terminal, prelude::*};
use tokio::task::{AbortHandle, JoinHandle};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};

use crate::RunOptions;
use crate::app::App;
use flowdeck_engine::{OutcomeSource, RandomOutcomes, schedule};
use flowdeck_types::{Effect, Msg, View};

/// Spawn a dedicated thread that blocks on terminal input and forwards
/// events over a channel. The channel closes when the thread exits.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(100);
    std::thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    tracing::warn!("failed to read terminal event: {error}");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Translate a key press into a message, depending on the active view.
///
/// The inventory search input swallows plain characters, so global hotkeys
/// there are limited to keys that cannot collide with typing.
fn map_key(view: View, key: KeyEvent) -> Option<Msg> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Msg::Quit);
    }
    if key.code == KeyCode::Tab {
        return Some(Msg::NextView);
    }
    match view {
        View::Integration => match key.code {
            KeyCode::Char('1') => Some(Msg::SwitchView(View::Integration)),
            KeyCode::Char('2') => Some(Msg::SwitchView(View::Inventory)),
            KeyCode::Enter | KeyCode::Char('r') => Some(Msg::RunStep),
            KeyCode::Char('q') => Some(Msg::Quit),
            _ => None,
        },
        View::Inventory => match key.code {
            KeyCode::Up => Some(Msg::CycleVendor(-1)),
            KeyCode::Down => Some(Msg::CycleVendor(1)),
            KeyCode::Left => Some(Msg::CycleStatus(-1)),
            KeyCode::Right => Some(Msg::CycleStatus(1)),
            KeyCode::Backspace => Some(Msg::SearchBackspace),
            KeyCode::Esc => Some(Msg::SearchClear),
            KeyCode::Char(c) => Some(Msg::SearchChar(c)),
            _ => None,
        },
    }
}

/// Entry point for the TUI runtime: builds the outcome source, sets up the
/// terminal, runs the event loop, and restores the terminal on exit.
pub(crate) async fn run_app(options: RunOptions) -> Result<()> {
    let outcomes: Box<dyn OutcomeSource> = match options.seed {
        Some(seed) => Box::new(RandomOutcomes::seeded(seed, options.fail_rate)),
        None => Box::new(RandomOutcomes::new(options.fail_rate)),
    };
    let mut app = App::new(outcomes, options.timing);
    let mut input_receiver = spawn_input_thread();

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &mut input_receiver).await;
    cleanup_terminal(&mut terminal)?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    let mut pending: FuturesUnordered<JoinHandle<Msg>> = FuturesUnordered::new();
    let mut aborts: Vec<AbortHandle> = Vec::new();

    let fast_interval = Duration::from_millis(100);
    let idle_interval = Duration::from_millis(1000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    terminal.draw(|frame| super::draw(frame, app))?;

    loop {
        let needs_animation = app.stepper.is_loading();
        let target_interval = if needs_animation { fast_interval } else { idle_interval };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut effects: Vec<Effect> = Vec::new();
        let mut needs_render = false;
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                match maybe_event {
                    Some(Event::Key(key)) => {
                        if let Some(msg) = map_key(app.view, key) {
                            effects.extend(app.update(msg));
                        }
                    }
                    Some(Event::Resize(width, height)) => {
                        effects.extend(app.update(Msg::Resize(width, height)));
                    }
                    Some(_) => {}
                    // Input channel closed; shut down cleanly.
                    None => break,
                }
                needs_render = true;
            }

            _ = ticker.tick() => {
                effects.extend(app.update(Msg::Tick));
                needs_render = needs_animation;
            }

            Some(joined) = pending.next(), if !pending.is_empty() => {
                if let Ok(msg) = joined {
                    effects.extend(app.update(msg));
                    needs_render = true;
                }
            }

            _ = signal::ctrl_c() => break,
        }

        for effect in effects {
            let handle = match effect {
                Effect::ScheduleElapsed => schedule::delayed(app.timing.latency, Msg::StepElapsed),
                Effect::ScheduleSettle => schedule::delayed(app.timing.settle, Msg::StepSettled),
            };
            aborts.push(handle.abort_handle());
            pending.push(handle);
        }
        aborts.retain(|handle| !handle.is_finished());

        if app.should_quit {
            break;
        }
        if needs_render {
            terminal.draw(|frame| super::draw(frame, app))?;
        }
    }

    // Nothing scheduled may outlive the loop.
    for handle in aborts {
        handle.abort();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn tab_switches_views_everywhere() {
        assert_eq!(map_key(View::Integration, press(KeyCode::Tab)), Some(Msg::NextView));
        assert_eq!(map_key(View::Inventory, press(KeyCode::Tab)), Some(Msg::NextView));
    }

    #[test]
    fn enter_and_r_both_advance_in_the_integration_view() {
        assert_eq!(map_key(View::Integration, press(KeyCode::Enter)), Some(Msg::RunStep));
        assert_eq!(map_key(View::Integration, press(KeyCode::Char('r'))), Some(Msg::RunStep));
    }

    #[test]
    fn plain_characters_feed_the_search_input() {
        assert_eq!(
            map_key(View::Inventory, press(KeyCode::Char('q'))),
            Some(Msg::SearchChar('q'))
        );
        assert_eq!(map_key(View::Inventory, press(KeyCode::Esc)), Some(Msg::SearchClear));
    }

    #[test]
    fn ctrl_c_quits_from_either_view() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(View::Integration, key), Some(Msg::Quit));
        assert_eq!(map_key(View::Inventory, key), Some(Msg::Quit));
    }

    #[test]
    fn arrows_cycle_the_inventory_selectors() {
        assert_eq!(map_key(View::Inventory, press(KeyCode::Up)), Some(Msg::CycleVendor(-1)));
        assert_eq!(map_key(View::Inventory, press(KeyCode::Down)), Some(Msg::CycleVendor(1)));
        assert_eq!(map_key(View::Inventory, press(KeyCode::Left)), Some(Msg::CycleStatus(-1)));
        assert_eq!(map_key(View::Inventory, press(KeyCode::Right)), Some(Msg::CycleStatus(1)));
    }
}
