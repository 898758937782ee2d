//! Composition root holding one stopwatch and one countdown.

use crate::countdown::{CompletionNotifier, Countdown};
use crate::stopwatch::Stopwatch;
use crate::time_source::TimeSource;
use log::info;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Mode {
    #[default]
    Stopwatch,
    Timer,
}

/// Only one mode is in the foreground. Switching away pauses whatever was
/// running in the mode being left; both stay resumable.
pub struct Workspace<S: TimeSource> {
    mode: Mode,
    pub stopwatch: Stopwatch<S>,
    pub countdown: Countdown<S>,
}

impl<S: TimeSource + Clone> Workspace<S> {
    pub fn new(time: S, notifier: Box<dyn CompletionNotifier>) -> Self {
        Self {
            mode: Mode::default(),
            stopwatch: Stopwatch::new(time.clone()),
            countdown: Countdown::new(time, notifier),
        }
    }
}

impl<S: TimeSource> Workspace<S> {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns `false` when `mode` was already active.
    pub fn switch_to(&mut self, mode: Mode) -> bool {
        if self.mode == mode {
            return false;
        }
        match self.mode {
            Mode::Stopwatch if self.stopwatch.is_running() => {
                self.stopwatch.pause();
            }
            Mode::Timer if self.countdown.is_running() => {
                self.countdown.pause();
            }
            _ => {}
        }
        self.mode = mode;
        info!("Switched to {:?}", mode);
        true
    }

    /// Start/pause the foreground mode. Returns whether it is now running.
    pub fn toggle_active(&mut self) -> bool {
        match self.mode {
            Mode::Stopwatch => self.stopwatch.toggle(),
            Mode::Timer => self.countdown.toggle(),
        }
    }

    pub fn reset_active(&mut self) {
        match self.mode {
            Mode::Stopwatch => self.stopwatch.reset(),
            Mode::Timer => self.countdown.reset(),
        }
    }

    /// Lap the stopwatch if it is in the foreground and running.
    pub fn lap_active(&mut self) -> bool {
        self.mode == Mode::Stopwatch && self.stopwatch.lap().is_some()
    }
}
