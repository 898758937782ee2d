//! Count-down timer driven by hours/minutes/seconds inputs.

use crate::clock::Clock;
use crate::format::ClockDisplay;
use crate::time_source::TimeSource;
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub const MAX_HOURS: u32 = 99;
pub const MAX_MINUTES: u32 = 59;
pub const MAX_SECONDS: u32 = 59;

/// Receives the completion signal of a countdown run.
pub trait CompletionNotifier {
    fn notify_finished(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Finished,
}

/// Countdown duration as entered by the user, each field clamped to its range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownConfig {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl CountdownConfig {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours: hours.min(MAX_HOURS),
            minutes: minutes.min(MAX_MINUTES),
            seconds: seconds.min(MAX_SECONDS),
        }
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn total_ms(&self) -> u64 {
        self.hours as u64 * 3_600_000 + self.minutes as u64 * 60_000 + self.seconds as u64 * 1_000
    }
}

pub struct Countdown<S: TimeSource> {
    time: S,
    clock: Clock,
    config: CountdownConfig,
    state: TimerState,
    notifier: Box<dyn CompletionNotifier>,
}

impl<S: TimeSource> Countdown<S> {
    pub fn new(time: S, notifier: Box<dyn CompletionNotifier>) -> Self {
        Self {
            time,
            clock: Clock::count_down(0),
            config: CountdownConfig::default(),
            state: TimerState::Idle,
            notifier,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn config(&self) -> CountdownConfig {
        self.config
    }

    pub fn remaining_ms(&self) -> u64 {
        self.clock.value_at(self.time.now_ms())
    }

    /// Store new inputs. They only take effect while not running; a running
    /// countdown keeps its budget and picks them up on the next reset.
    pub fn set_config(&mut self, config: CountdownConfig) {
        self.config = config;
        if self.is_running() {
            debug!("Countdown running, deferring input change");
            return;
        }
        self.reconfigure();
    }

    /// Returns `true` when a run segment began. A zero total is rejected.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        if self.remaining_ms() == 0 {
            self.reconfigure();
            if self.remaining_ms() == 0 {
                debug!("Countdown start rejected: zero duration");
                return false;
            }
        }
        self.clock.start(self.time.now_ms());
        self.state = TimerState::Running;
        info!("Countdown started with {} ms remaining", self.remaining_ms());
        true
    }

    pub fn pause(&mut self) {
        if !self.is_running() {
            return;
        }
        let now = self.time.now_ms();
        if self.clock.current_value(now).reached_zero {
            self.finish(now);
            return;
        }
        self.clock.pause(now);
        self.state = TimerState::Paused;
        info!("Countdown paused with {} ms remaining", self.remaining_ms());
    }

    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.pause();
            false
        } else {
            self.start()
        }
    }

    pub fn reset(&mut self) {
        self.reconfigure();
        info!("Countdown reset to {} ms", self.config.total_ms());
    }

    /// Re-derive the remaining time; on the first arrival at zero the run
    /// finishes and the notifier fires.
    pub fn tick(&mut self) -> ClockDisplay {
        if self.is_running() {
            let now = self.time.now_ms();
            if self.clock.current_value(now).reached_zero {
                self.finish(now);
            }
        }
        self.display()
    }

    /// Current remaining time without any state transition.
    pub fn display(&self) -> ClockDisplay {
        ClockDisplay::from_millis(self.remaining_ms())
    }

    fn reconfigure(&mut self) {
        self.clock.reset(self.config.total_ms());
        self.state = TimerState::Idle;
    }

    fn finish(&mut self, now_ms: u64) {
        self.clock.pause(now_ms);
        self.state = TimerState::Finished;
        info!("Countdown finished");
        self.notifier.notify_finished();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_source::ManualTime;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct CountingNotifier(Rc<Cell<u32>>);

    impl CompletionNotifier for CountingNotifier {
        fn notify_finished(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn fixture() -> (Countdown<ManualTime>, ManualTime, Rc<Cell<u32>>) {
        let time = ManualTime::new(1_700_000_000_000);
        let notifier = CountingNotifier::default();
        let fired = notifier.0.clone();
        (Countdown::new(time.clone(), Box::new(notifier)), time, fired)
    }

    #[test]
    fn test_config_clamps_and_totals() {
        let config = CountdownConfig::new(120, 75, 61);
        assert_eq!((config.hours(), config.minutes(), config.seconds()), (99, 59, 59));
        assert_eq!(CountdownConfig::new(1, 2, 3).total_ms(), 3_723_000);
    }

    #[test]
    fn test_five_second_countdown_finishes_once() {
        let (mut cd, time, fired) = fixture();
        cd.set_config(CountdownConfig::new(0, 0, 5));
        assert_eq!(cd.display().to_string(), "00:00:05.00");

        assert!(cd.start());
        time.advance(2_000);
        assert_eq!(cd.tick().to_string(), "00:00:03.00");
        time.advance(3_000);
        assert_eq!(cd.tick().to_string(), "00:00:00.00");

        assert_eq!(cd.state(), TimerState::Finished);
        assert_eq!(cd.remaining_ms(), 0);
        assert_eq!(fired.get(), 1);

        time.advance(1_000);
        cd.tick();
        cd.tick();
        assert_eq!(fired.get(), 1);
        assert!(!cd.is_running());
    }

    #[test]
    fn test_zero_duration_start_is_rejected() {
        let (mut cd, time, fired) = fixture();
        assert!(!cd.start());
        assert_eq!(cd.state(), TimerState::Idle);

        time.advance(1_000);
        cd.tick();
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_pause_and_resume_on_remaining() {
        let (mut cd, time, _fired) = fixture();
        cd.set_config(CountdownConfig::new(0, 1, 0));
        cd.start();
        time.advance(15_000);
        cd.pause();
        cd.pause();
        assert_eq!(cd.state(), TimerState::Paused);

        time.advance(30_000);
        assert_eq!(cd.remaining_ms(), 45_000);

        assert!(cd.start());
        assert!(!cd.start());
        time.advance(5_000);
        assert_eq!(cd.remaining_ms(), 40_000);
    }

    #[test]
    fn test_inputs_ignored_while_running() {
        let (mut cd, time, _fired) = fixture();
        cd.set_config(CountdownConfig::new(0, 0, 30));
        cd.start();
        time.advance(10_000);

        cd.set_config(CountdownConfig::new(1, 0, 0));
        assert!(cd.is_running());
        assert_eq!(cd.remaining_ms(), 20_000);

        cd.reset();
        assert_eq!(cd.state(), TimerState::Idle);
        assert_eq!(cd.remaining_ms(), 3_600_000);
    }

    #[test]
    fn test_input_change_while_paused_reconfigures() {
        let (mut cd, time, _fired) = fixture();
        cd.set_config(CountdownConfig::new(0, 0, 30));
        cd.start();
        time.advance(10_000);
        cd.pause();

        cd.set_config(CountdownConfig::new(0, 0, 45));
        assert_eq!(cd.state(), TimerState::Idle);
        assert_eq!(cd.remaining_ms(), 45_000);
    }

    #[test]
    fn test_start_after_finish_rearms_from_inputs() {
        let (mut cd, time, fired) = fixture();
        cd.set_config(CountdownConfig::new(0, 0, 1));
        cd.start();
        time.advance(1_500);
        cd.tick();
        assert_eq!(cd.state(), TimerState::Finished);

        assert!(cd.start());
        assert_eq!(cd.remaining_ms(), 1_000);
        time.advance(1_000);
        cd.tick();
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_pause_at_zero_finishes_instead() {
        let (mut cd, time, fired) = fixture();
        cd.set_config(CountdownConfig::new(0, 0, 2));
        cd.start();
        time.advance(2_500);
        cd.pause();
        assert_eq!(cd.state(), TimerState::Finished);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_late_tick_lands_on_true_remaining() {
        let (mut cd, time, _fired) = fixture();
        cd.set_config(CountdownConfig::new(0, 0, 10));
        cd.start();
        for gap in [5, 40, 5, 700] {
            time.advance(gap);
            cd.tick();
        }
        assert_eq!(cd.remaining_ms(), 10_000 - 750);
    }
}
