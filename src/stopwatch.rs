use crate::clock::Clock;
use crate::format::ClockDisplay;
use crate::time_source::TimeSource;
use log::{debug, info};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StopwatchState {
    Idle,
    Running,
    Paused,
}

/// Snapshot of the elapsed time taken on pause or on request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LapRecord {
    /// 1-based, restarts at 1 after a reset.
    pub index: u32,
    /// Cumulative elapsed time at capture, not a split delta.
    pub value_ms: u64,
}

impl LapRecord {
    pub fn display(&self) -> ClockDisplay {
        ClockDisplay::from_millis(self.value_ms)
    }
}

/// Count-up orchestrator. Every pause boundary records a lap.
pub struct Stopwatch<S: TimeSource> {
    time: S,
    clock: Clock,
    state: StopwatchState,
    laps: Vec<LapRecord>,
    next_index: u32,
}

impl<S: TimeSource> Stopwatch<S> {
    pub fn new(time: S) -> Self {
        Self {
            time,
            clock: Clock::count_up(),
            state: StopwatchState::Idle,
            laps: Vec::new(),
            next_index: 1,
        }
    }

    pub fn state(&self) -> StopwatchState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == StopwatchState::Running
    }

    pub fn laps(&self) -> &[LapRecord] {
        &self.laps
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.clock.value_at(self.time.now_ms())
    }

    /// Returns `true` when a new run segment began, i.e. the caller should
    /// schedule ticks.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.clock.start(self.time.now_ms());
        self.state = StopwatchState::Running;
        info!("Stopwatch started at {} ms elapsed", self.clock.value_at(self.time.now_ms()));
        true
    }

    /// Freeze the elapsed time and record it as a lap.
    pub fn pause(&mut self) -> Option<LapRecord> {
        if !self.is_running() {
            return None;
        }
        self.clock.pause(self.time.now_ms());
        self.state = StopwatchState::Paused;
        let frozen = self.clock.value_at(self.time.now_ms());
        info!("Stopwatch paused at {} ms", frozen);
        self.capture(frozen)
    }

    /// Record a lap without pausing. Only while running.
    pub fn lap(&mut self) -> Option<LapRecord> {
        if !self.is_running() {
            return None;
        }
        let value = self.elapsed_ms();
        self.capture(value)
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
        self.clock.reset(0);
        self.laps.clear();
        self.next_index = 1;
        self.state = StopwatchState::Idle;
        info!("Stopwatch reset");
    }

    /// Re-derive the elapsed time for the display sink.
    pub fn tick(&self) -> ClockDisplay {
        ClockDisplay::from_millis(self.elapsed_ms())
    }

    fn capture(&mut self, value_ms: u64) -> Option<LapRecord> {
        if value_ms == 0 {
            debug!("Skipping lap capture at zero elapsed");
            return None;
        }
        let record = LapRecord {
            index: self.next_index,
            value_ms,
        };
        self.laps.push(record);
        self.next_index += 1;
        debug!("Lap {} captured at {} ms", record.index, value_ms);
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_source::ManualTime;

    fn fixture() -> (Stopwatch<ManualTime>, ManualTime) {
        let time = ManualTime::new(1_700_000_000_000);
        (Stopwatch::new(time.clone()), time)
    }

    #[test]
    fn test_pause_records_exactly_one_lap() {
        let (mut sw, time) = fixture();
        assert!(sw.start());
        time.advance(1_500);

        let lap = sw.pause().unwrap();
        assert_eq!(lap, LapRecord { index: 1, value_ms: 1_500 });
        assert_eq!(sw.laps().len(), 1);
        assert_eq!(sw.state(), StopwatchState::Paused);

        time.advance(10_000);
        assert_eq!(sw.elapsed_ms(), 1_500);
    }

    #[test]
    fn test_laps_while_running_are_indexed_in_order() {
        let (mut sw, time) = fixture();
        sw.start();
        for gap in [300, 0, 1_200] {
            time.advance(gap);
            sw.lap();
        }

        let indices: Vec<u32> = sw.laps().iter().map(|l| l.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert!(sw.laps().windows(2).all(|w| w[0].value_ms <= w[1].value_ms));
        assert_eq!(sw.laps()[2].value_ms, 1_500);
        assert!(sw.is_running());
    }

    #[test]
    fn test_lap_requires_running() {
        let (mut sw, time) = fixture();
        assert_eq!(sw.lap(), None);

        sw.start();
        time.advance(100);
        sw.pause();
        assert_eq!(sw.lap(), None);
        assert_eq!(sw.laps().len(), 1);
    }

    #[test]
    fn test_zero_elapsed_pause_records_nothing() {
        let (mut sw, _time) = fixture();
        sw.start();
        assert_eq!(sw.pause(), None);
        assert!(sw.laps().is_empty());
    }

    #[test]
    fn test_start_and_pause_idempotent() {
        let (mut sw, time) = fixture();
        assert!(sw.start());
        assert!(!sw.start());
        time.advance(700);

        sw.pause();
        assert_eq!(sw.pause(), None);
        assert_eq!(sw.laps().len(), 1);
        assert_eq!(sw.elapsed_ms(), 700);
    }

    #[test]
    fn test_resume_continues_from_frozen_value() {
        let (mut sw, time) = fixture();
        sw.start();
        time.advance(1_000);
        sw.pause();
        time.advance(5_000);
        sw.start();
        time.advance(250);

        assert_eq!(sw.elapsed_ms(), 1_250);
        let lap = sw.pause().unwrap();
        assert_eq!(lap, LapRecord { index: 2, value_ms: 1_250 });
    }

    #[test]
    fn test_reset_clears_laps_and_index() {
        let (mut sw, time) = fixture();
        sw.start();
        time.advance(400);
        sw.lap();
        sw.pause();
        sw.reset();

        assert_eq!(sw.state(), StopwatchState::Idle);
        assert!(sw.laps().is_empty());
        assert_eq!(sw.elapsed_ms(), 0);

        sw.start();
        time.advance(90);
        assert_eq!(sw.lap().unwrap().index, 1);
    }

    #[test]
    fn test_toggle_alternates() {
        let (mut sw, time) = fixture();
        assert!(sw.toggle());
        time.advance(20);
        assert!(!sw.toggle());
        assert_eq!(sw.state(), StopwatchState::Paused);
        assert!(sw.toggle());
        assert!(sw.is_running());
    }

    #[test]
    fn test_tick_reports_true_elapsed_after_irregular_gaps() {
        let (mut sw, time) = fixture();
        sw.start();
        time.advance(5);
        assert_eq!(sw.tick().to_string(), "00:00:00.00");
        time.advance(40);
        assert_eq!(sw.tick().to_string(), "00:00:00.04");
        time.advance(5);
        assert_eq!(sw.tick().to_string(), "00:00:00.05");
        assert_eq!(sw.elapsed_ms(), 50);
    }
}
