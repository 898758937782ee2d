//! Drift-free elapsed/remaining time primitive shared by the stopwatch and the
//! countdown.
//!
//! A [`Clock`] never adds per-tick increments. It remembers the instant the
//! current run segment began plus whatever was counted before it, and derives
//! the value from the absolute delta every time it is asked. A late or skipped
//! tick therefore costs nothing: the next read is exact again.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    CountUp,
    CountDown,
}

/// Result of [`Clock::current_value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reading {
    pub value_ms: u64,
    /// Set only on the first read that lands on the zero floor of a running
    /// count-down clock.
    pub reached_zero: bool,
}

#[derive(Clone, Debug)]
pub struct Clock {
    direction: Direction,
    reference_ms: u64,
    /// Counted time before the current segment (count-up), or the budget left
    /// when the current segment began (count-down).
    accumulated_ms: u64,
    running: bool,
    zero_reported: bool,
}

impl Clock {
    pub fn count_up() -> Self {
        Self::new(Direction::CountUp, 0)
    }

    pub fn count_down(budget_ms: u64) -> Self {
        Self::new(Direction::CountDown, budget_ms)
    }

    fn new(direction: Direction, accumulated_ms: u64) -> Self {
        Self {
            direction,
            reference_ms: 0,
            accumulated_ms,
            running: false,
            zero_reported: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin a run segment at `now_ms`, resuming from the frozen value.
    pub fn start(&mut self, now_ms: u64) {
        if self.running {
            return;
        }
        self.reference_ms = now_ms;
        self.running = true;
    }

    /// Freeze the value as of `now_ms`.
    pub fn pause(&mut self, now_ms: u64) {
        if !self.running {
            return;
        }
        self.accumulated_ms = self.value_at(now_ms);
        self.running = false;
    }

    pub fn reset(&mut self, initial_ms: u64) {
        self.running = false;
        self.reference_ms = 0;
        self.accumulated_ms = initial_ms;
        self.zero_reported = false;
    }

    /// Value at `now_ms` without touching any state.
    ///
    /// A `now_ms` earlier than the segment start (wall clock stepped back)
    /// counts as zero elapsed.
    pub fn value_at(&self, now_ms: u64) -> u64 {
        if !self.running {
            return self.accumulated_ms;
        }
        let delta = now_ms.saturating_sub(self.reference_ms);
        match self.direction {
            Direction::CountUp => self.accumulated_ms.saturating_add(delta),
            Direction::CountDown => self.accumulated_ms.saturating_sub(delta),
        }
    }

    /// Value at `now_ms`, reporting the first arrival at zero of a running
    /// count-down.
    pub fn current_value(&mut self, now_ms: u64) -> Reading {
        let value_ms = self.value_at(now_ms);
        let reached_zero = self.running
            && self.direction == Direction::CountDown
            && value_ms == 0
            && !self.zero_reported;
        if reached_zero {
            self.zero_reported = true;
        }
        Reading {
            value_ms,
            reached_zero,
        }
    }
}
