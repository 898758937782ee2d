//! Millisecond → clock-string formatting.

use serde::Serialize;
use std::fmt;

/// Broken-down clock fields. Hours do not wrap at 24.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ClockParts {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
    pub hundredths: u8,
}

pub fn format(ms: u64) -> ClockParts {
    let total_secs = ms / 1000;
    ClockParts {
        hours: total_secs / 3600,
        minutes: ((total_secs % 3600) / 60) as u8,
        seconds: (total_secs % 60) as u8,
        hundredths: ((ms % 1000) / 10) as u8,
    }
}

impl ClockParts {
    /// Milliseconds represented by these fields (sub-10ms precision is lost).
    pub fn to_millis(&self) -> u64 {
        self.hours * 3_600_000
            + self.minutes as u64 * 60_000
            + self.seconds as u64 * 1_000
            + self.hundredths as u64 * 10
    }

    /// "HH:MM:SS"
    pub fn main(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }

    /// "hh"
    pub fn fractional(&self) -> String {
        format!("{:02}", self.hundredths)
    }
}

/// What the display sink receives on every tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClockDisplay {
    pub main: String,
    pub fractional: String,
}

impl ClockDisplay {
    pub fn from_millis(ms: u64) -> Self {
        let parts = format(ms);
        Self {
            main: parts.main(),
            fractional: parts.fractional(),
        }
    }
}

impl Default for ClockDisplay {
    fn default() -> Self {
        Self::from_millis(0)
    }
}

impl fmt::Display for ClockDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.main, self.fractional)
    }
}
