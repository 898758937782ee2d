//! Injectable wall-clock sources.
//!
//! The stopwatch and countdown never keep their own notion of "now"; they ask a
//! [`TimeSource`] each time they need one. In the browser that is
//! `Date.now()`, on the host it is `SystemTime`, and in tests it is a
//! [`ManualTime`] that only moves when told to.

use std::cell::Cell;
use std::rc::Rc;

/// Source of the current wall-clock instant in milliseconds since the epoch.
pub trait TimeSource {
    fn now_ms(&self) -> u64;
}

/// Reads the real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl TimeSource for WallClock {
    fn now_ms(&self) -> u64 {
        wall_clock_ms()
    }
}

/// Milliseconds since the Unix epoch for the current platform.
fn wall_clock_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Manually advanced time source.
///
/// Clones share the same instant, so a test can hand one clone to a
/// stopwatch and keep another to move time forward.
#[derive(Debug, Clone, Default)]
pub struct ManualTime {
    now: Rc<Cell<u64>>,
}

impl ManualTime {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl TimeSource for ManualTime {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
