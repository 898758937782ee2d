//! Timekeeping engine for the online stopwatch and timer.
//!
//! Everything here is plain state-transition logic with no timer
//! registration and no DOM access, so it runs under `cargo test` on the host
//! as well as in the browser. The Yew front end in `main.rs` owns a
//! [`Workspace`], drives its `tick()` methods from an interval, and renders
//! the resulting [`ClockDisplay`] values.

use wasm_bindgen::prelude::*;

pub mod clock;
pub mod countdown;
pub mod format;
pub mod i18n;
pub mod stopwatch;
pub mod store;
pub mod theme;
pub mod time_source;
pub mod workspace;

pub use clock::{Clock, Direction, Reading};
pub use countdown::{CompletionNotifier, Countdown, CountdownConfig, TimerState};
pub use format::{format, ClockDisplay, ClockParts};
pub use i18n::{Language, Translator};
pub use stopwatch::{LapRecord, Stopwatch, StopwatchState};
pub use theme::{Theme, ThemeColor};
pub use time_source::{ManualTime, TimeSource, WallClock};
pub use workspace::{Mode, Workspace};

/// JavaScript entry point: format a millisecond count as
/// `{ main: "HH:MM:SS", fractional: "hh" }`.
///
/// Takes an `f64` because that is what JavaScript numbers are; negative,
/// NaN and infinite inputs format as zero.
#[wasm_bindgen(js_name = formatClock)]
pub fn format_clock(ms: f64) -> JsValue {
    let display = ClockDisplay::from_millis(clamp_js_millis(ms));
    serde_wasm_bindgen::to_value(&display).unwrap_or(JsValue::NULL)
}

fn clamp_js_millis(ms: f64) -> u64 {
    if ms.is_finite() && ms > 0.0 {
        ms.floor() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_js_millis() {
        assert_eq!(clamp_js_millis(1234.9), 1234);
        assert_eq!(clamp_js_millis(-5.0), 0);
        assert_eq!(clamp_js_millis(f64::NAN), 0);
        assert_eq!(clamp_js_millis(f64::INFINITY), 0);
    }
}
