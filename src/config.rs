//! Application-level configuration constants.

use online_stopwatch::countdown::{MAX_HOURS, MAX_MINUTES, MAX_SECONDS};
use std::ops::RangeInclusive;

// Redraw cadence; 10 ms keeps the hundredths digit live.
pub const TICK_MS: u32 = 10;

// Min/Max limits for the countdown input fields
pub const HOURS_RANGE: RangeInclusive<u32> = 0..=MAX_HOURS;
pub const MINUTES_RANGE: RangeInclusive<u32> = 0..=MAX_MINUTES;
pub const SECONDS_RANGE: RangeInclusive<u32> = 0..=MAX_SECONDS;

// Completion alerts
pub const NOTIFICATION_ICON: &str = "/favicon.ico";
pub const ALERT_SOUND: &str = "data:audio/wav;base64,UklGRnoGAABXQVZFZm10IBAAAAABAAEAQB8AAEAfAAABAAgAZGF0YQoGAACBhYqFbF1fdJivrJBhNjVgodDbq2EcBj+a2/LDciUFLIHO8tiJNwgZaLvt559NEAxQp+PwtmMcBjiR1/LMeSwFJHfH8N2QQAoUXrTp66hVFApGn+f3CjA=";
