use online_stopwatch::{StopwatchState, TimerState};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::RangeInclusive;

// Leading integer, the way a browser numeric field reads "12abc" as 12.
static LEADING_INT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").unwrap());

/// Parse a numeric input field and clamp it into `range`.
///
/// Malformed or empty input reads as 0 before clamping; values too large
/// for `i64` clamp to the upper bound.
pub fn parse_field(input: &str, range: &RangeInclusive<u32>) -> u32 {
    let raw: i64 = match LEADING_INT_REGEX.captures(input) {
        Some(captures) => captures[1].parse().unwrap_or_else(|_| {
            if captures[1].starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }
        }),
        None => 0,
    };
    raw.clamp(*range.start() as i64, *range.end() as i64) as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Toggle,
    Reset,
    Lap,
}

/// Map a keydown to a shortcut. Keys typed into form fields never trigger one.
pub fn resolve_shortcut(
    code: &str,
    ctrl_or_meta: bool,
    target_tag: Option<&str>,
) -> Option<Shortcut> {
    if let Some(tag) = target_tag {
        if tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("select") {
            return None;
        }
    }
    match code {
        "Space" => Some(Shortcut::Toggle),
        "KeyR" if ctrl_or_meta => Some(Shortcut::Reset),
        "KeyL" if !ctrl_or_meta => Some(Shortcut::Lap),
        _ => None,
    }
}

/// Which label and enabled-state the start/pause buttons show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonPhase {
    Ready,
    Running,
    Resumable,
}

impl ButtonPhase {
    pub fn start_label_key(&self) -> &'static str {
        match self {
            ButtonPhase::Ready => "start",
            ButtonPhase::Running => "running",
            ButtonPhase::Resumable => "continue",
        }
    }

    pub fn start_disabled(&self) -> bool {
        *self == ButtonPhase::Running
    }

    pub fn pause_disabled(&self) -> bool {
        *self != ButtonPhase::Running
    }
}

impl From<StopwatchState> for ButtonPhase {
    fn from(state: StopwatchState) -> Self {
        match state {
            StopwatchState::Idle => ButtonPhase::Ready,
            StopwatchState::Running => ButtonPhase::Running,
            StopwatchState::Paused => ButtonPhase::Resumable,
        }
    }
}

impl From<TimerState> for ButtonPhase {
    fn from(state: TimerState) -> Self {
        match state {
            TimerState::Idle | TimerState::Finished => ButtonPhase::Ready,
            TimerState::Running => ButtonPhase::Running,
            TimerState::Paused => ButtonPhase::Resumable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_reads_leading_integer() {
        let range = 0..=59;
        assert_eq!(parse_field("12", &range), 12);
        assert_eq!(parse_field(" 7 ", &range), 7);
        assert_eq!(parse_field("12abc", &range), 12);
        assert_eq!(parse_field("+5", &range), 5);
    }

    #[test]
    fn test_parse_field_malformed_is_zero() {
        let range = 0..=59;
        assert_eq!(parse_field("", &range), 0);
        assert_eq!(parse_field("abc", &range), 0);
        assert_eq!(parse_field("  ", &range), 0);
    }

    #[test]
    fn test_parse_field_clamps() {
        assert_eq!(parse_field("-3", &(0..=99)), 0);
        assert_eq!(parse_field("500", &(0..=99)), 99);
        assert_eq!(parse_field("99999999999999999999999", &(0..=59)), 59);
        assert_eq!(parse_field("-99999999999999999999999", &(1..=59)), 1);
        assert_eq!(parse_field("", &(1..=59)), 1);
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(resolve_shortcut("Space", false, Some("BODY")), Some(Shortcut::Toggle));
        assert_eq!(resolve_shortcut("KeyR", true, None), Some(Shortcut::Reset));
        assert_eq!(resolve_shortcut("KeyR", false, None), None);
        assert_eq!(resolve_shortcut("KeyL", false, Some("DIV")), Some(Shortcut::Lap));
        assert_eq!(resolve_shortcut("KeyX", false, None), None);
    }

    #[test]
    fn test_shortcuts_ignored_in_form_fields() {
        assert_eq!(resolve_shortcut("Space", false, Some("INPUT")), None);
        assert_eq!(resolve_shortcut("KeyR", true, Some("select")), None);
    }

    #[test]
    fn test_button_phase_labels() {
        assert_eq!(ButtonPhase::from(StopwatchState::Idle).start_label_key(), "start");
        assert_eq!(ButtonPhase::from(StopwatchState::Running).start_label_key(), "running");
        assert_eq!(ButtonPhase::from(StopwatchState::Paused).start_label_key(), "continue");
        assert_eq!(ButtonPhase::from(TimerState::Finished).start_label_key(), "start");

        let running = ButtonPhase::from(TimerState::Running);
        assert!(running.start_disabled());
        assert!(!running.pause_disabled());
        assert!(ButtonPhase::from(TimerState::Paused).pause_disabled());
    }
}
